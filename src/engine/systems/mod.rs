pub mod keyboard_input_system;

pub use keyboard_input_system::{ key_binding, KeyAction, KeyboardInputSystem };
