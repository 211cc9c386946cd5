pub mod components;
pub mod rendering;
pub mod systems;
pub mod utils;

// Re-export commonly used items
pub use components::*;
pub use rendering::*;
pub use systems::*;
