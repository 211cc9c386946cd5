pub mod input_utils;
pub mod math;

pub use input_utils::{ scroll_lines, MouseTracker };
