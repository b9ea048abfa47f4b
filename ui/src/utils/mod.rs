pub mod console_macros;
pub mod escape;
pub mod navigation;
pub mod parse;
