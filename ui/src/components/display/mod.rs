pub mod loading_indicator;
pub mod message_banner;

pub use loading_indicator::*;
pub use message_banner::*;
