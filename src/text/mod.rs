pub mod config;
pub mod font;
pub mod metrics;
pub mod source;
