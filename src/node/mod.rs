pub mod config;
pub mod kind;

pub use config::*;
pub use kind::*;
