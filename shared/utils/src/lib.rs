pub mod config;
pub mod logging;
pub mod error;
pub mod random_data;

pub use crate::config::*;
pub use crate::logging::*;
pub use crate::error::*;
pub use crate::random_data::*;
