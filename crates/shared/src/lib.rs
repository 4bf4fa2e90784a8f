//! # Pinnwand Shared
//!
//! Application error, configuration and logging used by the binary.

pub mod config;
pub mod error;
pub mod logging;

// Re-exports
pub use config::*;
pub use error::*;
pub use logging::init_logging;
