//! # Cinebot Config
//!
//! Configuration management for Cinebot: rooms, schedule defaults, retry
//! policy and logging.

mod error;
mod loader;
mod schema;
mod validator;

pub use error::ConfigError;
pub use loader::ConfigLoader;
pub use schema::*;
pub use validator::{ConfigValidator, ValidationError, ValidationResult, ValidationWarning};
