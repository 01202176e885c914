//! Error handling.
//!
//! This module provides:
//! - `ConfigurationError`, raised by the request builder and the config layer
//! - `InitializationError`, raised while setting up logging

mod types;

// Re-export public API
pub use types::{ConfigurationError, InitializationError};
