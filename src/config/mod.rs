//! Partner configuration and constants.
//!
//! This module provides:
//! - Wire constants for the bid endpoint (parameter names, fixed values)
//! - The partner configuration and the static profile derived from it
//! - JSON loaders for configuration and identity data

mod constants;
mod loader;
mod types;

// Re-export all constants
pub use constants::*;
pub use loader::{load_identity_data, load_partner_config};
pub use types::{
    endpoint_for_domain, Architecture, IdentityPolicy, LogFormat, LogLevel, PartnerConfig,
    Profile,
};
