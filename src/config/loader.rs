//! JSON loaders for partner configuration and identity data.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};

use crate::config::types::PartnerConfig;
use crate::models::IdentityData;

/// Reads and validates a partner configuration file.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid partner-config JSON, or does
/// not pass `PartnerConfig::validate`.
pub fn load_partner_config(path: &Path) -> Result<PartnerConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read partner config {}", path.display()))?;
    let config: PartnerConfig = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse partner config {}", path.display()))?;
    config
        .validate()
        .with_context(|| format!("Invalid partner config {}", path.display()))?;

    info!(
        "Loaded partner config with {} host slots and {} exchange slots",
        config.mapping.len(),
        config.x_slots.len()
    );
    Ok(config)
}

/// Reads a resolved identity data file (provider name to identity record).
pub fn load_identity_data(path: &Path) -> Result<IdentityData> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read identity data {}", path.display()))?;
    let identity: IdentityData = serde_json::from_str(&raw)
        .with_context(|| format!("Failed to parse identity data {}", path.display()))?;
    debug!("Loaded identity data for {} providers", identity.len());
    Ok(identity)
}
