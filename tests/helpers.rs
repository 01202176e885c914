// Shared test helpers for loading fixtures and building partner modules.

use std::path::PathBuf;
use std::sync::Arc;

use openx_htb::{
    load_identity_data, load_partner_config, Architecture, IdentityData, PartnerConfig,
    PartnerModule, QueryValue, RequestDescriptor,
};

/// Path of a file under `tests/support/`.
pub fn support_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("support")
        .join(name)
}

/// The mock partner config with three host slots.
#[allow(dead_code)] // Used by other test files
pub fn mock_partner_config() -> PartnerConfig {
    load_partner_config(&support_path("mock_partner_config.json"))
        .expect("Failed to load mock partner config")
}

/// The mock identity data carrying Trade Desk id `uid123`.
#[allow(dead_code)] // Used by other test files
pub fn mock_identity_data() -> Arc<IdentityData> {
    Arc::new(
        load_identity_data(&support_path("mock_identity_data.json"))
            .expect("Failed to load mock identity data"),
    )
}

/// A partner module over the mock config with the given architecture.
#[allow(dead_code)] // Used by other test files
pub fn partner_module(architecture: Architecture) -> PartnerModule {
    let mut config = mock_partner_config();
    config.architecture = Some(architecture);
    PartnerModule::new(config).expect("Mock partner config should be valid")
}

/// String value of a query parameter, panicking if absent or numeric.
#[allow(dead_code)] // Used by other test files
pub fn text_param<'a>(request: &'a RequestDescriptor, key: &str) -> &'a str {
    request
        .param(key)
        .and_then(QueryValue::as_str)
        .unwrap_or_else(|| panic!("Request has no string param '{}'", key))
}
