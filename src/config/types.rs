//! Configuration types.
//!
//! This module defines the partner configuration read from JSON, the static
//! partner profile derived from it, and the enums used for logging options.

use std::collections::BTreeMap;

use clap::ValueEnum;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};
use url::Url;

use crate::config::constants::{
    BID_ENDPOINT_FLAG, BID_ENDPOINT_PATH, BID_ENDPOINT_SCHEME, BUSINESS_CODE,
    DEFAULT_GDPR_CONSENT, PARTNER_ID,
};
use crate::error_handling::ConfigurationError;
use crate::models::ExchangeSlot;

/// Logging level for the application.
///
/// Controls the verbosity of log output, from most restrictive (Error) to most
/// verbose (Trace).
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    /// Only error messages
    Error,
    /// Error and warning messages
    Warn,
    /// Error, warning, and informational messages
    Info,
    /// All messages except trace
    Debug,
    /// All messages including trace
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(l: LogLevel) -> Self {
        match l {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Log output format.
///
/// - `Plain`: Human-readable format with colors (default)
/// - `Json`: Structured JSON format for machine parsing
#[derive(Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable format with colors (default)
    Plain,
    /// Structured JSON format for machine parsing
    Json,
}

/// Dispatch architecture declared by a partner profile.
///
/// The request builder has no mode-specific behavior; the architecture only
/// decides how many parcels the dispatcher hands it per call.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Architecture {
    /// Single-Request-Auction: one request covers every slot in the round.
    #[default]
    Sra,
    /// Multi-Request-Auction: one request per slot.
    Mra,
}

/// Which parcel's identity data wins when several in one batch carry a
/// resolved identifier.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum IdentityPolicy {
    /// The first parcel (in batch order) with a resolved identifier wins.
    #[default]
    FirstMatch,
    /// The last parcel (in batch order) with a resolved identifier wins.
    LastMatch,
}

/// Partner configuration as supplied by the wrapper.
///
/// ```json
/// {
///   "delDomain": "example-d.openx.net",
///   "xSlots": { "1": { "adUnitId": "54321", "sizes": [[300, 250]] } },
///   "mapping": { "htSlot1": ["1"] }
/// }
/// ```
///
/// `mapping` keeps the order of the source document, which is the order host
/// slots are expanded into parcels and serialized into `auid`/`aus`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartnerConfig {
    /// Delivery domain hosting the bid endpoint
    pub del_domain: String,

    /// Dispatch architecture override (defaults to SRA)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub architecture: Option<Architecture>,

    /// Consent flag override for the `gdpr` parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gdpr_consent_default: Option<String>,

    /// Multi-identity resolution policy override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub identity_policy: Option<IdentityPolicy>,

    /// Exchange slots keyed by exchange-slot name
    pub x_slots: BTreeMap<String, ExchangeSlot>,

    /// Host-slot name to the exchange-slot names it is auctioned through
    pub mapping: IndexMap<String, Vec<String>>,
}

impl PartnerConfig {
    /// Checks the configuration as a whole.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigurationError` found: an invalid delivery domain,
    /// a malformed exchange slot, or a mapping entry naming an unknown exchange slot.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        endpoint_for_domain(&self.del_domain)?;

        for (host_slot, x_slot_names) in &self.mapping {
            for x_slot_name in x_slot_names {
                let x_slot = self.x_slots.get(x_slot_name).ok_or_else(|| {
                    ConfigurationError::UnknownExchangeSlot {
                        host_slot: host_slot.clone(),
                        x_slot: x_slot_name.clone(),
                    }
                })?;
                x_slot.validate(host_slot)?;
            }
        }

        Ok(())
    }
}

/// Static partner profile.
///
/// Fixed at configuration load time; every request the profile builds carries
/// the same endpoint and wire constants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Partner identifier every parcel must carry
    pub partner_id: String,

    /// Dispatch architecture
    pub architecture: Architecture,

    /// Fully-qualified bid endpoint, without query string
    pub endpoint: String,

    /// Business code sent as `bc`
    pub business_code: String,

    /// Numeric flag sent as `be`
    pub bid_endpoint_flag: i64,

    /// Consent flag sent as `gdpr`
    pub gdpr_consent: String,

    /// Resolution policy when several parcels carry identity data
    pub identity_policy: IdentityPolicy,
}

impl Profile {
    /// Creates a profile with the default wire constants for the given endpoint domain.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError::InvalidEndpoint` if `del_domain` is not a bare host.
    pub fn new(del_domain: &str) -> Result<Self, ConfigurationError> {
        Ok(Self {
            partner_id: PARTNER_ID.to_string(),
            architecture: Architecture::default(),
            endpoint: endpoint_for_domain(del_domain)?,
            business_code: BUSINESS_CODE.to_string(),
            bid_endpoint_flag: BID_ENDPOINT_FLAG,
            gdpr_consent: DEFAULT_GDPR_CONSENT.to_string(),
            identity_policy: IdentityPolicy::default(),
        })
    }

    /// Derives the profile from a partner configuration, applying its overrides.
    pub fn from_config(config: &PartnerConfig) -> Result<Self, ConfigurationError> {
        let mut profile = Self::new(&config.del_domain)?;
        if let Some(architecture) = config.architecture {
            profile.architecture = architecture;
        }
        if let Some(gdpr) = &config.gdpr_consent_default {
            profile.gdpr_consent = gdpr.clone();
        }
        if let Some(policy) = config.identity_policy {
            profile.identity_policy = policy;
        }
        Ok(profile)
    }
}

/// Builds the bid endpoint URL for a delivery domain.
///
/// The domain must be a bare host (optionally with a port): anything that would
/// change the path or add a query string is rejected.
pub fn endpoint_for_domain(del_domain: &str) -> Result<String, ConfigurationError> {
    let invalid = |reason: &str| ConfigurationError::InvalidEndpoint {
        endpoint: del_domain.to_string(),
        reason: reason.to_string(),
    };

    let domain = del_domain.trim();
    if domain.is_empty() {
        return Err(invalid("delivery domain is empty"));
    }
    if domain.contains(['/', '?', '#', '@']) {
        return Err(invalid("delivery domain must be a bare host"));
    }

    let raw = format!("{}://{}{}", BID_ENDPOINT_SCHEME, domain, BID_ENDPOINT_PATH);
    let parsed = Url::parse(&raw).map_err(|e| invalid(&e.to_string()))?;
    if parsed.host_str().is_none() {
        return Err(invalid("URL has no host component"));
    }

    Ok(parsed.to_string())
}
