//! Error type definitions.

use log::SetLoggerError;
use thiserror::Error;

/// Error types for initialization failures.
#[derive(Error, Debug)]
#[allow(clippy::enum_variant_names)] // All variants end with "Error" by convention
pub enum InitializationError {
    /// Error initializing the logger.
    #[error("Logger initialization error: {0}")]
    LoggerError(#[from] SetLoggerError),
}

/// Malformed or incomplete partner configuration.
///
/// This is the only error class the request builder raises. It is fatal to the
/// call that produced it: a batch with a broken exchange slot never yields a
/// partial descriptor, since a dropped slot would silently under-bid the page.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The builder was handed no parcels.
    #[error("cannot build a bid request from an empty parcel batch")]
    EmptyBatch,

    /// A parcel belongs to a different partner profile than the one building the request.
    #[error("parcel for host slot '{host_slot}' belongs to partner '{found}', expected '{expected}'")]
    PartnerMismatch {
        host_slot: String,
        expected: String,
        found: String,
    },

    /// An exchange slot has no usable ad-unit identifier.
    #[error("exchange slot for host slot '{host_slot}' has no ad unit id")]
    MissingAdUnitId { host_slot: String },

    /// An ad-unit identifier contains a character reserved by the wire format.
    #[error("ad unit id '{ad_unit_id}' contains reserved separator '{separator}'")]
    InvalidAdUnitId {
        ad_unit_id: String,
        separator: String,
    },

    /// An exchange slot has an empty size list.
    #[error("exchange slot '{ad_unit_id}' (host slot '{host_slot}') has no sizes")]
    EmptySizes {
        host_slot: String,
        ad_unit_id: String,
    },

    /// An exchange slot lists a size with a zero dimension.
    #[error("exchange slot '{ad_unit_id}' has invalid size {width}x{height}")]
    InvalidSize {
        ad_unit_id: String,
        width: u32,
        height: u32,
    },

    /// The host-slot mapping names an exchange slot missing from the xSlots table.
    #[error("host slot '{host_slot}' maps to unknown exchange slot '{x_slot}'")]
    UnknownExchangeSlot { host_slot: String, x_slot: String },

    /// The delivery domain does not produce a valid endpoint URL.
    #[error("invalid bid endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configuration_error_messages() {
        let err = ConfigurationError::EmptySizes {
            host_slot: "htSlot1".to_string(),
            ad_unit_id: "54321".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "exchange slot '54321' (host slot 'htSlot1') has no sizes"
        );

        let err = ConfigurationError::UnknownExchangeSlot {
            host_slot: "htSlot2".to_string(),
            x_slot: "9".to_string(),
        };
        assert!(err.to_string().contains("unknown exchange slot '9'"));
    }

    #[test]
    fn test_partner_mismatch_names_both_partners() {
        let err = ConfigurationError::PartnerMismatch {
            host_slot: "htSlot1".to_string(),
            expected: "OpenXHtb".to_string(),
            found: "OtherHtb".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("OpenXHtb"));
        assert!(msg.contains("OtherHtb"));
    }

    #[test]
    fn test_configuration_error_converts_to_anyhow() {
        // Loader and CLI code propagate builder errors through anyhow
        let err: anyhow::Error = ConfigurationError::EmptyBatch.into();
        assert!(err.downcast_ref::<ConfigurationError>().is_some());
    }
}
