//! Configuration constants.
//!
//! Wire-level constants for the OpenX bid endpoint and the identity providers the
//! request builder understands.

/// Partner profile identifier.
pub const PARTNER_ID: &str = "OpenXHtb";

/// Path of the bid endpoint on the partner's delivery domain.
pub const BID_ENDPOINT_PATH: &str = "/w/1.0/arj";

/// Scheme used for the bid endpoint.
pub const BID_ENDPOINT_SCHEME: &str = "https";

// Query parameter names
pub const PARAM_AD_UNIT_IDS: &str = "auid";
pub const PARAM_AD_UNIT_SIZES: &str = "aus";
pub const PARAM_BUSINESS_CODE: &str = "bc";
pub const PARAM_BID_ENDPOINT_FLAG: &str = "be";
pub const PARAM_GDPR: &str = "gdpr";
pub const PARAM_TTD_UUID: &str = "ttduuid";

/// Business code identifying the wrapper integration (`bc`).
pub const BUSINESS_CODE: &str = "hb_ix";

/// Fixed bid-endpoint flag (`be`).
pub const BID_ENDPOINT_FLAG: i64 = 1;

/// Default consent flag (`gdpr`): consent-framework participation enabled.
///
/// Not yet derived from a real consent signal; profiles may override it.
pub const DEFAULT_GDPR_CONSENT: &str = "1";

// Serialization separators
/// Joins ad-unit ids and size groups across parcels.
pub const SLOT_SEPARATOR: &str = ",";
/// Joins the sizes of a single slot.
pub const SIZE_SEPARATOR: &str = "|";
/// Joins width and height within one size token.
pub const DIMENSION_SEPARATOR: &str = "x";

// Identity resolution
/// Identity provider key whose records carry The Trade Desk identifier.
pub const IDENTITY_PROVIDER_ADSERVER_ORG: &str = "AdserverOrgIp";
/// `rtiPartner` tag marking the resolved Trade Desk id among a record's uids.
pub const RTI_PARTNER_TDID: &str = "TDID";

/// Length of generated callback ids.
pub const CALLBACK_ID_LENGTH: usize = 8;
