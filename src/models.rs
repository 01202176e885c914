//! Parcel model: the unit of work handed to the request builder.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::config::{
    DIMENSION_SEPARATOR, IDENTITY_PROVIDER_ADSERVER_ORG, RTI_PARTNER_TDID, SLOT_SEPARATOR,
};
use crate::error_handling::ConfigurationError;

/// Ad size as `(width, height)`; serialized as a `[width, height]` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size(pub u32, pub u32);

impl Size {
    pub fn width(&self) -> u32 {
        self.0
    }

    pub fn height(&self) -> u32 {
        self.1
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.0, DIMENSION_SEPARATOR, self.1)
    }
}

/// Partner-side configuration for one slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeSlot {
    /// Exchange-side ad-unit identifier
    pub ad_unit_id: String,
    /// Sizes to bid on, in preference order
    pub sizes: Vec<Size>,
}

impl ExchangeSlot {
    pub fn new(ad_unit_id: impl Into<String>, sizes: Vec<Size>) -> Self {
        Self {
            ad_unit_id: ad_unit_id.into(),
            sizes,
        }
    }

    /// Checks the slot can be serialized into a bid request.
    ///
    /// `host_slot` only labels the error.
    pub fn validate(&self, host_slot: &str) -> Result<(), ConfigurationError> {
        if self.ad_unit_id.trim().is_empty() {
            return Err(ConfigurationError::MissingAdUnitId {
                host_slot: host_slot.to_string(),
            });
        }
        if self.ad_unit_id.contains(SLOT_SEPARATOR) {
            return Err(ConfigurationError::InvalidAdUnitId {
                ad_unit_id: self.ad_unit_id.clone(),
                separator: SLOT_SEPARATOR.to_string(),
            });
        }
        if self.sizes.is_empty() {
            return Err(ConfigurationError::EmptySizes {
                host_slot: host_slot.to_string(),
                ad_unit_id: self.ad_unit_id.clone(),
            });
        }
        if let Some(bad) = self.sizes.iter().find(|s| s.0 == 0 || s.1 == 0) {
            return Err(ConfigurationError::InvalidSize {
                ad_unit_id: self.ad_unit_id.clone(),
                width: bad.0,
                height: bad.1,
            });
        }
        Ok(())
    }
}

/// Page-side ad slot being filled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HostSlot {
    id: String,
}

impl HostSlot {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

/// Identity data resolved before request time, keyed by provider name.
pub type IdentityData = BTreeMap<String, IdentityRecord>;

/// One identity provider's resolved record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityRecord {
    pub data: IdentityPayload,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub uids: Vec<IdentityUid>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityUid {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ext: Option<UidExt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UidExt {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rti_partner: Option<String>,
}

impl IdentityRecord {
    /// Builds a record holding a single Trade Desk id (mostly useful in tests).
    pub fn trade_desk(id: impl Into<String>) -> Self {
        Self {
            data: IdentityPayload {
                source: Some("adserver.org".to_string()),
                uids: vec![IdentityUid {
                    id: id.into(),
                    ext: Some(UidExt {
                        rti_partner: Some(RTI_PARTNER_TDID.to_string()),
                    }),
                }],
            },
        }
    }

    /// Returns the resolved Trade Desk id.
    ///
    /// Prefers the uid tagged `rtiPartner: TDID`; otherwise the first uid.
    /// Blank ids are treated as unresolved.
    pub fn trade_desk_id(&self) -> Option<&str> {
        let uids = &self.data.uids;
        let tagged = uids.iter().find(|uid| {
            uid.ext
                .as_ref()
                .and_then(|ext| ext.rti_partner.as_deref())
                .is_some_and(|p| p == RTI_PARTNER_TDID)
        });
        tagged
            .or_else(|| uids.first())
            .map(|uid| uid.id.as_str())
            .filter(|id| !id.trim().is_empty())
    }
}

/// Looks up the Trade Desk id under the recognized identity provider.
pub fn resolve_trade_desk_id(identity: &IdentityData) -> Option<&str> {
    identity
        .get(IDENTITY_PROVIDER_ADSERVER_ORG)
        .and_then(IdentityRecord::trade_desk_id)
}

/// One (host slot, exchange slot) pairing to be bid on in a single auction round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    pub partner_id: String,
    pub host_slot: HostSlot,
    /// Opaque back-reference to slot metadata; passed through untouched.
    pub host_slot_reference: String,
    pub exchange_slot: ExchangeSlot,
    pub correlation_id: String,
    pub identity_data: Option<Arc<IdentityData>>,
}

impl Parcel {
    pub fn new(
        partner_id: impl Into<String>,
        host_slot: HostSlot,
        exchange_slot: ExchangeSlot,
        correlation_id: impl Into<String>,
    ) -> Self {
        Self {
            partner_id: partner_id.into(),
            host_slot,
            host_slot_reference: String::new(),
            exchange_slot,
            correlation_id: correlation_id.into(),
            identity_data: None,
        }
    }

    pub fn with_identity(mut self, identity: Arc<IdentityData>) -> Self {
        self.identity_data = Some(identity);
        self
    }

    pub fn with_reference(mut self, reference: impl Into<String>) -> Self {
        self.host_slot_reference = reference.into();
        self
    }

    /// Trade Desk id carried by this parcel's identity data, if any.
    pub fn trade_desk_id(&self) -> Option<&str> {
        self.identity_data
            .as_deref()
            .and_then(resolve_trade_desk_id)
    }
}
