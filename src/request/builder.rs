//! Bid request construction.
//!
//! `build` turns a batch of parcels into one `RequestDescriptor`. It behaves the
//! same whether the batch holds every slot of the round (SRA) or a single slot
//! (MRA); only the number of segments in `auid`/`aus` changes, and a batch
//! whose parcels share one correlation id reuses it as the callback id.

use std::collections::BTreeMap;

use log::{debug, trace};
use rand::distr::Alphanumeric;
use rand::Rng;

use crate::config::{
    IdentityPolicy, Profile, CALLBACK_ID_LENGTH, PARAM_AD_UNIT_IDS, PARAM_AD_UNIT_SIZES,
    PARAM_BID_ENDPOINT_FLAG, PARAM_BUSINESS_CODE, PARAM_GDPR, PARAM_TTD_UUID, SIZE_SEPARATOR,
    SLOT_SEPARATOR,
};
use crate::error_handling::ConfigurationError;
use crate::models::{Parcel, Size};
use crate::request::descriptor::{QueryValue, RequestDescriptor};

/// Builds the bid request for a batch of parcels.
///
/// Segment *i* of `auid` and `aus` always describes `parcels[i]`.
///
/// # Errors
///
/// Returns `ConfigurationError` if the batch is empty, a parcel belongs to a
/// different partner, or any exchange slot is malformed. No descriptor is
/// produced for a batch containing a bad slot.
pub fn build(profile: &Profile, parcels: &[Parcel]) -> Result<RequestDescriptor, ConfigurationError> {
    if parcels.is_empty() {
        return Err(ConfigurationError::EmptyBatch);
    }

    let mut ad_unit_ids = Vec::with_capacity(parcels.len());
    let mut size_groups = Vec::with_capacity(parcels.len());

    for parcel in parcels {
        if parcel.partner_id != profile.partner_id {
            return Err(ConfigurationError::PartnerMismatch {
                host_slot: parcel.host_slot.id().to_string(),
                expected: profile.partner_id.clone(),
                found: parcel.partner_id.clone(),
            });
        }

        let slot = &parcel.exchange_slot;
        slot.validate(parcel.host_slot.id())?;

        let group = size_group(&slot.sizes);
        trace!(
            "Parcel {} -> ad unit {} ({})",
            parcel.host_slot.id(),
            slot.ad_unit_id,
            group
        );
        ad_unit_ids.push(slot.ad_unit_id.as_str());
        size_groups.push(group);
    }

    let mut data: BTreeMap<String, QueryValue> = BTreeMap::new();
    data.insert(
        PARAM_AD_UNIT_IDS.to_string(),
        ad_unit_ids.join(SLOT_SEPARATOR).into(),
    );
    data.insert(
        PARAM_AD_UNIT_SIZES.to_string(),
        size_groups.join(SLOT_SEPARATOR).into(),
    );
    data.insert(
        PARAM_BUSINESS_CODE.to_string(),
        profile.business_code.as_str().into(),
    );
    data.insert(
        PARAM_BID_ENDPOINT_FLAG.to_string(),
        profile.bid_endpoint_flag.into(),
    );
    data.insert(PARAM_GDPR.to_string(), profile.gdpr_consent.as_str().into());

    if let Some(tdid) = select_trade_desk_id(parcels, profile.identity_policy) {
        data.insert(PARAM_TTD_UUID.to_string(), tdid.into());
    }

    let callback_id = shared_correlation_id(parcels)
        .map(str::to_string)
        .unwrap_or_else(generate_callback_id);
    debug!(
        "Built bid request {} for {} parcel(s) of {}",
        callback_id,
        parcels.len(),
        profile.partner_id
    );

    Ok(RequestDescriptor {
        url: profile.endpoint.clone(),
        data,
        callback_id,
    })
}

/// Renders one slot's sizes as `WxH` tokens joined by `|`.
pub fn size_group(sizes: &[Size]) -> String {
    sizes
        .iter()
        .map(Size::to_string)
        .collect::<Vec<_>>()
        .join(SIZE_SEPARATOR)
}

/// Picks the Trade Desk id to surface for the batch, if any parcel carries one.
fn select_trade_desk_id(parcels: &[Parcel], policy: IdentityPolicy) -> Option<&str> {
    let mut resolved = parcels.iter().filter_map(Parcel::trade_desk_id);
    match policy {
        IdentityPolicy::FirstMatch => resolved.next(),
        IdentityPolicy::LastMatch => resolved.last(),
    }
}

/// Correlation id carried by every parcel of the batch, if they all agree.
///
/// A single-parcel batch always agrees, so one-request-per-slot dispatch gets
/// the parcel's own correlation id back as its callback id.
fn shared_correlation_id(parcels: &[Parcel]) -> Option<&str> {
    let (first, rest) = parcels.split_first()?;
    let id = first.correlation_id.as_str();
    if id.trim().is_empty() || rest.iter().any(|p| p.correlation_id != id) {
        return None;
    }
    Some(id)
}

/// Generates a fresh alphanumeric callback id.
pub fn generate_callback_id() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(CALLBACK_ID_LENGTH)
        .map(char::from)
        .collect()
}
