//! Auction round expansion.
//!
//! Turns a partner configuration into the parcels of a round in which every
//! configured host slot is requested, one parcel per (host slot, exchange slot).

use std::sync::Arc;

use log::debug;

use crate::config::{PartnerConfig, Profile};
use crate::error_handling::ConfigurationError;
use crate::models::{HostSlot, IdentityData, Parcel};
use crate::request::generate_callback_id;

/// Expands the configured mapping into parcels.
///
/// Parcels follow mapping order: host slots in the order the configuration
/// lists them, then each host slot's exchange slots in the order listed. Every parcel shares the same
/// identity data, when given.
///
/// # Errors
///
/// Returns `ConfigurationError::UnknownExchangeSlot` if the mapping names an
/// exchange slot missing from `xSlots`.
pub fn generate_return_parcels(
    profile: &Profile,
    config: &PartnerConfig,
    identity: Option<Arc<IdentityData>>,
) -> Result<Vec<Parcel>, ConfigurationError> {
    let mut parcels = Vec::new();

    for (host_slot_name, x_slot_names) in &config.mapping {
        let host_slot = HostSlot::new(host_slot_name.as_str());
        for x_slot_name in x_slot_names {
            let x_slot = config.x_slots.get(x_slot_name).ok_or_else(|| {
                ConfigurationError::UnknownExchangeSlot {
                    host_slot: host_slot_name.clone(),
                    x_slot: x_slot_name.clone(),
                }
            })?;

            let mut parcel = Parcel::new(
                profile.partner_id.as_str(),
                host_slot.clone(),
                x_slot.clone(),
                format!("_{}", generate_callback_id()),
            );
            if let Some(identity) = &identity {
                parcel = parcel.with_identity(Arc::clone(identity));
            }
            parcels.push(parcel);
        }
    }

    debug!(
        "Expanded {} host slots into {} parcels",
        config.mapping.len(),
        parcels.len()
    );
    Ok(parcels)
}
