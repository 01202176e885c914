//! Partner module: architecture-driven dispatch of parcels to the request builder.
//!
//! An SRA profile sends the whole round in one batch; an MRA profile splits it
//! into singleton batches. The builder itself is unaware of the architecture.

use log::{debug, info};

use crate::config::{Architecture, PartnerConfig, Profile};
use crate::error_handling::ConfigurationError;
use crate::models::Parcel;
use crate::request::{self, RequestDescriptor};

/// A configured partner: its static profile plus the configuration it was built from.
#[derive(Debug, Clone)]
pub struct PartnerModule {
    profile: Profile,
    config: PartnerConfig,
}

impl PartnerModule {
    /// Validates the configuration and derives the partner profile.
    pub fn new(config: PartnerConfig) -> Result<Self, ConfigurationError> {
        config.validate()?;
        let profile = Profile::from_config(&config)?;
        debug!(
            "Configured partner {} ({} architecture, endpoint {})",
            profile.partner_id, profile.architecture, profile.endpoint
        );
        Ok(Self { profile, config })
    }

    pub fn profile(&self) -> &Profile {
        &self.profile
    }

    pub fn config(&self) -> &PartnerConfig {
        &self.config
    }

    /// Builds one request descriptor for the given batch.
    pub fn generate_request_obj(
        &self,
        parcels: &[Parcel],
    ) -> Result<RequestDescriptor, ConfigurationError> {
        request::build(&self.profile, parcels)
    }

    /// Builds every request for an auction round according to the profile's architecture.
    ///
    /// An empty round produces no requests. The first configuration error aborts
    /// the round.
    pub fn generate_requests(
        &self,
        parcels: &[Parcel],
    ) -> Result<Vec<RequestDescriptor>, ConfigurationError> {
        let batches = partition(self.profile.architecture, parcels);
        let requests = batches
            .into_iter()
            .map(|batch| self.generate_request_obj(batch))
            .collect::<Result<Vec<_>, _>>()?;

        info!(
            "Generated {} bid request(s) for {} parcel(s) ({})",
            requests.len(),
            parcels.len(),
            self.profile.architecture
        );
        Ok(requests)
    }
}

/// Splits a round's parcels into builder batches.
///
/// SRA yields a single batch holding every parcel; MRA yields one batch per
/// parcel. Input order is preserved either way.
pub fn partition(architecture: Architecture, parcels: &[Parcel]) -> Vec<&[Parcel]> {
    if parcels.is_empty() {
        return Vec::new();
    }
    match architecture {
        Architecture::Sra => vec![parcels],
        Architecture::Mra => parcels.chunks(1).collect(),
    }
}
