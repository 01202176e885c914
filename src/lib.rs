//! openx_htb library: bid request construction for OpenX header bidding
//!
//! Given the parcels of an auction round (one per host slot / exchange slot
//! pairing), this library produces the request descriptors the wrapper sends to
//! the OpenX bid endpoint. It does no network I/O.
//!
//! # Example
//!
//! ```no_run
//! use openx_htb::{generate_return_parcels, load_partner_config, PartnerModule};
//! use std::path::Path;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = load_partner_config(Path::new("partner.json"))?;
//! let module = PartnerModule::new(config)?;
//! let parcels = generate_return_parcels(module.profile(), module.config(), None)?;
//!
//! for request in module.generate_requests(&parcels)? {
//!     println!("{} {:?}", request.url, request.data);
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
mod dispatch;
pub mod error_handling;
pub mod initialization;
pub mod models;
pub mod request;
mod session;

// Re-export public API
pub use config::{
    load_identity_data, load_partner_config, Architecture, IdentityPolicy, PartnerConfig,
    Profile,
};
pub use dispatch::{partition, PartnerModule};
pub use error_handling::ConfigurationError;
pub use models::{ExchangeSlot, HostSlot, IdentityData, IdentityRecord, Parcel, Size};
pub use request::{build, QueryValue, RequestDescriptor};
pub use session::generate_return_parcels;
