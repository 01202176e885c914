//! Bid request generation.
//!
//! This module provides:
//! - `RequestDescriptor`, the `{url, data, callbackId}` handed to the transport
//! - `build`, which serializes a parcel batch into query parameters

mod builder;
mod descriptor;

pub use builder::{build, generate_callback_id, size_group};
pub use descriptor::{QueryValue, RequestDescriptor};
