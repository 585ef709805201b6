//! Provider-facing descriptors.
//!
//! `descriptor` exposes validated metadata ([`ProviderDescriptor`]) covering the identity
//! endpoint and the flight-offers endpoint, both required to be HTTPS unless they point at a
//! loopback host.

pub mod descriptor;

pub use descriptor::*;
