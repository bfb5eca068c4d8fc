// file: src/api/mod.rs
// description: lookup API access module exports
// reference: HTTP client integration

pub mod client;
pub mod prober;

pub use client::LookupClient;
pub use prober::EndpointProber;
