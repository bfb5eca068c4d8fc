// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod api;
pub mod config;
pub mod error;
pub mod metadata;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod query;
pub mod render;
pub mod select;
pub mod utils;

pub use api::{EndpointProber, LookupClient};
pub use config::{ApiConfig, Config, OntologyConfig};
pub use error::{LookupError, Result};
pub use metadata::MetadataExtractor;
pub use models::{Candidate, MetadataRecord};
pub use parser::parse_search_results;
pub use pipeline::LookupPipeline;
pub use select::{CandidateSelector, ConsoleSelector, FixedSelector};
