// file: src/models/mod.rs
// description: data model module exports
// reference: domain entity definitions

pub mod candidate;
pub mod record;

pub use candidate::Candidate;
pub use record::MetadataRecord;
