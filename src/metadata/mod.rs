// file: src/metadata/mod.rs
// description: metadata extraction module exports
// reference: entity data document handling

pub mod extractor;

pub use extractor::{resource_label, MetadataExtractor};
