// file: src/parser/mod.rs
// description: search response parsing module exports
// reference: XML payload handling

pub mod search_results;

pub use search_results::parse_search_results;
