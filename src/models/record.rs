// file: src/models/record.rs
// description: fixed-shape metadata record for a single book entity
// reference: DBpedia entity data document

use serde::{Deserialize, Serialize};

/// Metadata extracted from an entity data document. Every field is optional;
/// a predicate absent from the upstream response simply stays `None` and is
/// rendered as "not found".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub author: Option<String>,
    pub author_resource: Option<String>,
    pub publisher: Option<String>,
    pub publisher_resource: Option<String>,
    pub publication_date: Option<String>,
    pub pages: Option<String>,
    pub genre: Option<String>,
    pub abstract_text: Option<String>,
}
