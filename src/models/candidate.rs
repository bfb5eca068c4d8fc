// file: src/models/candidate.rs
// description: candidate entity extracted from a lookup search response
// reference: DBpedia lookup result schema

use serde::{Deserialize, Serialize};

/// A book entity found in the search response: its human-readable title and
/// its canonical resource identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    pub label: String,
    pub uri: String,
}

impl Candidate {
    pub fn new(label: impl Into<String>, uri: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            uri: uri.into(),
        }
    }

    /// Address of the entity's machine-readable metadata document: the
    /// `/resource/` path segment becomes `/data/` and a `.json` suffix is
    /// appended.
    pub fn metadata_address(&self) -> String {
        format!("{}.json", self.uri.replacen("/resource/", "/data/", 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_metadata_address_transform() {
        let candidate = Candidate::new("Dune (novel)", "http://dbpedia.org/resource/Dune_(novel)");
        assert_eq!(
            candidate.metadata_address(),
            "http://dbpedia.org/data/Dune_(novel).json"
        );
    }

    #[test]
    fn test_metadata_address_only_replaces_path_segment() {
        let candidate = Candidate::new(
            "Resource",
            "http://dbpedia.org/resource/The_resource_book",
        );
        assert_eq!(
            candidate.metadata_address(),
            "http://dbpedia.org/data/The_resource_book.json"
        );
    }
}
