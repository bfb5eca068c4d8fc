// file: src/metadata/extractor.rs
// description: pulls the known predicates out of an entity data document
// reference: DBpedia JSON data document layout

use serde_json::Value;

use crate::config::OntologyConfig;
use crate::models::MetadataRecord;

/// Extracts the configured predicates from a fetched data document.
///
/// The document is a map of subject URIs to predicate maps; every subject is
/// scanned, not just the chosen entity. When a predicate carries several
/// values the last one wins. Absent predicates leave their field `None`.
pub struct MetadataExtractor<'a> {
    ontology: &'a OntologyConfig,
}

impl<'a> MetadataExtractor<'a> {
    pub fn new(ontology: &'a OntologyConfig) -> Self {
        Self { ontology }
    }

    pub fn extract(&self, document: &Value) -> MetadataRecord {
        let mut record = MetadataRecord::default();

        let Some(subjects) = document.as_object() else {
            return record;
        };

        for predicates in subjects.values() {
            let Some(predicates) = predicates.as_object() else {
                continue;
            };

            for (predicate, values) in predicates {
                let Some(values) = values.as_array() else {
                    continue;
                };

                if *predicate == self.ontology.author {
                    for value in values {
                        if let Some(uri) = literal_value(value) {
                            record.author = Some(resource_label(&uri));
                            record.author_resource = Some(uri);
                        }
                    }
                } else if *predicate == self.ontology.publisher {
                    for value in values {
                        if let Some(uri) = literal_value(value) {
                            record.publisher = Some(resource_label(&uri));
                            record.publisher_resource = Some(uri);
                        }
                    }
                } else if *predicate == self.ontology.published {
                    for value in values {
                        if let Some(text) = literal_value(value) {
                            record.publication_date = Some(text);
                        }
                    }
                } else if *predicate == self.ontology.pages {
                    for value in values {
                        if let Some(text) = literal_value(value) {
                            record.pages = Some(text);
                        }
                    }
                } else if *predicate == self.ontology.genre {
                    for value in values {
                        if let Some(uri) = literal_value(value) {
                            record.genre = Some(resource_label(&uri));
                        }
                    }
                } else if *predicate == self.ontology.abstract_predicate {
                    for value in values {
                        let lang = value.get("lang").and_then(Value::as_str);
                        if lang == Some(self.ontology.language.as_str()) {
                            record.abstract_text = literal_value(value);
                        }
                    }
                }
            }
        }

        record
    }
}

// Page counts come back as bare JSON numbers, so stringify those too.
fn literal_value(value: &Value) -> Option<String> {
    match value.get("value")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Human-readable label for a resource URI: the final path segment with
/// underscores turned into spaces.
pub fn resource_label(uri: &str) -> String {
    uri.rsplit('/').next().unwrap_or(uri).replace('_', " ")
}
