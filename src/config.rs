// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{LookupError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub api: ApiConfig,
    pub ontology: OntologyConfig,
}

/// Lookup API endpoints, in probe priority order. The service has moved
/// across hosts and schemes over the years, so older mirrors stay listed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    pub endpoints: Vec<String>,
    pub probe_term: String,
}

/// Ontology constants: the class URI that identifies a book entity and the
/// predicate URIs the metadata extractor looks for.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OntologyConfig {
    pub book_class: String,
    pub author: String,
    pub publisher: String,
    pub published: String,
    pub pages: String,
    pub genre: String,
    #[serde(rename = "abstract")]
    pub abstract_predicate: String,
    /// Locale tag the abstract must carry to be shown
    pub language: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        } else {
            builder = builder.add_source(config::File::from(Path::new("config/default.toml")));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("BOOKPEDIA")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| LookupError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            api: ApiConfig {
                endpoints: vec![
                    "https://lookup.dbpedia.org/api/search/PrefixSearch?QueryString=".to_string(),
                    "http://lookup.dbpedia.org/api/search/PrefixSearch?QueryString=".to_string(),
                    "https://lookup.dbpedia.org/api/prefix?query=".to_string(),
                    "http://lookup.dbpedia.org/api/prefix?query=".to_string(),
                    "http://akswnc7.informatik.uni-leipzig.de/lookup/api/search?query="
                        .to_string(),
                ],
                probe_term: "Antwerp".to_string(),
            },
            ontology: OntologyConfig {
                book_class: "http://dbpedia.org/ontology/Book".to_string(),
                author: "http://dbpedia.org/ontology/author".to_string(),
                publisher: "http://dbpedia.org/ontology/publisher".to_string(),
                published: "http://dbpedia.org/property/published".to_string(),
                pages: "http://dbpedia.org/ontology/numberOfPages".to_string(),
                genre: "http://dbpedia.org/property/genre".to_string(),
                abstract_predicate: "http://dbpedia.org/ontology/abstract".to_string(),
                language: "en".to_string(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.api.endpoints.is_empty() {
            return Err(LookupError::Config(
                "endpoint list must not be empty".to_string(),
            ));
        }

        for endpoint in &self.api.endpoints {
            if !endpoint.starts_with("http://") && !endpoint.starts_with("https://") {
                return Err(LookupError::Config(format!(
                    "endpoint is not an http(s) URL: {}",
                    endpoint
                )));
            }
        }

        if self.api.probe_term.trim().is_empty() {
            return Err(LookupError::Config(
                "probe_term must not be empty".to_string(),
            ));
        }

        if self.ontology.language.trim().is_empty() {
            return Err(LookupError::Config(
                "language tag must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
