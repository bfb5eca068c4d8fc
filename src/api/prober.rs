// file: src/api/prober.rs
// description: detects a functioning lookup API among known base URLs
// reference: DBpedia lookup service mirrors

use crate::config::ApiConfig;
use crate::error::{LookupError, Result};
use reqwest::Client;
use tracing::{debug, info};

/// Tries each configured base URL in order with a fixed probe term and keeps
/// the first one that answers with a success status. First success wins; no
/// retry, no timeout override.
pub struct EndpointProber<'a> {
    client: &'a Client,
    config: &'a ApiConfig,
}

impl<'a> EndpointProber<'a> {
    pub fn new(client: &'a Client, config: &'a ApiConfig) -> Self {
        Self { client, config }
    }

    pub async fn probe(&self) -> Result<String> {
        for base in &self.config.endpoints {
            let url = format!("{}{}", base, self.config.probe_term);
            debug!("Probing lookup endpoint: {}", base);

            match self.client.get(&url).send().await {
                Ok(response) if response.status().is_success() => {
                    info!("Using lookup endpoint: {}", base);
                    return Ok(base.clone());
                }
                Ok(response) => {
                    debug!("Endpoint {} answered {}", base, response.status());
                }
                Err(e) => {
                    debug!("Endpoint {} unreachable: {}", base, e);
                }
            }
        }

        Err(LookupError::NoEndpoint)
    }
}
