// file: src/pipeline/mod.rs
// description: coordinates the sanitize, probe, search, select, fetch stages
// reference: sequential lookup workflow

use reqwest::Client;
use tracing::{debug, info};

use crate::api::{EndpointProber, LookupClient};
use crate::config::Config;
use crate::error::Result;
use crate::metadata::MetadataExtractor;
use crate::models::MetadataRecord;
use crate::parser::parse_search_results;
use crate::query;
use crate::render;
use crate::select::{self, CandidateSelector};

/// Runs one lookup end to end. Strictly sequential: sanitize, probe, search,
/// filter/disambiguate, fetch metadata, format. Every failure propagates out
/// and ends the run.
pub struct LookupPipeline {
    config: Config,
    client: Client,
}

impl LookupPipeline {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    pub async fn run(&self, raw_title: &str, selector: &dyn CandidateSelector) -> Result<()> {
        let record = self.lookup(raw_title, selector).await?;
        print!("{}", render::format_record(&record));
        Ok(())
    }

    /// The lookup flow up to the extracted record, leaving the metadata
    /// block unprinted so callers can do something else with it.
    pub async fn lookup(
        &self,
        raw_title: &str,
        selector: &dyn CandidateSelector,
    ) -> Result<MetadataRecord> {
        let encoded = query::sanitize(raw_title)?;
        debug!("Sanitized query: {}", encoded);

        let base_url = self.probe().await?;
        let api = LookupClient::new(self.client.clone(), base_url);

        let xml = api.search(&encoded).await?;
        let candidates = parse_search_results(&xml, &self.config.ontology.book_class)?;
        info!("Search returned {} book candidate(s)", candidates.len());

        let chosen = select::choose(&candidates, selector)?;
        println!("Results for '{}':", chosen.label);

        let address = chosen.metadata_address();
        let document = api.fetch_metadata(&address).await?;

        let extractor = MetadataExtractor::new(&self.config.ontology);
        Ok(extractor.extract(&document))
    }

    /// Find the first functioning lookup endpoint.
    pub async fn probe(&self) -> Result<String> {
        let prober = EndpointProber::new(&self.client, &self.config.api);
        prober.probe().await
    }
}
