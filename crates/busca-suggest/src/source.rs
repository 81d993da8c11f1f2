//! Sources of domain values.

use async_trait::async_trait;

use crate::error::Result;
use crate::terms::{SuggestConfig, parse_terms_response, terms_url};

/// Something that can list the distinct values of a field.
#[async_trait]
pub trait DomainSource: Send + Sync {
    /// Fetches the domain values of `field`, most frequent first.
    async fn fetch(&self, field: &str) -> Result<Vec<String>>;

    /// Source name for diagnostics.
    fn name(&self) -> &str;
}

/// Domain values from the Solr Terms API.
#[derive(Debug, Clone)]
pub struct SolrTermsSource {
    client: reqwest::Client,
    config: SuggestConfig,
}

impl SolrTermsSource {
    /// Creates a source for `config`.
    ///
    /// `config.base_url` must be absolute.
    pub fn new(config: SuggestConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    /// Creates a source sharing an existing HTTP client.
    pub fn with_client(client: reqwest::Client, config: SuggestConfig) -> Self {
        Self { client, config }
    }
}

#[async_trait]
impl DomainSource for SolrTermsSource {
    async fn fetch(&self, field: &str) -> Result<Vec<String>> {
        let url = terms_url(&self.config, field)?;
        log::debug!("Loading domain of {field} from {url}");

        let body: serde_json::Value = self
            .client
            .get(url)
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        let values = parse_terms_response(&body, field)?;
        log::debug!("Loaded {} values for {field}", values.len());
        Ok(values)
    }

    fn name(&self) -> &str {
        "solr-terms"
    }
}
