//! Solr Terms API request and response handling.

use busca_core::FilterConfig;
use reqwest::Url;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Error, Result};

/// Field id of the general search box.
pub const GENERAL_SEARCH_FIELD: &str = "q";

/// Index field backing the general search box.
pub const GENERAL_SEARCH_INDEX_FIELD: &str = "conteudo_txt";

/// Autocomplete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestConfig {
    /// Base URL of the Solr core.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Number of domain values fetched per field.
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,

    /// Number of suggestions shown at once.
    #[serde(default = "default_display_limit")]
    pub display_limit: usize,
}

fn default_base_url() -> String {
    "/solr/eprocesso".to_string()
}

fn default_fetch_limit() -> usize {
    100
}

fn default_display_limit() -> usize {
    20
}

impl Default for SuggestConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fetch_limit: default_fetch_limit(),
            display_limit: default_display_limit(),
        }
    }
}

/// The index field queried for an input field.
pub fn index_field(field: &str) -> &str {
    if field == GENERAL_SEARCH_FIELD {
        GENERAL_SEARCH_INDEX_FIELD
    } else {
        field
    }
}

/// Checks that `field` offers autocomplete under `filters`.
///
/// The general search box always does; any other field must be a declared
/// text field.
pub fn ensure_suggestible(filters: &FilterConfig, field: &str) -> Result<()> {
    if field == GENERAL_SEARCH_FIELD || filters.text_fields.iter().any(|f| f.id == field) {
        Ok(())
    } else {
        Err(busca_core::Error::unknown_field(field).into())
    }
}

/// URL listing the most frequent terms of `field`.
///
/// Query parameters are percent-encoded. Fails for a relative base URL.
pub fn terms_url(config: &SuggestConfig, field: &str) -> Result<Url> {
    let endpoint = format!("{}/terms", config.base_url.trim_end_matches('/'));
    let limit = config.fetch_limit.to_string();
    Url::parse_with_params(
        &endpoint,
        [
            ("terms.fl", index_field(field)),
            ("terms.limit", limit.as_str()),
            ("terms.sort", "count"),
            ("omitHeader", "true"),
            ("wt", "json"),
        ],
    )
    .map_err(|e| Error::invalid_url(format!("{endpoint}: {e}")))
}

/// Extracts the terms of `field` from a Terms API response.
///
/// The response lists `[term, count, term, count, ...]` per field. A
/// response without an entry for the field yields no terms.
pub fn parse_terms_response(body: &Value, field: &str) -> Result<Vec<String>> {
    let Some(entries) = body.get("terms").and_then(|t| t.get(index_field(field))) else {
        return Ok(Vec::new());
    };
    let entries = entries
        .as_array()
        .ok_or_else(|| Error::unexpected(format!("terms for '{field}' is not an array")))?;

    entries
        .iter()
        .step_by(2)
        .map(|term| {
            term.as_str()
                .map(str::to_string)
                .ok_or_else(|| Error::unexpected(format!("non-string term for '{field}'")))
        })
        .collect()
}
