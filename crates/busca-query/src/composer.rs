//! Merges the free-text term with the filter fragment.

use std::fmt;

use busca_core::{Error, Result};
use serde::{Deserialize, Serialize};

/// One of the two synchronized free-text boxes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchBox {
    /// The page header search box.
    Header,
    /// The search box inside the filters dialog.
    #[default]
    Dialog,
}

impl SearchBox {
    /// The other box.
    pub fn other(self) -> Self {
        match self {
            SearchBox::Header => SearchBox::Dialog,
            SearchBox::Dialog => SearchBox::Header,
        }
    }
}

/// A query ready for submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComposedQuery {
    /// Effective free-text term, possibly empty.
    pub term: String,
    /// Filter fragment, possibly empty.
    pub filters: String,
    /// The full query string.
    pub query: String,
}

impl ComposedQuery {
    /// The full query string.
    pub fn as_str(&self) -> &str {
        &self.query
    }
}

impl fmt::Display for ComposedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.query)
    }
}

/// Composes the submitted query string.
#[derive(Debug, Clone, Copy)]
pub struct QueryComposer {
    sync_search_boxes: bool,
}

impl Default for QueryComposer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl QueryComposer {
    /// Creates a composer; with `sync_search_boxes` the term falls back to
    /// the other box when the triggering one is blank.
    pub fn new(sync_search_boxes: bool) -> Self {
        Self { sync_search_boxes }
    }

    /// Picks the effective free-text term.
    pub fn resolve_term<'a>(&self, triggering: &'a str, other: &'a str) -> &'a str {
        let triggering = triggering.trim();
        if !triggering.is_empty() || !self.sync_search_boxes {
            return triggering;
        }
        other.trim()
    }

    /// Appends `filters` to the effective term.
    ///
    /// # Errors
    ///
    /// Returns [`Error::NoCriteria`] when both the term and the filters are
    /// blank.
    pub fn apply(&self, triggering: &str, other: &str, filters: &str) -> Result<ComposedQuery> {
        let term = self.resolve_term(triggering, other);
        let filters = filters.trim();

        let query = match (term.is_empty(), filters.is_empty()) {
            (true, true) => return Err(Error::NoCriteria),
            (false, true) => term.to_string(),
            (true, false) => filters.to_string(),
            (false, false) => format!("{term} {filters}"),
        };

        Ok(ComposedQuery {
            term: term.to_string(),
            filters: filters.to_string(),
            query,
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_term_and_filters() {
        let composed = QueryComposer::default()
            .apply(" restituição ", "", "situacao_s:*ATIVO*")
            .unwrap();
        assert_eq!(composed.query, "restituição situacao_s:*ATIVO*");
        assert_eq!(composed.term, "restituição");
        assert_eq!(composed.to_string(), composed.as_str());
    }

    #[test]
    fn test_filters_only() {
        let composed = QueryComposer::default()
            .apply("", "", "valor_processo_d:[* TO 1000] ")
            .unwrap();
        assert_eq!(composed.query, "valor_processo_d:[* TO 1000]");
    }

    #[test]
    fn test_term_only() {
        let composed = QueryComposer::default().apply("irpf", "", "").unwrap();
        assert_eq!(composed.query, "irpf");
        assert!(composed.filters.is_empty());
    }

    #[test]
    fn test_no_criteria() {
        let err = QueryComposer::default().apply("  ", "", "").unwrap_err();
        assert!(matches!(err, Error::NoCriteria));
    }

    #[test]
    fn test_falls_back_to_other_box() {
        let composer = QueryComposer::default();
        assert_eq!(composer.resolve_term("", "header term"), "header term");
        assert_eq!(composer.resolve_term("dialog", "header"), "dialog");
    }

    #[test]
    fn test_no_fallback_without_sync() {
        let composer = QueryComposer::new(false);
        assert_eq!(composer.resolve_term("", "header term"), "");
        assert!(matches!(
            composer.apply("", "header term", ""),
            Err(Error::NoCriteria)
        ));
    }

    #[test]
    fn test_search_box_other() {
        assert_eq!(SearchBox::Header.other(), SearchBox::Dialog);
        assert_eq!(SearchBox::Dialog.other(), SearchBox::Header);
    }
}
