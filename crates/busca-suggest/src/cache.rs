//! Per-session cache of field domain values.
//!
//! Domain values are loaded once per field and reused for every keystroke;
//! filtering happens client-side. The cache is an ordinary owned value so
//! its lifetime is the page session that created it.

use std::collections::{HashMap, HashSet};

use crate::source::DomainSource;

/// Cached domain values and initialized-field tracking.
#[derive(Debug, Clone, Default)]
pub struct DomainCache {
    values: HashMap<String, Vec<String>>,
    initialized: HashSet<String>,
}

impl DomainCache {
    /// Creates an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached values of `field`.
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.values.get(field).map(Vec::as_slice)
    }

    /// Stores the values of `field`.
    pub fn insert<S: Into<String>>(&mut self, field: S, values: Vec<String>) {
        self.values.insert(field.into(), values);
    }

    /// Whether autocomplete was already set up for `field`.
    pub fn is_initialized(&self, field: &str) -> bool {
        self.initialized.contains(field)
    }

    /// Records that autocomplete was set up for `field`.
    ///
    /// Returns `false` if it already was.
    pub fn mark_initialized<S: Into<String>>(&mut self, field: S) -> bool {
        self.initialized.insert(field.into())
    }

    /// Forgets one field.
    pub fn clear(&mut self, field: &str) {
        self.values.remove(field);
        self.initialized.remove(field);
    }

    /// Forgets everything.
    pub fn clear_all(&mut self) {
        self.values.clear();
        self.initialized.clear();
    }

    /// Returns the values of `field`, fetching them from `source` on first use.
    ///
    /// A failed fetch is logged and yields no values; nothing is cached, so
    /// the next call retries.
    pub async fn load<S>(&mut self, source: &S, field: &str) -> Vec<String>
    where
        S: DomainSource + ?Sized,
    {
        self.mark_initialized(field);
        if let Some(values) = self.values.get(field) {
            return values.clone();
        }

        match source.fetch(field).await {
            Ok(values) => {
                self.values.insert(field.to_string(), values.clone());
                values
            }
            Err(e) => {
                log::error!("Failed to load domain of {field} from {}: {e}", source.name());
                Vec::new()
            }
        }
    }
}

/// Filters domain values for the text typed so far.
///
/// A blank term lists the first `limit` values; otherwise values containing
/// the term, case-insensitively, up to `limit`.
pub fn suggest<'a>(values: &'a [String], term: &str, limit: usize) -> Vec<&'a str> {
    let term = term.trim().to_lowercase();
    values
        .iter()
        .filter(|v| term.is_empty() || v.to_lowercase().contains(&term))
        .take(limit)
        .map(String::as_str)
        .collect()
}
