//! Collects the filled-in filters of a form snapshot into one fragment.
//!
//! Emission order is fixed for reproducible output: date ranges in
//! configured order, then the numeric range, then text fields in configured
//! order. The first failing field aborts the whole collection.

use busca_core::{Error, Escaper, FieldSpec, FilterConfig, Result};
use chrono::NaiveDate;

use crate::clause::{Clause, QueryFragment};
use crate::range::{DateRangeBuilder, build_numeric_range};
use crate::state::FilterState;

/// Builds the filter fragment for a configured field table.
#[derive(Debug, Clone)]
pub struct FilterCollector {
    config: FilterConfig,
    escaper: Escaper,
}

impl Default for FilterCollector {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl FilterCollector {
    /// Creates a collector for `config`.
    pub fn new(config: FilterConfig) -> Self {
        let escaper = Escaper::from_config(&config);
        Self { config, escaper }
    }

    /// The field table in use.
    pub fn config(&self) -> &FilterConfig {
        &self.config
    }

    /// Collects every filled-in filter of `state`.
    ///
    /// # Errors
    ///
    /// - [`Error::Validation`] for the first field that fails validation
    /// - [`Error::UnknownField`] when the snapshot carries a non-blank value
    ///   for a field the table does not declare
    pub fn collect(&self, state: &FilterState, today: NaiveDate) -> Result<QueryFragment> {
        self.check_declared(state)?;

        let mut fragment = QueryFragment::new();

        let dates = DateRangeBuilder::new(today);
        for field in &self.config.date_fields {
            let input = state.date_input(&field.id);
            if let Some(clause) = dates.build(field, &input.from, &input.to)? {
                fragment.push(clause);
            }
        }

        if let Some(field) = self.config.numeric() {
            if let Some(clause) = build_numeric_range(field, &state.numeric.from, &state.numeric.to)? {
                fragment.push(clause);
            }
        }

        for field in &self.config.text_fields {
            if let Some(clause) = self.text_clause(field, state) {
                fragment.push(clause);
            }
        }

        log::debug!("Collected {} filter clause(s)", fragment.len());
        Ok(fragment)
    }

    /// Collects the fragment as a query string, empty when nothing was set.
    pub fn collect_string(&self, state: &FilterState, today: NaiveDate) -> Result<String> {
        Ok(self.collect(state, today)?.to_string())
    }

    fn text_clause(&self, field: &FieldSpec, state: &FilterState) -> Option<Clause> {
        let value = state.text_value(&field.id).trim();
        if value.is_empty() {
            return None;
        }
        let escaped = self.escaper.escape(value, &field.id);
        Some(Clause::text(&field.id, escaped, state.modes.mode(&field.id)))
    }

    fn check_declared(&self, state: &FilterState) -> Result<()> {
        for (id, value) in &state.text {
            if !value.trim().is_empty() && !self.config.text_fields.iter().any(|f| &f.id == id) {
                return Err(Error::unknown_field(id));
            }
        }
        for (id, input) in &state.dates {
            if !input.is_blank() && !self.config.date_fields.iter().any(|f| &f.id == id) {
                return Err(Error::unknown_field(id));
            }
        }
        if self.config.numeric().is_none() && !state.numeric.is_blank() {
            return Err(Error::unknown_field(busca_core::fields::VALUE_FIELD_ID));
        }
        Ok(())
    }
}
