//! Date and numeric range clause builders.
//!
//! Date ranges follow the backend timestamp convention: the lower bound
//! starts at midnight, the upper bound ends at `23:59:59Z`, and a range with
//! only a lower bound runs until the end of `today`. A range without a lower
//! bound is omitted entirely.
//!
//! Numeric ranges emit `*` for a blank side and are omitted when both sides
//! are blank.

use busca_core::dates::{format_date, parse_date, to_backend_timestamp};
use busca_core::{FieldSpec, ValidationError, ValidationReason};
use chrono::NaiveDate;

use crate::clause::{Clause, OPEN_BOUND};

/// Builds date range clauses relative to a fixed `today`.
#[derive(Debug, Clone, Copy)]
pub struct DateRangeBuilder {
    today: NaiveDate,
}

impl DateRangeBuilder {
    /// Creates a builder that closes open ranges at the end of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self { today }
    }

    /// Builds the clause for one date field.
    ///
    /// Returns `Ok(None)` when the lower bound is blank.
    ///
    /// # Errors
    ///
    /// Fails when a bound is not a `YYYY-MM-DD` date or when the lower bound
    /// sorts after the upper bound.
    pub fn build(
        &self,
        field: &FieldSpec,
        from_raw: &str,
        to_raw: &str,
    ) -> Result<Option<Clause>, ValidationError> {
        let from_raw = from_raw.trim();
        let to_raw = to_raw.trim();

        if from_raw.is_empty() {
            return Ok(None);
        }
        check_date(field, from_raw)?;

        let from = to_backend_timestamp(from_raw, false);
        let to = if to_raw.is_empty() {
            to_backend_timestamp(&format_date(self.today), true)
        } else {
            check_date(field, to_raw)?;
            to_backend_timestamp(to_raw, true)
        };

        if from > to {
            log::warn!("Inverted date range on {}: {from} > {to}", field.id);
            return Err(ValidationError::inverted_range(&field.id, &field.label));
        }

        Ok(Some(Clause::range(&field.id, from, to)))
    }

    /// Builds the clause piece for one date field, trailing separator
    /// included, or an empty string when the field is omitted.
    pub fn build_range(
        &self,
        field: &FieldSpec,
        from_raw: &str,
        to_raw: &str,
    ) -> Result<String, ValidationError> {
        Ok(self
            .build(field, from_raw, to_raw)?
            .map(|clause| clause.to_piece())
            .unwrap_or_default())
    }
}

fn check_date(field: &FieldSpec, raw: &str) -> Result<(), ValidationError> {
    match parse_date(raw) {
        Some(_) => Ok(()),
        None => Err(ValidationError::new(
            &field.id,
            &field.label,
            ValidationReason::InvalidDate {
                value: raw.to_string(),
            },
        )),
    }
}

/// Builds the numeric range clause for `field`.
///
/// Returns `Ok(None)` when both bounds are blank.
///
/// # Errors
///
/// Fails when a bound is not a finite number or when both bounds are set
/// and the lower one is greater.
pub fn build_numeric_range(
    field: &FieldSpec,
    from_raw: &str,
    to_raw: &str,
) -> Result<Option<Clause>, ValidationError> {
    let from = parse_bound(field, from_raw)?;
    let to = parse_bound(field, to_raw)?;

    match (&from, &to) {
        (None, None) => return Ok(None),
        (Some((_, lo)), Some((_, hi))) if lo > hi => {
            log::warn!("Inverted numeric range on {}: {lo} > {hi}", field.id);
            return Err(ValidationError::inverted_range(&field.id, &field.label));
        }
        _ => {}
    }

    let bound = |b: Option<(&str, f64)>| b.map(|(raw, _)| raw).unwrap_or(OPEN_BOUND).to_string();
    Ok(Some(Clause::range(&field.id, bound(from), bound(to))))
}

fn parse_bound<'a>(
    field: &FieldSpec,
    raw: &'a str,
) -> Result<Option<(&'a str, f64)>, ValidationError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() => Ok(Some((raw, n))),
        _ => Err(ValidationError::new(
            &field.id,
            &field.label,
            ValidationReason::InvalidNumber {
                value: raw.to_string(),
            },
        )),
    }
}
