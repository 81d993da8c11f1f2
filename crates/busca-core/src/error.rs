//! Error types for busca-core.
//!
//! The taxonomy mirrors how failures reach the person filling in the
//! filters dialog: field-scoped validation failures, a composition-scoped
//! "nothing to search for" failure, and everything else, which is a bug or
//! a broken configuration and is never shown verbatim.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Result type alias for busca operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Generic message shown when an apply attempt fails for a reason the
/// user cannot act on.
pub const GENERIC_FAILURE_MESSAGE: &str = "Erro ao aplicar filtros";

/// Why a single field failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ValidationReason {
    /// The lower bound sorts after the upper bound.
    InvertedRange,
    /// A date bound is not a `YYYY-MM-DD` calendar date.
    InvalidDate {
        /// The offending raw input.
        value: String,
    },
    /// A numeric bound does not parse as a finite number.
    InvalidNumber {
        /// The offending raw input.
        value: String,
    },
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvertedRange => f.write_str("inverted range"),
            Self::InvalidDate { value } => write!(f, "invalid date '{value}'"),
            Self::InvalidNumber { value } => write!(f, "invalid number '{value}'"),
        }
    }
}

/// A recoverable, field-scoped validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{label}: {reason}")]
pub struct ValidationError {
    /// Backend field id (e.g. `dt_protocolo_tdt`).
    pub field: String,
    /// Human-readable field label.
    pub label: String,
    /// What went wrong.
    pub reason: ValidationReason,
}

impl ValidationError {
    /// Creates a new validation error for a field.
    pub fn new<F, L>(field: F, label: L, reason: ValidationReason) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        Self {
            field: field.into(),
            label: label.into(),
            reason,
        }
    }

    /// Creates an inverted-range error.
    pub fn inverted_range<F, L>(field: F, label: L) -> Self
    where
        F: Into<String>,
        L: Into<String>,
    {
        Self::new(field, label, ValidationReason::InvertedRange)
    }
}

/// Errors that can occur while building or composing a query.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// A field failed validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Neither a free-text term nor any filter was supplied.
    #[error("no criteria provided")]
    NoCriteria,

    /// A field id was referenced that the field table does not declare.
    #[error("Field not configured: {id}")]
    UnknownField {
        /// The unknown field id.
        id: String,
    },

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic.
        message: String,
    },

    /// I/O error while reading or writing configuration.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates a new unknown-field error.
    pub fn unknown_field<S: Into<String>>(id: S) -> Self {
        Error::UnknownField { id: id.into() }
    }

    /// Returns whether the message of this error is meant for the user.
    ///
    /// Validation and empty-criteria failures are reported verbatim;
    /// anything else is a programming or configuration mistake.
    pub fn is_user_facing(&self) -> bool {
        match self {
            Error::Validation(_) => true,
            Error::NoCriteria => true,
            Error::UnknownField { .. } => false,
            Error::Config { .. } => false,
            Error::Io(_) => false,
        }
    }

    /// The single message to display for this failure.
    pub fn user_message(&self) -> String {
        if self.is_user_facing() {
            self.to_string()
        } else {
            GENERIC_FAILURE_MESSAGE.to_string()
        }
    }
}
