//! Busca Core — field table, escaping, match-mode toggles and errors.
//!
//! This crate provides the foundational types used across all Busca crates.
//! It has no internal Busca dependencies (dependency level 0).
//!
//! # Modules
//!
//! - [`error`]: Error taxonomy and Result alias
//! - [`fields`]: Field specs and the default field tables
//! - [`config`]: Injectable filter dialog configuration
//! - [`escape`]: Per-field escaping of literal values
//! - [`toggle`]: Contains / Excludes / Exact match modes
//! - [`dates`]: Backend timestamp helpers

#![doc = include_str!("../README.md")]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod dates;
pub mod error;
pub mod escape;
pub mod fields;
mod proptests;
pub mod toggle;

// Re-export key types at crate root for convenience
pub use config::FilterConfig;
pub use error::{Error, Result, ValidationError, ValidationReason};
pub use escape::{Escaper, escape, unescape};
pub use fields::{FieldKind, FieldSpec};
pub use toggle::{MatchMode, ModePresentation, ToggleBoard};
