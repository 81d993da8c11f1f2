//! Busca advanced search query builder — umbrella crate.
//!
//! This crate re-exports all Busca components for convenience.
//! Use feature flags to enable specific functionality.

#![doc = include_str!("../README.md")]

pub use busca_core as core;
pub use busca_query as query;

#[cfg(feature = "suggest")]
pub use busca_suggest as suggest;
