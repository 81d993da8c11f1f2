//! # busca-suggest
//!
//! Field autocomplete for the Busca search interface.
//!
//! Each autocomplete field shows the distinct values ("domain") the index
//! holds for it. Values are fetched once per field from the Solr Terms API,
//! kept in a [`DomainCache`] owned by the page session, and filtered
//! client-side as the user types.
//!
//! ```rust
//! use busca_suggest::suggest;
//!
//! let domain = vec!["DRF São Paulo".to_string(), "DRJ Recife".to_string()];
//! assert_eq!(suggest(&domain, "recife", 20), ["DRJ Recife"]);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cache;
pub mod error;
pub mod source;
pub mod terms;

pub use cache::{DomainCache, suggest};
pub use error::{Error, Result};
pub use source::{DomainSource, SolrTermsSource};
pub use terms::{SuggestConfig, ensure_suggestible, parse_terms_response, terms_url};
