//! Query construction for the Busca advanced filters dialog.
//!
//! This crate turns a snapshot of the filters form into one string in the
//! backend query language. It never executes the query.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                      busca-query                            │
//! ├─────────────────────────────────────────────────────────────┤
//! │  SearchSession (boxes, form, toggles; apply / clear)        │
//! │  └── QueryComposer (free text + fragment)                   │
//! │      └── FilterCollector (fixed clause order)               │
//! │          ├── DateRangeBuilder                               │
//! │          ├── build_numeric_range                            │
//! │          └── Escaper + MatchMode (busca-core)               │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Example
//!
//! ```rust
//! use busca_core::MatchMode;
//! use busca_query::{FilterCollector, FilterState, QueryComposer};
//! use chrono::NaiveDate;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
//! let state = FilterState::new()
//!     .with_dates("dt_protocolo_tdt", "2024-01-01", "")
//!     .with_text("situacao_s", "ATIVO", MatchMode::Contains);
//!
//! let filters = FilterCollector::default().collect_string(&state, today).unwrap();
//! let composed = QueryComposer::default().apply("irpf", "", &filters).unwrap();
//! assert_eq!(
//!     composed.query,
//!     "irpf dt_protocolo_tdt:[2024-01-01T00:00:00Z TO 2024-06-15T23:59:59Z] situacao_s:*ATIVO*"
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod clause;
pub mod collector;
pub mod composer;
mod proptests;
pub mod range;
pub mod session;
pub mod state;

pub use clause::{Clause, QueryFragment};
pub use collector::FilterCollector;
pub use composer::{ComposedQuery, QueryComposer, SearchBox};
pub use range::{DateRangeBuilder, build_numeric_range};
pub use session::{ApplyOutcome, SearchSession, should_auto_open};
pub use state::{FilterState, RangeInput};
