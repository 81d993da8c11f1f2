//! One filters-dialog session: the search boxes, the form and the toggles.
//!
//! `SearchSession` is the boundary a host UI talks to. Every apply attempt
//! composes into a scratch value and only assigns the search boxes once the
//! whole composition succeeded, so a failed attempt leaves them untouched.

use busca_core::{Error, FilterConfig, MatchMode, Result};
use chrono::NaiveDate;

use crate::collector::FilterCollector;
use crate::composer::{ComposedQuery, QueryComposer, SearchBox};
use crate::state::FilterState;

/// Query submitted by an empty header search.
pub const MATCH_ALL: &str = "*:*";

/// Result of an apply attempt, for the host to act on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// The query is ready to submit.
    Submit(ComposedQuery),
    /// Nothing was submitted; show `message` to the user.
    Rejected {
        /// The single message for this attempt.
        message: String,
    },
}

impl ApplyOutcome {
    /// Whether the attempt produced a query.
    pub fn is_submit(&self) -> bool {
        matches!(self, ApplyOutcome::Submit(_))
    }
}

/// State of one dialog session.
#[derive(Debug, Clone)]
pub struct SearchSession {
    collector: FilterCollector,
    composer: QueryComposer,
    header: String,
    dialog: String,
    form: FilterState,
}

impl Default for SearchSession {
    fn default() -> Self {
        Self::new(FilterConfig::default())
    }
}

impl SearchSession {
    /// Creates a session with empty boxes and form.
    pub fn new(config: FilterConfig) -> Self {
        let composer = QueryComposer::new(config.sync_search_boxes);
        Self {
            collector: FilterCollector::new(config),
            composer,
            header: String::new(),
            dialog: String::new(),
            form: FilterState::new(),
        }
    }

    /// Whether the two boxes mirror each other.
    pub fn is_synced(&self) -> bool {
        self.collector.config().sync_search_boxes
    }

    /// Current content of a search box.
    pub fn search_box(&self, which: SearchBox) -> &str {
        match which {
            SearchBox::Header => &self.header,
            SearchBox::Dialog => &self.dialog,
        }
    }

    /// Replaces the content of a box, mirroring it when synced.
    pub fn type_in(&mut self, which: SearchBox, text: &str) {
        self.set_box(which, text.to_string());
        if self.is_synced() {
            self.set_box(which.other(), text.to_string());
        }
    }

    /// The filter form.
    pub fn form(&self) -> &FilterState {
        &self.form
    }

    /// Mutable access to the filter form.
    pub fn form_mut(&mut self) -> &mut FilterState {
        &mut self.form
    }

    /// Advances the toggle of a text field.
    pub fn cycle_toggle(&mut self, field_id: &str) -> MatchMode {
        self.form.modes.cycle(field_id)
    }

    /// Composes the query for an apply triggered from `trigger` without
    /// touching the session.
    pub fn compose(&self, trigger: SearchBox, today: NaiveDate) -> Result<ComposedQuery> {
        let filters = self.collector.collect_string(&self.form, today)?;
        self.composer.apply(
            self.search_box(trigger),
            self.search_box(trigger.other()),
            &filters,
        )
    }

    /// Applies the filters.
    ///
    /// On success the composed query replaces the header box content (and
    /// the dialog box, when synced). On failure neither box changes.
    pub fn apply(&mut self, trigger: SearchBox, today: NaiveDate) -> ApplyOutcome {
        match self.compose(trigger, today) {
            Ok(composed) => {
                self.header = composed.query.clone();
                if self.is_synced() {
                    self.dialog = composed.query.clone();
                }
                log::info!("Filters applied: {}", composed.query);
                ApplyOutcome::Submit(composed)
            }
            Err(err) => ApplyOutcome::Rejected {
                message: rejection_message(&err),
            },
        }
    }

    /// Clears every filter input and resets the toggles.
    ///
    /// The search boxes are kept so the user can refine the same term.
    pub fn clear_all(&mut self) {
        self.form.clear();
        log::debug!("All filters cleared");
    }

    /// Clears the filters and both search boxes.
    pub fn clear_all_including_search(&mut self) {
        self.clear_all();
        self.clear_search();
    }

    /// Clears both search boxes.
    pub fn clear_search(&mut self) {
        self.header.clear();
        self.dialog.clear();
    }

    /// Query for a plain header submit; an empty box searches everything.
    pub fn submit_header(&mut self) -> String {
        if self.header.trim().is_empty() {
            self.header = MATCH_ALL.to_string();
        }
        self.header.clone()
    }

    fn set_box(&mut self, which: SearchBox, text: String) {
        match which {
            SearchBox::Header => self.header = text,
            SearchBox::Dialog => self.dialog = text,
        }
    }
}

fn rejection_message(err: &Error) -> String {
    if err.is_user_facing() {
        log::warn!("Filters rejected: {err}");
    } else {
        log::error!("Failed to apply filters: {err}");
    }
    err.user_message()
}

/// Whether the dialog should open on page load.
///
/// It opens when the request carries neither a `q` nor an `fq` value.
pub fn should_auto_open(q: Option<&str>, fq: Option<&str>) -> bool {
    let present = |v: Option<&str>| v.is_some_and(|s| !s.trim().is_empty());
    !present(q) && !present(fq)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use busca_core::error::GENERIC_FAILURE_MESSAGE;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn test_type_in_mirrors_when_synced() {
        let mut session = SearchSession::default();
        session.type_in(SearchBox::Header, "irpf");
        assert_eq!(session.search_box(SearchBox::Dialog), "irpf");
    }

    #[test]
    fn test_type_in_without_sync() {
        let mut session = SearchSession::new(FilterConfig {
            sync_search_boxes: false,
            ..Default::default()
        });
        session.type_in(SearchBox::Header, "irpf");
        assert_eq!(session.search_box(SearchBox::Dialog), "");
    }

    #[test]
    fn test_apply_assigns_boxes() {
        let mut session = SearchSession::default();
        session.type_in(SearchBox::Dialog, "restituição");
        session.form_mut().numeric.to = "1000".to_string();

        let outcome = session.apply(SearchBox::Dialog, today());
        assert!(outcome.is_submit());
        let expected = "restituição valor_processo_d:[* TO 1000]";
        assert_eq!(session.search_box(SearchBox::Header), expected);
        assert_eq!(session.search_box(SearchBox::Dialog), expected);
    }

    #[test]
    fn test_apply_without_criteria_leaves_boxes() {
        let mut session = SearchSession::default();
        let outcome = session.apply(SearchBox::Dialog, today());
        assert_eq!(
            outcome,
            ApplyOutcome::Rejected {
                message: "no criteria provided".to_string()
            }
        );
        assert_eq!(session.search_box(SearchBox::Header), "");
    }

    #[test]
    fn test_validation_failure_leaves_boxes() {
        let mut session = SearchSession::default();
        session.type_in(SearchBox::Header, "irpf");
        *session.form_mut() = FilterState::new().with_dates(
            "dt_juntada_tdt",
            "2024-06-01",
            "2024-01-01",
        );

        let outcome = session.apply(SearchBox::Dialog, today());
        assert_eq!(
            outcome,
            ApplyOutcome::Rejected {
                message: "Data da Juntada: inverted range".to_string()
            }
        );
        assert_eq!(session.search_box(SearchBox::Header), "irpf");
        assert_eq!(session.search_box(SearchBox::Dialog), "irpf");
    }

    #[test]
    fn test_internal_failure_is_generic() {
        let mut session = SearchSession::default();
        *session.form_mut() = FilterState::new().with_text("nao_existe_s", "x", MatchMode::Exact);
        let outcome = session.apply(SearchBox::Dialog, today());
        assert_eq!(
            outcome,
            ApplyOutcome::Rejected {
                message: GENERIC_FAILURE_MESSAGE.to_string()
            }
        );
    }

    #[test]
    fn test_clear_all_keeps_search_term() {
        let mut session = SearchSession::default();
        session.type_in(SearchBox::Dialog, "irpf");
        session.form_mut().text.insert("titulo_s".into(), "x".into());
        assert_eq!(session.cycle_toggle("titulo_s"), MatchMode::Excludes);

        session.clear_all();
        assert_eq!(session.form(), &FilterState::new());
        assert_eq!(session.form().modes.mode("titulo_s"), MatchMode::Contains);
        assert_eq!(session.search_box(SearchBox::Dialog), "irpf");

        session.clear_all_including_search();
        assert_eq!(session.search_box(SearchBox::Dialog), "");
        assert_eq!(session.search_box(SearchBox::Header), "");
    }

    #[test]
    fn test_submit_header_match_all() {
        let mut session = SearchSession::default();
        assert_eq!(session.submit_header(), MATCH_ALL);
        session.type_in(SearchBox::Header, "irpf");
        assert_eq!(session.submit_header(), "irpf");
    }

    #[test]
    fn test_should_auto_open() {
        assert!(should_auto_open(None, None));
        assert!(should_auto_open(Some("  "), Some("")));
        assert!(!should_auto_open(Some("irpf"), None));
        assert!(!should_auto_open(None, Some("situacao_s:ATIVO")));
    }
}
