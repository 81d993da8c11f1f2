//! End-to-end apply attempts through `SearchSession`.

use busca_core::{Error, MatchMode, ValidationReason};
use busca_query::{ApplyOutcome, FilterState, SearchBox, SearchSession};

use crate::common::{FULL_FRAGMENT, fully_populated_state, today};

#[test]
fn test_apply_with_term_and_full_form() {
    let mut session = SearchSession::default();
    session.type_in(SearchBox::Header, "restituição");
    *session.form_mut() = fully_populated_state();

    let ApplyOutcome::Submit(composed) = session.apply(SearchBox::Dialog, today()) else {
        unreachable!("Expected a submittable query");
    };
    assert_eq!(composed.term, "restituição");
    assert_eq!(composed.filters, FULL_FRAGMENT);
    assert_eq!(composed.query, format!("restituição {FULL_FRAGMENT}"));
    assert_eq!(session.search_box(SearchBox::Header), composed.query);
}

#[test]
fn test_reapply_replaces_previous_query() {
    let mut session = SearchSession::default();
    session.type_in(SearchBox::Dialog, "irpf");
    session.form_mut().numeric.to = "1000".to_string();
    assert!(session.apply(SearchBox::Dialog, today()).is_submit());

    session.clear_all();
    session.type_in(SearchBox::Dialog, "irpf");
    *session.form_mut() = FilterState::new().with_text("situacao_s", "ATIVO", MatchMode::Contains);
    assert!(session.apply(SearchBox::Dialog, today()).is_submit());
    assert_eq!(
        session.search_box(SearchBox::Header),
        "irpf situacao_s:*ATIVO*"
    );
}

#[test]
fn test_empty_criteria_rejected_and_boxes_untouched() {
    let mut session = SearchSession::default();
    session.type_in(SearchBox::Header, "   ");
    let outcome = session.apply(SearchBox::Dialog, today());
    assert_eq!(
        outcome,
        ApplyOutcome::Rejected {
            message: "no criteria provided".to_string()
        }
    );
    assert_eq!(session.search_box(SearchBox::Header), "   ");
}

#[test]
fn test_compose_surfaces_validation_error() {
    let mut session = SearchSession::default();
    *session.form_mut() = fully_populated_state().with_numeric("abc", "");
    let err = session.compose(SearchBox::Dialog, today()).unwrap_err();
    let Error::Validation(err) = err else {
        unreachable!("Expected Validation error variant");
    };
    assert_eq!(err.field, "valor_processo_d");
    assert!(matches!(err.reason, ValidationReason::InvalidNumber { .. }));
}

#[test]
fn test_filters_only_apply() {
    let mut session = SearchSession::default();
    *session.form_mut() = FilterState::new().with_dates("dt_juntada_tdt", "2024-01-01", "");
    let ApplyOutcome::Submit(composed) = session.apply(SearchBox::Header, today()) else {
        unreachable!("Expected a submittable query");
    };
    assert_eq!(
        composed.query,
        "dt_juntada_tdt:[2024-01-01T00:00:00Z TO 2024-06-15T23:59:59Z]"
    );
    assert!(composed.term.is_empty());
}

#[test]
fn test_form_snapshot_from_json() {
    let json = r#"{
        "text": {"titulo_s": "Imposto de Renda"},
        "modes": {"titulo_s": "exact"},
        "dates": {"dt_protocolo_tdt": {"from": "2024-01-01"}}
    }"#;
    let mut session = SearchSession::default();
    *session.form_mut() = serde_json::from_str(json).unwrap();
    let composed = session.compose(SearchBox::Dialog, today()).unwrap();
    assert_eq!(
        composed.query,
        r#"dt_protocolo_tdt:[2024-01-01T00:00:00Z TO 2024-06-15T23:59:59Z] titulo_s:"Imposto\ de\ Renda""#
    );
}
