//! Clause ordering does not depend on the order fields were filled in.

use busca_core::{FilterConfig, MatchMode};
use busca_query::{Clause, FilterCollector, FilterState};

use crate::common::{FULL_FRAGMENT, fully_populated_state, today};

#[test]
fn test_fully_populated_form_order() {
    let fragment = FilterCollector::default()
        .collect_string(&fully_populated_state(), today())
        .unwrap();
    assert_eq!(fragment, FULL_FRAGMENT);
}

#[test]
fn test_entry_order_is_irrelevant() {
    let reversed = FilterState::new()
        .with_dates("dt_protocolo_tdt", "2024-01-01", "")
        .with_dates("dt_juntada_tdt", "2024-03-01", "2024-03-31")
        .with_numeric("100", "")
        .with_text("unidade_origem_s", "DRF SAO PAULO", MatchMode::Contains)
        .with_text("grupo_processo_s", "CREDITO", MatchMode::Contains)
        .with_text("titulo_s", "Imposto de Renda", MatchMode::Excludes)
        .with_text("result_questdrj_nivel2_s", "PROCEDENTE", MatchMode::Exact);

    let collector = FilterCollector::default();
    assert_eq!(
        collector.collect_string(&reversed, today()).unwrap(),
        collector
            .collect_string(&fully_populated_state(), today())
            .unwrap()
    );
}

#[test]
fn test_clause_kinds_are_grouped() {
    let fragment = FilterCollector::default()
        .collect(&fully_populated_state(), today())
        .unwrap();
    let fields: Vec<&str> = fragment.clauses().iter().map(Clause::field).collect();
    assert_eq!(
        fields,
        [
            "dt_protocolo_tdt",
            "dt_juntada_tdt",
            "valor_processo_d",
            "grupo_processo_s",
            "titulo_s",
            "unidade_origem_s",
            "result_questdrj_nivel2_s",
        ]
    );
}

#[test]
fn test_extended_layout_orders_dates_by_declaration() {
    let state = FilterState::new()
        .with_dates("dt_anexacao_tdt", "2024-02-01", "2024-02-02")
        .with_dates("dt_protocolo_tdt", "2024-01-01", "2024-01-02");
    let fragment = FilterCollector::new(FilterConfig::extended())
        .collect_string(&state, today())
        .unwrap();
    assert_eq!(
        fragment,
        "dt_protocolo_tdt:[2024-01-01T00:00:00Z TO 2024-01-02T23:59:59Z] \
         dt_anexacao_tdt:[2024-02-01T00:00:00Z TO 2024-02-02T23:59:59Z]"
    );
}
