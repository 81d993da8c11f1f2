//! Shared fixtures for busca-query integration tests.

use busca_core::MatchMode;
use busca_query::FilterState;
use chrono::NaiveDate;

/// Fixed "today" used across the suite.
pub fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).expect("valid date")
}

/// A form with every kind of field filled in, entered text-first.
pub fn fully_populated_state() -> FilterState {
    FilterState::new()
        .with_text("result_questdrj_nivel2_s", "PROCEDENTE", MatchMode::Exact)
        .with_text("titulo_s", "Imposto de Renda", MatchMode::Excludes)
        .with_text("grupo_processo_s", "CREDITO", MatchMode::Contains)
        .with_text("unidade_origem_s", "DRF SAO PAULO", MatchMode::Contains)
        .with_numeric("100", "")
        .with_dates("dt_juntada_tdt", "2024-03-01", "2024-03-31")
        .with_dates("dt_protocolo_tdt", "2024-01-01", "")
}

/// The fragment expected for [`fully_populated_state`].
pub const FULL_FRAGMENT: &str = concat!(
    "dt_protocolo_tdt:[2024-01-01T00:00:00Z TO 2024-06-15T23:59:59Z] ",
    "dt_juntada_tdt:[2024-03-01T00:00:00Z TO 2024-03-31T23:59:59Z] ",
    "valor_processo_d:[100 TO *] ",
    "grupo_processo_s:*CREDITO* ",
    r"-titulo_s:*Imposto\ de\ Renda* ",
    r"unidade_origem_s:*DRF\ *SAO\ *PAULO* ",
    r#"result_questdrj_nivel2_s:"PROCEDENTE""#,
);
