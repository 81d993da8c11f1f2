//! Property-based tests for clause ordering.

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use crate::{Clause, FilterCollector, FilterState};
    use busca_core::{FilterConfig, MatchMode};
    use chrono::NaiveDate;
    use proptest::prelude::*;

    fn any_mode() -> impl Strategy<Value = MatchMode> {
        prop::sample::select(MatchMode::ALL.to_vec())
    }

    proptest! {
        #[test]
        fn test_text_clauses_follow_declaration_order(
            picks in prop::collection::vec((0usize..22, "[A-Za-z ]{1,12}", any_mode()), 0..10)
        ) {
            let config = FilterConfig::default();
            let mut state = FilterState::new();
            for (index, value, mode) in &picks {
                state = state.with_text(config.text_fields[*index].id.clone(), value.clone(), *mode);
            }

            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let fragment = FilterCollector::new(config.clone()).collect(&state, today).unwrap();

            let positions: Vec<usize> = fragment
                .clauses()
                .iter()
                .map(Clause::field)
                .map(|id| config.text_fields.iter().position(|f| f.id == id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }

        #[test]
        fn test_blank_text_never_emits(spaces in " {0,8}", mode in any_mode()) {
            let state = FilterState::new().with_text("titulo_s", spaces, mode);
            let today = NaiveDate::from_ymd_opt(2024, 6, 15).unwrap();
            let fragment = FilterCollector::default().collect(&state, today).unwrap();
            prop_assert!(fragment.is_empty());
        }
    }
}
