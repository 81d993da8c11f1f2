//! Form snapshot captured when filters are applied.

use std::collections::HashMap;

use busca_core::{MatchMode, ToggleBoard};
use serde::{Deserialize, Serialize};

/// Raw `from`/`to` inputs of a range field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RangeInput {
    /// Lower bound as typed.
    pub from: String,
    /// Upper bound as typed.
    pub to: String,
}

impl RangeInput {
    /// Creates a range input.
    pub fn new<A: Into<String>, B: Into<String>>(from: A, to: B) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Whether both sides are blank.
    pub fn is_blank(&self) -> bool {
        self.from.trim().is_empty() && self.to.trim().is_empty()
    }
}

/// Values of every filter input plus the toggle modes, keyed by field id.
///
/// Missing entries read as blank inputs and `Contains` toggles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterState {
    /// Text field values.
    pub text: HashMap<String, String>,
    /// Text field match modes.
    pub modes: ToggleBoard,
    /// Date range inputs.
    pub dates: HashMap<String, RangeInput>,
    /// Numeric range input.
    pub numeric: RangeInput,
}

impl FilterState {
    /// Creates an empty snapshot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a text value and its mode.
    pub fn with_text<F, V>(mut self, field_id: F, value: V, mode: MatchMode) -> Self
    where
        F: Into<String>,
        V: Into<String>,
    {
        let field_id = field_id.into();
        self.modes.set(&field_id, mode);
        self.text.insert(field_id, value.into());
        self
    }

    /// Sets a date range.
    pub fn with_dates<F, A, B>(mut self, field_id: F, from: A, to: B) -> Self
    where
        F: Into<String>,
        A: Into<String>,
        B: Into<String>,
    {
        self.dates.insert(field_id.into(), RangeInput::new(from, to));
        self
    }

    /// Sets the numeric range.
    pub fn with_numeric<A: Into<String>, B: Into<String>>(mut self, from: A, to: B) -> Self {
        self.numeric = RangeInput::new(from, to);
        self
    }

    /// Value of a text field, empty when unset.
    pub fn text_value(&self, field_id: &str) -> &str {
        self.text.get(field_id).map(String::as_str).unwrap_or("")
    }

    /// Date inputs of a field, blank when unset.
    pub fn date_input(&self, field_id: &str) -> RangeInput {
        self.dates.get(field_id).cloned().unwrap_or_default()
    }

    /// Whether nothing at all was filled in.
    pub fn is_blank(&self) -> bool {
        self.text.values().all(|v| v.trim().is_empty())
            && self.dates.values().all(RangeInput::is_blank)
            && self.numeric.is_blank()
    }

    /// Clears every input and resets every toggle.
    pub fn clear(&mut self) {
        self.text.clear();
        self.dates.clear();
        self.numeric = RangeInput::default();
        self.modes.reset_all();
    }
}
