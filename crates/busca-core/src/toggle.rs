//! Match-mode toggles for text filter fields.
//!
//! Each text field carries a three-state toggle cycling
//! `Contains -> Excludes -> Exact -> Contains`. The mode decides the clause
//! shape emitted for the field and how the toggle is presented.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Prefix of the accessible label announced for a toggle.
pub const ARIA_PREFIX: &str = "Modo de busca: ";

/// Match strategy for one text field.
///
/// Deserialization is lossy: an unrecognized name reads as `Contains`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    /// Substring match (`field:*value*`).
    #[default]
    Contains,
    /// Negated substring match (`-field:*value*`).
    Excludes,
    /// Exact phrase match (`field:"value"`).
    Exact,
}

/// How a mode is rendered on its toggle control.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModePresentation {
    /// Glyph shown inside the toggle.
    pub icon: &'static str,
    /// Visible text.
    pub label: &'static str,
    /// Modifier CSS class, empty for the default mode.
    pub css_class: &'static str,
}

const CONTAINS: ModePresentation = ModePresentation {
    icon: "✓",
    label: "Contém",
    css_class: "",
};

const EXCLUDES: ModePresentation = ModePresentation {
    icon: "✗",
    label: "Não Contém",
    css_class: "exclude",
};

const EXACT: ModePresentation = ModePresentation {
    icon: "=",
    label: "Igual",
    css_class: "exact",
};

impl ModePresentation {
    /// The accessible label for the toggle.
    pub fn aria_label(&self) -> String {
        format!("{ARIA_PREFIX}{}", self.label)
    }
}

impl MatchMode {
    /// Every mode, in cycle order.
    pub const ALL: [MatchMode; 3] = [MatchMode::Contains, MatchMode::Excludes, MatchMode::Exact];

    /// The next mode in the cycle.
    pub fn advance(self) -> Self {
        match self {
            MatchMode::Contains => MatchMode::Excludes,
            MatchMode::Excludes => MatchMode::Exact,
            MatchMode::Exact => MatchMode::Contains,
        }
    }

    /// The initial mode.
    pub fn reset() -> Self {
        MatchMode::Contains
    }

    /// Advances from `current` until `target` is reached.
    ///
    /// Returns the final mode and the number of transitions taken, which is
    /// never more than two.
    pub fn set_to(current: Self, target: Self) -> (Self, usize) {
        let mut mode = current;
        let mut steps = 0;
        while mode != target && steps < Self::ALL.len() {
            mode = mode.advance();
            steps += 1;
        }
        (mode, steps)
    }

    /// Parses a stored mode name; anything unrecognized is `Contains`.
    pub fn from_stored(value: &str) -> Self {
        match value.trim() {
            "excludes" => MatchMode::Excludes,
            "exact" => MatchMode::Exact,
            _ => MatchMode::Contains,
        }
    }

    /// The stored name of this mode.
    pub fn as_str(self) -> &'static str {
        match self {
            MatchMode::Contains => "contains",
            MatchMode::Excludes => "excludes",
            MatchMode::Exact => "exact",
        }
    }

    /// Presentation of this mode.
    pub fn presentation(self) -> &'static ModePresentation {
        match self {
            MatchMode::Contains => &CONTAINS,
            MatchMode::Excludes => &EXCLUDES,
            MatchMode::Exact => &EXACT,
        }
    }
}

impl<'de> Deserialize<'de> for MatchMode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let stored = String::deserialize(deserializer)?;
        Ok(MatchMode::from_stored(&stored))
    }
}

impl fmt::Display for MatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field toggle modes for one dialog session.
///
/// Fields never touched read as `Contains`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleBoard {
    modes: HashMap<String, MatchMode>,
}

impl ToggleBoard {
    /// Creates a board with every field in `Contains`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current mode of `field_id`.
    pub fn mode(&self, field_id: &str) -> MatchMode {
        self.modes.get(field_id).copied().unwrap_or_default()
    }

    /// Advances the toggle of `field_id` and returns the new mode.
    pub fn cycle(&mut self, field_id: &str) -> MatchMode {
        let next = self.mode(field_id).advance();
        self.store(field_id, next);
        log::debug!("Toggle {field_id} set to {next}");
        next
    }

    /// Moves the toggle of `field_id` to `target` through the cycle.
    pub fn set(&mut self, field_id: &str, target: MatchMode) -> MatchMode {
        let (mode, _) = MatchMode::set_to(self.mode(field_id), target);
        self.store(field_id, mode);
        mode
    }

    /// Returns every toggle to `Contains`.
    pub fn reset_all(&mut self) {
        self.modes.clear();
    }

    fn store(&mut self, field_id: &str, mode: MatchMode) {
        if mode == MatchMode::Contains {
            self.modes.remove(field_id);
        } else {
            self.modes.insert(field_id.to_string(), mode);
        }
    }
}
