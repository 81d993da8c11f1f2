//! Query-language clauses and fragments.
//!
//! The grammar produced is fixed for backend compatibility:
//!
//! | Clause | Form |
//! |--------|------|
//! | Range | `field:[<from> TO <to>]` |
//! | Contains | `field:*<value>*` |
//! | Excludes | `-field:*<value>*` |
//! | Exact | `field:"<value>"` |
//!
//! `*` doubles as the open-bound token in ranges. Values inside text clauses
//! are expected to be escaped already.

use std::fmt;

use busca_core::MatchMode;

/// Open-bound token for ranges.
pub const OPEN_BOUND: &str = "*";

/// One self-contained clause constraining a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Clause {
    /// Inclusive range.
    Range {
        /// Field id.
        field: String,
        /// Lower bound or `*`.
        from: String,
        /// Upper bound or `*`.
        to: String,
    },
    /// Text match in the given mode.
    Text {
        /// Field id.
        field: String,
        /// Escaped value.
        value: String,
        /// Match mode.
        mode: MatchMode,
    },
}

impl Clause {
    /// Creates a range clause.
    pub fn range<F, A, B>(field: F, from: A, to: B) -> Self
    where
        F: Into<String>,
        A: Into<String>,
        B: Into<String>,
    {
        Clause::Range {
            field: field.into(),
            from: from.into(),
            to: to.into(),
        }
    }

    /// Creates a text clause from an already escaped value.
    pub fn text<F: Into<String>, V: Into<String>>(field: F, value: V, mode: MatchMode) -> Self {
        Clause::Text {
            field: field.into(),
            value: value.into(),
            mode,
        }
    }

    /// Field this clause constrains.
    pub fn field(&self) -> &str {
        match self {
            Clause::Range { field, .. } | Clause::Text { field, .. } => field,
        }
    }

    /// The clause followed by the fragment separator.
    pub fn to_piece(&self) -> String {
        format!("{self} ")
    }
}

impl fmt::Display for Clause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Clause::Range { field, from, to } => write!(f, "{field}:[{from} TO {to}]"),
            Clause::Text { field, value, mode } => match mode {
                MatchMode::Contains => write!(f, "{field}:*{value}*"),
                MatchMode::Excludes => write!(f, "-{field}:*{value}*"),
                MatchMode::Exact => write!(f, "{field}:\"{value}\""),
            },
        }
    }
}

/// Ordered clauses produced for one apply action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryFragment {
    clauses: Vec<Clause>,
}

impl QueryFragment {
    /// Creates an empty fragment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a clause.
    pub fn push(&mut self, clause: Clause) {
        self.clauses.push(clause);
    }

    /// Whether no clause was emitted.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Clauses in emission order.
    pub fn clauses(&self) -> &[Clause] {
        &self.clauses
    }
}

impl Extend<Clause> for QueryFragment {
    fn extend<T: IntoIterator<Item = Clause>>(&mut self, iter: T) {
        self.clauses.extend(iter);
    }
}

impl fmt::Display for QueryFragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let joined: String = self.clauses.iter().map(Clause::to_piece).collect();
        f.write_str(joined.trim_end())
    }
}
