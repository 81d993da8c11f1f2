//! Escaping of literal values for the backend query language.
//!
//! Two policies are selected by field id:
//!
//! - **Standard** fields backslash-escape every query-syntax character and
//!   every whitespace character, so the value matches as one literal token.
//! - **Special** fields (hierarchical organizational-unit names) escape the
//!   same punctuation but turn each whitespace run into `\ *`, letting the
//!   backend match across word-boundary variations between tokens.
//!
//! # Example
//!
//! ```
//! use busca_core::escape::Escaper;
//!
//! let escaper = Escaper::default();
//! assert_eq!(escaper.escape("Imposto de Renda", "titulo_s"), r"Imposto\ de\ Renda");
//! assert_eq!(escaper.escape("DRF SAO PAULO", "unidade_origem_s"), r"DRF\ *SAO\ *PAULO");
//! ```

use std::collections::HashSet;

use crate::config::FilterConfig;
use crate::fields::DEFAULT_SPECIAL_FIELDS;

/// Characters with syntactic meaning in the query language.
const SYNTAX_CHARS: &[char] = &[
    '-', '[', ']', '{', '}', '(', ')', '*', '+', '?', '.', ',', '\\', '^', '$', '|', '#',
];

/// Replacement for a whitespace run on special fields.
const WILDCARD_GAP: &str = "\\ *";

fn is_syntax_char(c: char) -> bool {
    SYNTAX_CHARS.contains(&c)
}

/// Escapes values according to the per-field policy.
#[derive(Debug, Clone)]
pub struct Escaper {
    special_fields: HashSet<String>,
}

impl Default for Escaper {
    fn default() -> Self {
        Self::new(DEFAULT_SPECIAL_FIELDS.iter().copied())
    }
}

impl Escaper {
    /// Creates an escaper with the given special-field allow-list.
    pub fn new<I, S>(special_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            special_fields: special_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Creates an escaper from the configured allow-list.
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(config.special_fields.iter().cloned())
    }

    /// Whether `field_id` uses the whitespace-wildcard policy.
    pub fn is_special(&self, field_id: &str) -> bool {
        self.special_fields.contains(field_id)
    }

    /// Escapes `value` for embedding in a clause on `field_id`.
    ///
    /// An empty value yields an empty string.
    pub fn escape(&self, value: &str, field_id: &str) -> String {
        if value.is_empty() {
            return String::new();
        }

        let special = self.is_special(field_id);
        let mut out = String::with_capacity(value.len() * 2);
        let mut in_gap = false;

        for c in value.chars() {
            if special && c.is_whitespace() {
                if !in_gap {
                    out.push_str(WILDCARD_GAP);
                    in_gap = true;
                }
                continue;
            }
            in_gap = false;
            if is_syntax_char(c) || c.is_whitespace() {
                out.push('\\');
            }
            out.push(c);
        }

        out
    }
}

/// Escapes `value` with the default special-field allow-list.
pub fn escape(value: &str, field_id: &str) -> String {
    Escaper::default().escape(value, field_id)
}

/// Removes one level of backslash escaping.
///
/// Each `\x` becomes `x`; a trailing lone backslash is kept.
pub fn unescape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            match chars.next() {
                Some(next) => out.push(next),
                None => out.push(c),
            }
        } else {
            out.push(c);
        }
    }
    out
}
