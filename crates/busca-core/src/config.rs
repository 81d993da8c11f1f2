//! Filter dialog configuration.
//!
//! Which date fields the dialog shows, the text field list, the escaping
//! allow-list and whether the two search boxes are synchronized are product
//! choices. They live here so hosts can inject them instead of patching code.

use std::collections::HashSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::fields::{
    DEFAULT_SPECIAL_FIELDS, FieldKind, FieldSpec, default_date_fields, default_numeric_field,
    default_text_fields, extended_date_fields,
};

/// Filter dialog configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FilterConfig {
    /// Date range fields, in emission order.
    #[serde(default = "default_date_fields")]
    pub date_fields: Vec<FieldSpec>,

    /// The numeric range field, if the dialog has one.
    ///
    /// TOML has no null, so a file that omits this gets the default field;
    /// set `numeric_range_enabled = false` to drop the range instead.
    #[serde(default = "default_numeric")]
    pub numeric_field: Option<FieldSpec>,

    /// Whether the numeric range field is shown and collected.
    #[serde(default = "default_true")]
    pub numeric_range_enabled: bool,

    /// Text fields, in emission order.
    #[serde(default = "default_text_fields")]
    pub text_fields: Vec<FieldSpec>,

    /// Fields escaped with the whitespace-wildcard policy.
    #[serde(default = "default_special_fields")]
    pub special_fields: Vec<String>,

    /// Fall back to the other search box when the triggering one is empty.
    #[serde(default = "default_true")]
    pub sync_search_boxes: bool,
}

fn default_numeric() -> Option<FieldSpec> {
    Some(default_numeric_field())
}

fn default_special_fields() -> Vec<String> {
    DEFAULT_SPECIAL_FIELDS.iter().map(|s| s.to_string()).collect()
}

fn default_true() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            date_fields: default_date_fields(),
            numeric_field: default_numeric(),
            numeric_range_enabled: default_true(),
            text_fields: default_text_fields(),
            special_fields: default_special_fields(),
            sync_search_boxes: default_true(),
        }
    }
}

impl FilterConfig {
    /// The four-date-field layout.
    pub fn extended() -> Self {
        Self {
            date_fields: extended_date_fields(),
            ..Default::default()
        }
    }

    /// Parses and validates a TOML document.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| Error::config(format!("Invalid TOML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::config(format!("{}: {e}", path.display())))?;
        log::debug!("Loaded filter config from {}", path.display());
        Ok(config)
    }

    /// Serializes the configuration as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::config(e.to_string()))
    }

    /// The numeric range field, unless absent or disabled.
    pub fn numeric(&self) -> Option<&FieldSpec> {
        self.numeric_field
            .as_ref()
            .filter(|_| self.numeric_range_enabled)
    }

    /// Looks up a field of any kind by id.
    pub fn field(&self, id: &str) -> Option<&FieldSpec> {
        self.all_fields().find(|f| f.id == id)
    }

    /// Iterates over every configured field in emission order.
    pub fn all_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.date_fields
            .iter()
            .chain(self.numeric())
            .chain(self.text_fields.iter())
    }

    /// Checks ids are non-empty and unique and each table holds its own kind.
    pub fn validate(&self) -> Result<()> {
        check_kind(&self.date_fields, FieldKind::DateRange)?;
        check_kind(&self.text_fields, FieldKind::Text)?;
        if let Some(field) = &self.numeric_field {
            check_kind(std::slice::from_ref(field), FieldKind::NumericRange)?;
        }

        let mut seen = HashSet::new();
        for field in self.all_fields() {
            if field.id.trim().is_empty() {
                return Err(Error::config("field id must not be empty"));
            }
            if !seen.insert(field.id.as_str()) {
                return Err(Error::config(format!("duplicate field id '{}'", field.id)));
            }
        }
        Ok(())
    }
}

fn check_kind(fields: &[FieldSpec], expected: FieldKind) -> Result<()> {
    match fields.iter().find(|f| f.kind != expected) {
        Some(field) => Err(Error::config(format!(
            "field '{}' is {:?}, expected {:?}",
            field.id, field.kind, expected
        ))),
        None => Ok(()),
    }
}

// ============================================================================
// Tests
// ============================================================================
