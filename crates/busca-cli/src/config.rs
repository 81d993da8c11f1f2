//! CLI configuration file.
//!
//! ```toml
//! [filters]
//! sync_search_boxes = true
//!
//! [suggest]
//! base_url = "http://localhost:8983/solr/eprocesso"
//! ```

use std::path::Path;

use anyhow::{Context, Result, bail};
use busca_core::FilterConfig;
use busca_suggest::SuggestConfig;
use serde::{Deserialize, Serialize};

/// Everything the CLI reads from its configuration file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuscaConfig {
    /// Filter dialog field table and behavior.
    #[serde(default)]
    pub filters: FilterConfig,

    /// Autocomplete backend.
    #[serde(default)]
    pub suggest: SuggestConfig,
}

impl BuscaConfig {
    /// Loads `path`, or the defaults when no path is given.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let Some(path) = path else {
            log::debug!("No config file given, using defaults");
            return Ok(Self::default());
        };
        let content =
            std::fs::read_to_string(path).with_context(|| format!("Failed to read {path}"))?;
        let config: Self =
            toml::from_str(&content).with_context(|| format!("Failed to parse {path}"))?;
        config.filters.validate()?;
        Ok(config)
    }

    /// Writes the defaults to `path`.
    pub fn init(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config file already exists at {}. Use --force to overwrite.",
                path.display()
            );
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        std::fs::write(path, Self::default().to_toml_string()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        Ok(())
    }

    /// Serializes as pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
