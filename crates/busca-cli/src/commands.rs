//! Command handlers.

use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result, anyhow, bail};
use busca_core::dates::parse_date;
use busca_core::{Escaper, unescape};
use busca_query::{ApplyOutcome, FilterState, SearchBox, SearchSession};
use busca_suggest::{DomainCache, SolrTermsSource, ensure_suggestible, suggest};
use chrono::NaiveDate;

use crate::cli::ConfigAction;
use crate::config::BuscaConfig;

/// Reads a form snapshot from a file, or stdin for `-`.
pub fn read_form(source: &str) -> Result<FilterState> {
    let content = if source == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read form from stdin")?;
        buf
    } else {
        std::fs::read_to_string(source).with_context(|| format!("Failed to read {source}"))?
    };
    serde_json::from_str(&content).context("Form snapshot is not valid JSON")
}

/// Resolves the `--today` option.
pub fn resolve_today(raw: Option<&str>) -> Result<NaiveDate> {
    match raw {
        Some(raw) => parse_date(raw).ok_or_else(|| anyhow!("Invalid --today date '{raw}'")),
        None => Ok(busca_core::dates::today()),
    }
}

/// Composes a query and returns it, or the user-facing rejection message.
pub fn compose(
    config: &BuscaConfig,
    form: FilterState,
    term: &str,
    trigger: SearchBox,
    today: NaiveDate,
) -> Result<String> {
    let mut session = SearchSession::new(config.filters.clone());
    session.type_in(trigger, term);
    *session.form_mut() = form;

    match session.apply(trigger, today) {
        ApplyOutcome::Submit(composed) => Ok(composed.query),
        ApplyOutcome::Rejected { message } => bail!(message),
    }
}

/// Escapes `value` with the configured policy for `field`.
pub fn escape(config: &BuscaConfig, field: &str, value: &str) -> String {
    Escaper::from_config(&config.filters).escape(value, field)
}

/// Reverses one level of escaping.
pub fn unescape_value(value: &str) -> String {
    unescape(value)
}

/// Fetches the domain of `field` and filters it for `term`.
pub async fn suggestions(config: &BuscaConfig, field: &str, term: &str) -> Result<Vec<String>> {
    ensure_suggestible(&config.filters, field)?;
    let source = SolrTermsSource::new(config.suggest.clone());
    let mut cache = DomainCache::new();
    let values = cache.load(&source, field).await;
    Ok(suggest(&values, term, config.suggest.display_limit)
        .into_iter()
        .map(str::to_string)
        .collect())
}

/// Handles a config subcommand.
pub fn handle_config_command(config: &BuscaConfig, action: ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show { extended } => {
            let mut config = config.clone();
            if extended {
                config.filters = busca_core::FilterConfig::extended();
            }
            print!("{}", config.to_toml_string()?);
            Ok(())
        }
        ConfigAction::Init { file, force } => {
            let path = Path::new(&file);
            BuscaConfig::init(path, force)?;
            println!("Config file created at {}", path.display());
            Ok(())
        }
    }
}
