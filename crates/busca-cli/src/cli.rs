//! Command-line argument definitions.

use busca_query::SearchBox;
use clap::{Parser, Subcommand, ValueEnum};

/// Busca CLI - advanced search query builder
#[derive(Parser, Debug)]
#[command(name = "busca")]
#[command(author, version, about = "Build backend search queries from filter forms", long_about = None)]
pub struct Args {
    /// Configuration file path
    #[arg(short, long, global = true, env = "BUSCA_CONFIG")]
    pub config: Option<String>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compose a query from a JSON form snapshot
    Compose {
        /// Form snapshot file, `-` for stdin
        #[arg(short, long, default_value = "-")]
        form: String,

        /// Free-text search term
        #[arg(short, long, default_value = "")]
        term: String,

        /// Search box the apply was triggered from
        #[arg(long, value_enum, default_value_t = Trigger::Dialog)]
        trigger: Trigger,

        /// Date closing open-ended ranges (YYYY-MM-DD), defaults to today
        #[arg(long)]
        today: Option<String>,
    },

    /// Escape a value for a field
    Escape {
        /// Field id
        field: String,
        /// Raw value
        value: String,
    },

    /// Remove one level of escaping
    Unescape {
        /// Escaped value
        value: String,
    },

    /// List autocomplete suggestions for a field
    Suggest {
        /// Field id
        field: String,
        /// Text typed so far
        #[arg(default_value = "")]
        term: String,
    },

    /// Configuration operations
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Print the effective configuration as TOML
    Show {
        /// Use the four-date-field layout instead of the loaded one
        #[arg(long)]
        extended: bool,
    },
    /// Write a default configuration file
    Init {
        /// Destination path
        file: String,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

/// Search box named on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    Header,
    Dialog,
}

impl From<Trigger> for SearchBox {
    fn from(trigger: Trigger) -> Self {
        match trigger {
            Trigger::Header => SearchBox::Header,
            Trigger::Dialog => SearchBox::Dialog,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compose_defaults() {
        let args = Args::try_parse_from(["busca", "compose"]).unwrap();
        let Command::Compose {
            form,
            term,
            trigger,
            today,
        } = args.command
        else {
            unreachable!("Expected Compose command");
        };
        assert_eq!(form, "-");
        assert_eq!(term, "");
        assert_eq!(trigger, Trigger::Dialog);
        assert!(today.is_none());
    }

    #[test]
    fn test_parse_global_flags_after_subcommand() {
        let args =
            Args::try_parse_from(["busca", "escape", "titulo_s", "a b", "-v", "-c", "x.toml"])
                .unwrap();
        assert!(args.verbose);
        assert_eq!(args.config.as_deref(), Some("x.toml"));
    }

    #[test]
    fn test_parse_config_init() {
        let args = Args::try_parse_from(["busca", "config", "init", "out.toml", "--force"]).unwrap();
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init { force: true, .. }
            }
        ));
    }

    #[test]
    fn test_trigger_into_search_box() {
        assert_eq!(SearchBox::from(Trigger::Header), SearchBox::Header);
    }
}
