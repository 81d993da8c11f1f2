//! Busca CLI
//!
//! Command-line host for the Busca advanced-filter query builder.

#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cli;
mod commands;
mod config;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{Args, Command};
use crate::config::BuscaConfig;

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let config = BuscaConfig::load(args.config.as_deref())?;

    match args.command {
        Command::Compose {
            form,
            term,
            trigger,
            today,
        } => {
            let form = commands::read_form(&form)?;
            let today = commands::resolve_today(today.as_deref())?;
            let query = commands::compose(&config, form, &term, trigger.into(), today)?;
            println!("{query}");
        }
        Command::Escape { field, value } => {
            println!("{}", commands::escape(&config, &field, &value));
        }
        Command::Unescape { value } => {
            println!("{}", commands::unescape_value(&value));
        }
        Command::Suggest { field, term } => {
            for value in commands::suggestions(&config, &field, &term).await? {
                println!("{value}");
            }
        }
        Command::Config { action } => commands::handle_config_command(&config, action)?,
    }

    Ok(())
}
