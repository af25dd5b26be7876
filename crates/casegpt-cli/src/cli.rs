use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::Provider;

/// Interactive clinical-case quiz: the model writes a case, you ask
/// questions and make the diagnosis.
#[derive(Debug, Parser)]
#[command(name = "casegpt", version, about)]
pub struct Cli {
    /// Config file; defaults to `<config dir>/casegpt/config.json`.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Model provider, overriding the config file.
    #[arg(long, value_enum)]
    pub provider: Option<Provider>,

    /// Model ID, overriding the config file.
    #[arg(long)]
    pub model: Option<String>,

    /// Directory for exported transcripts.
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// Emit logs as JSON lines on stderr.
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage the config file.
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigAction {
    /// Write a config file with default settings.
    Init {
        /// Overwrite an existing file.
        #[arg(long)]
        force: bool,
    },
    /// Print the effective config.
    Show,
}
