use std::path::Path;

use casegpt_cli::cli::{Cli, Command, ConfigAction};
use casegpt_cli::config::{self, CaseGptConfig};
use casegpt_cli::desk::CaseDesk;
use casegpt_cli::{backend, repl};
use casegpt_core::session::Session;
use casegpt_model::prompts::PromptBook;
use clap::Parser;
use eyre::Result;

fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    // A missing .env is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    init_tracing(cli.log_json);

    let config_path = match &cli.config {
        Some(path) => path.clone(),
        None => config::default_config_path()?,
    };

    match cli.command {
        Some(Command::Config { action }) => run_config(action, &config_path),
        None => {
            let mut config = config::load_config(&config_path)?;
            config.apply_overrides(cli.provider, cli.model, cli.export_dir);
            play(&config)
        }
    }
}

fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

fn play(config: &CaseGptConfig) -> Result<()> {
    let prompts = match &config.question_template {
        Some(template) => PromptBook::with_question_template(template)?,
        None => PromptBook::new()?,
    };
    let model = backend::connect(config)?;
    let desk = CaseDesk::new(model, prompts, config.document.clone());

    let mut session = Session::new();
    tracing::info!(session_id = %session.id(), provider = ?config.provider, "session started");

    repl::run(&desk, &mut session, &config.export_dir())
}

fn run_config(action: ConfigAction, path: &Path) -> Result<()> {
    match action {
        ConfigAction::Init { force } => {
            if path.exists() && !force {
                return Err(eyre::eyre!(
                    "{} already exists; pass --force to overwrite",
                    path.display()
                ));
            }
            config::save_config(&CaseGptConfig::default(), path)?;
            println!("wrote {}", path.display());
        }
        ConfigAction::Show => {
            let config = config::load_config(path)?;
            println!("# {}", path.display());
            println!("{}", serde_json::to_string_pretty(&config)?);
        }
    }
    Ok(())
}
