//! Smoke test for a full case round trip against the configured provider.
//!
//! Generates a case, asks one question, submits the parsed diagnosis as a
//! guess, and exports the transcript.
//!
//! Usage:
//!   OPENAI_API_KEY=sk-... \
//!   cargo run -p casegpt-cli --example case_smoke -- /tmp/case_smoke.pdf

use std::path::PathBuf;

use casegpt_cli::backend;
use casegpt_cli::config::CaseGptConfig;
use casegpt_cli::desk::CaseDesk;
use casegpt_core::session::Session;
use casegpt_model::prompts::PromptBook;

fn main() -> eyre::Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter("info")
        .init();

    let out = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("case_smoke.pdf"));

    let config = CaseGptConfig::default();
    let desk = CaseDesk::new(
        backend::connect(&config)?,
        PromptBook::new()?,
        config.document.clone(),
    );
    let mut session = Session::new();

    let start = desk.new_case(&mut session)?;
    println!("case start: {start:?}");
    println!("{}", session.messages()[0].content);

    let answer = desk.ask(&mut session, "What are the vital signs?")?;
    println!("\nQ: What are the vital signs?\nA: {answer}");

    if let Some(diagnosis) = session.case().map(|c| c.diagnosis.clone()) {
        if !diagnosis.is_empty() {
            let verdict = session.submit_diagnosis(&diagnosis)?;
            println!("\nself-check against {diagnosis:?}: {verdict:?}");
        }
    }

    let path = desk.export(&session, &out)?;
    println!("\ntranscript: {}", path.display());

    Ok(())
}
