//! Interactive terminal session.
//!
//! Free text is a question about the case; slash commands drive the rest
//! of the quiz.

use std::path::{Path, PathBuf};
use std::time::Duration;

use casegpt_core::models::message::{Message, Role};
use casegpt_core::session::{Session, Verdict};
use casegpt_export::DEFAULT_FILE_NAME;
use casegpt_model::client::CaseModel;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::{InquireError, Text};

use crate::desk::{CaseDesk, CaseStart};

pub const HELP: &str = "\
Type a question about the case, or one of:
  /diagnose <guess>   submit your diagnosis
  /reveal             show the correct diagnosis
  /new                generate a new case (clears the transcript)
  /export [path]      save the transcript as a PDF
  /transcript         print the transcript so far
  /help               show this help
  /quit               leave";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(String),
    Diagnose(String),
    Reveal,
    NewCase,
    Export(Option<PathBuf>),
    Transcript,
    Help,
    Quit,
    Empty,
    Unknown(String),
}

/// Interpret one line of input.
pub fn parse_command(input: &str) -> Command {
    let input = input.trim();
    if input.is_empty() {
        return Command::Empty;
    }
    let Some(rest) = input.strip_prefix('/') else {
        return Command::Ask(input.to_string());
    };

    let (name, arg) = match rest.split_once(char::is_whitespace) {
        Some((name, arg)) => (name, arg.trim()),
        None => (rest, ""),
    };

    match name.to_ascii_lowercase().as_str() {
        "diagnose" | "dx" => Command::Diagnose(arg.to_string()),
        "reveal" => Command::Reveal,
        "new" => Command::NewCase,
        "export" => Command::Export((!arg.is_empty()).then(|| PathBuf::from(arg))),
        "transcript" => Command::Transcript,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        _ => Command::Unknown(name.to_string()),
    }
}

/// Run the quiz until the user quits. A case is generated on entry.
pub fn run<M: CaseModel>(
    desk: &CaseDesk<M>,
    session: &mut Session,
    export_dir: &Path,
) -> eyre::Result<()> {
    println!("{}", style("CaseGPT: Your DDX Friend").bold());
    println!("{}", style(HELP).dim());

    new_case(desk, session);

    loop {
        let input = match Text::new(">")
            .with_placeholder("Ask question about the case...")
            .prompt()
        {
            Ok(input) => input,
            Err(InquireError::OperationCanceled | InquireError::OperationInterrupted) => break,
            Err(e) => return Err(e.into()),
        };

        match parse_command(&input) {
            Command::Empty => {}
            Command::Ask(question) => {
                if session.case().is_none() {
                    report_error("no case is active; use /new to generate one");
                    continue;
                }
                let result = with_spinner("Analyzing...", || desk.ask(session, &question));
                match result {
                    Ok(answer) => print_message(&Message::assistant(answer)),
                    Err(e) => report_error(&e.to_string()),
                }
            }
            Command::Diagnose(guess) => match session.submit_diagnosis(&guess) {
                Ok(verdict) => {
                    let feedback = verdict.feedback(&guess);
                    match verdict {
                        Verdict::Correct => println!("{}", style(feedback).green().bold()),
                        Verdict::Incorrect => println!("{}", style(feedback).red().bold()),
                    }
                }
                Err(e) => report_error(&e.to_string()),
            },
            Command::Reveal => match session.reveal() {
                Ok(diagnosis) => println!(
                    "{} {}",
                    style("Correct Diagnosis:").bold(),
                    style(diagnosis).yellow()
                ),
                Err(e) => report_error(&e.to_string()),
            },
            Command::NewCase => new_case(desk, session),
            Command::Export(path) => {
                let path = path.unwrap_or_else(|| export_dir.join(DEFAULT_FILE_NAME));
                match desk.export(session, &path) {
                    Ok(path) => println!(
                        "{} {}",
                        style("PDF generated successfully:").green(),
                        path.display()
                    ),
                    Err(e) => report_error(&e.to_string()),
                }
            }
            Command::Transcript => {
                for message in session.messages() {
                    print_message(message);
                }
            }
            Command::Help => println!("{HELP}"),
            Command::Quit => break,
            Command::Unknown(name) => report_error(&format!("unknown command /{name}; try /help")),
        }
    }

    Ok(())
}

fn new_case<M: CaseModel>(desk: &CaseDesk<M>, session: &mut Session) {
    match with_spinner("Generating case...", || desk.new_case(session)) {
        Ok(start) => {
            for message in session.messages() {
                print_message(message);
            }
            if start == CaseStart::MissingDiagnosis {
                report_warning(
                    "the model did not include a diagnosis; guesses cannot be checked for this case",
                );
            }
        }
        Err(e) => report_error(&format!("case generation failed: {e}")),
    }
}

fn with_spinner<T>(message: &'static str, f: impl FnOnce() -> T) -> T {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.green} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message(message);
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = f();

    spinner.finish_and_clear();
    result
}

fn print_message(message: &Message) {
    let header = format!("{}:", message.role);
    let header = match message.role {
        Role::User => style(header).green().bold(),
        Role::Assistant => style(header).cyan().bold(),
    };
    println!("\n{header}\n{}\n", message.content);
}

fn report_error(message: &str) {
    eprintln!("{} {message}", style("error:").red().bold());
}

fn report_warning(message: &str) {
    eprintln!("{} {message}", style("warning:").yellow().bold());
}
