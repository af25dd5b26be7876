use std::path::PathBuf;

use casegpt_cli::repl::{Command, parse_command};

#[test]
fn plain_text_is_a_question() {
    assert_eq!(
        parse_command("  What is the heart rate? "),
        Command::Ask("What is the heart rate?".to_string())
    );
}

#[test]
fn blank_input_is_empty() {
    assert_eq!(parse_command("   "), Command::Empty);
}

#[test]
fn diagnose_takes_rest_of_line() {
    assert_eq!(
        parse_command("/diagnose  acute appendicitis "),
        Command::Diagnose("acute appendicitis".to_string())
    );
    assert_eq!(parse_command("/dx gout"), Command::Diagnose("gout".to_string()));
    assert_eq!(parse_command("/diagnose"), Command::Diagnose(String::new()));
}

#[test]
fn export_path_is_optional() {
    assert_eq!(parse_command("/export"), Command::Export(None));
    assert_eq!(
        parse_command("/export out/case.pdf"),
        Command::Export(Some(PathBuf::from("out/case.pdf")))
    );
}

#[test]
fn simple_commands() {
    assert_eq!(parse_command("/reveal"), Command::Reveal);
    assert_eq!(parse_command("/NEW"), Command::NewCase);
    assert_eq!(parse_command("/transcript"), Command::Transcript);
    assert_eq!(parse_command("/help"), Command::Help);
    assert_eq!(parse_command("/quit"), Command::Quit);
    assert_eq!(parse_command("/exit"), Command::Quit);
}

#[test]
fn unknown_command_is_reported() {
    assert_eq!(parse_command("/frobnicate now"), Command::Unknown("frobnicate".to_string()));
}
