use std::cell::RefCell;
use std::collections::VecDeque;

use casegpt_cli::desk::{CaseDesk, CaseStart, DeskError};
use casegpt_core::error::SessionError;
use casegpt_core::models::message::{Message, Role};
use casegpt_core::session::{Session, Verdict};
use casegpt_export::styles::DocumentStyles;
use casegpt_model::client::CaseModel;
use casegpt_model::error::ModelError;
use casegpt_model::prompts::{CASE_SYSTEM_PROMPT, PromptBook};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Call {
    Generate(String),
    Complete(String),
}

/// Replays canned replies in order and records every prompt it receives.
#[derive(Default)]
struct ScriptedModel {
    replies: RefCell<VecDeque<Result<String, ModelError>>>,
    calls: RefCell<Vec<Call>>,
}

impl ScriptedModel {
    fn with_replies(replies: Vec<Result<String, ModelError>>) -> Self {
        Self {
            replies: RefCell::new(replies.into()),
            calls: RefCell::default(),
        }
    }

    fn next_reply(&self) -> Result<String, ModelError> {
        self.replies
            .borrow_mut()
            .pop_front()
            .expect("scripted model ran out of replies")
    }
}

impl CaseModel for ScriptedModel {
    fn generate(&self, system_prompt: &str) -> Result<String, ModelError> {
        self.calls
            .borrow_mut()
            .push(Call::Generate(system_prompt.to_string()));
        self.next_reply()
    }

    fn complete(&self, user_prompt: &str) -> Result<String, ModelError> {
        self.calls
            .borrow_mut()
            .push(Call::Complete(user_prompt.to_string()));
        self.next_reply()
    }

    fn model_id(&self) -> &str {
        "scripted"
    }
}

const CASE: &str = "A 34-year-old woman presents with fever and productive cough.\n\n\
                    [CORRECT_DIAGNOSIS: Community-Acquired Pneumonia]";

fn desk(replies: Vec<Result<String, ModelError>>) -> CaseDesk<ScriptedModel> {
    CaseDesk::new(
        ScriptedModel::with_replies(replies),
        PromptBook::new().unwrap(),
        DocumentStyles::default(),
    )
}

#[test]
fn new_case_sends_case_prompt_and_stores_parsed_case() {
    let desk = desk(vec![Ok(CASE.to_string())]);
    let mut session = Session::new();

    let start = desk.new_case(&mut session).unwrap();
    assert_eq!(start, CaseStart::Ready);

    let case = session.case().unwrap();
    assert_eq!(
        case.narrative,
        "A 34-year-old woman presents with fever and productive cough.\n\n"
    );
    assert_eq!(case.diagnosis, "Community-Acquired Pneumonia");
    assert_eq!(session.messages(), &[Message::assistant(case.narrative.clone())]);

    assert_eq!(
        desk.model().calls.borrow().as_slice(),
        &[Call::Generate(CASE_SYSTEM_PROMPT.to_string())]
    );
}

#[test]
fn case_without_marker_is_flagged() {
    let desk = desk(vec![Ok("Just a narrative.".to_string())]);
    let mut session = Session::new();

    assert_eq!(desk.new_case(&mut session).unwrap(), CaseStart::MissingDiagnosis);
    assert_eq!(session.case().unwrap().diagnosis, "");
    assert_eq!(
        session.submit_diagnosis("anything"),
        Err(SessionError::DiagnosisUnavailable)
    );
}

#[test]
fn failed_generation_leaves_previous_case_untouched() {
    let desk = desk(vec![
        Ok(CASE.to_string()),
        Err(ModelError::Transport("connection reset".to_string())),
    ]);
    let mut session = Session::new();
    desk.new_case(&mut session).unwrap();
    session.reveal().unwrap();
    let before = session.messages().to_vec();

    let err = desk.new_case(&mut session).unwrap_err();
    assert!(matches!(err, DeskError::Model(ModelError::Transport(_))));
    assert_eq!(session.messages(), before.as_slice());
    assert!(session.is_revealed());
    assert_eq!(
        session.case().unwrap().diagnosis,
        "Community-Acquired Pneumonia"
    );
}

#[test]
fn question_prompt_embeds_narrative_and_answer_is_recorded() {
    let desk = desk(vec![
        Ok(CASE.to_string()),
        Ok("Temperature 38.9 C, RR 24.".to_string()),
    ]);
    let mut session = Session::new();
    desk.new_case(&mut session).unwrap();

    let answer = desk.ask(&mut session, "What are the vitals?").unwrap();
    assert_eq!(answer, "Temperature 38.9 C, RR 24.");

    let calls = desk.model().calls.borrow();
    assert_eq!(
        calls[1],
        Call::Complete(
            "Based on this case: A 34-year-old woman presents with fever and productive cough.\n\n\
             \n\nQuestion: What are the vitals?"
                .to_string()
        )
    );

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(session.messages()[1].content, "What are the vitals?");
}

#[test]
fn failed_question_is_not_recorded() {
    let desk = desk(vec![
        Ok(CASE.to_string()),
        Err(ModelError::Status {
            status: 429,
            body: "rate limited".to_string(),
        }),
    ]);
    let mut session = Session::new();
    desk.new_case(&mut session).unwrap();

    let err = desk.ask(&mut session, "Any allergies?").unwrap_err();
    assert!(matches!(err, DeskError::Model(ModelError::Status { status: 429, .. })));
    assert_eq!(session.messages().len(), 1);
}

#[test]
fn question_without_case_does_not_call_model() {
    let desk = desk(vec![]);
    let mut session = Session::new();

    let err = desk.ask(&mut session, "Any allergies?").unwrap_err();
    assert!(matches!(err, DeskError::Session(SessionError::NoActiveCase)));
    assert!(desk.model().calls.borrow().is_empty());
}

#[test]
fn full_round_exports_pdf() {
    let desk = desk(vec![
        Ok(CASE.to_string()),
        Ok("Crackles over the right lower lobe \u{1FAC1}.".to_string()),
    ]);
    let mut session = Session::new();
    desk.new_case(&mut session).unwrap();
    desk.ask(&mut session, "Lung exam?").unwrap();
    assert_eq!(session.submit_diagnosis("pneumonia").unwrap(), Verdict::Correct);
    session.reveal().unwrap();
    assert_eq!(session.messages().len(), 6);

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("exports").join("clinical_case.pdf");
    let written = desk.export(&session, &path).unwrap();

    assert_eq!(written, path);
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
