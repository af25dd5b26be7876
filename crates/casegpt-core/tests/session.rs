use casegpt_core::error::SessionError;
use casegpt_core::models::case::Case;
use casegpt_core::models::message::{Message, Role};
use casegpt_core::session::{CaseState, Session, Verdict};

fn pneumonia_case() -> Case {
    Case {
        narrative: "A 34-year-old woman presents with fever and cough.\n".to_string(),
        diagnosis: "Community-Acquired Pneumonia".to_string(),
    }
}

#[test]
fn new_session_has_no_case() {
    let session = Session::new();
    assert_eq!(session.state(), &CaseState::NoCase);
    assert!(session.messages().is_empty());
    assert!(session.case().is_none());
    assert!(!session.is_revealed());
}

#[test]
fn start_case_resets_transcript_to_narrative() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());
    session.record_exchange("Any travel?", "No recent travel.").unwrap();
    session.reveal().unwrap();

    let next = Case {
        narrative: "A 70-year-old man with unilateral leg swelling.".to_string(),
        diagnosis: "Deep vein thrombosis".to_string(),
    };
    session.start_case(next.clone());

    assert_eq!(session.messages(), &[Message::assistant(next.narrative.clone())]);
    assert_eq!(session.case(), Some(&next));
    assert!(!session.is_revealed());
}

#[test]
fn questions_require_an_active_case() {
    let mut session = Session::new();
    let err = session.record_exchange("What is the BP?", "120/80").unwrap_err();
    assert_eq!(err, SessionError::NoActiveCase);
    assert!(session.messages().is_empty());
}

#[test]
fn exchange_appends_question_then_answer() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());
    session.record_exchange("Temperature?", "38.9 C").unwrap();

    let roles: Vec<Role> = session.messages().iter().map(|m| m.role).collect();
    assert_eq!(roles, vec![Role::Assistant, Role::User, Role::Assistant]);
    assert_eq!(session.messages()[1].content, "Temperature?");
    assert_eq!(session.messages()[2].content, "38.9 C");
}

#[test]
fn correct_submission_appends_feedback() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());

    let verdict = session.submit_diagnosis("pneumonia").unwrap();
    assert_eq!(verdict, Verdict::Correct);

    let messages = session.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[1], Message::user("Diagnosis Submitted: pneumonia"));
    assert_eq!(messages[2].role, Role::Assistant);
    assert!(messages[2].content.starts_with("Your diagnosis: pneumonia\n\n"));
    assert!(messages[2].content.contains("Correct! Well done!"));
}

#[test]
fn incorrect_submission_appends_feedback() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());

    let verdict = session.submit_diagnosis("influenza").unwrap();
    assert_eq!(verdict, Verdict::Incorrect);
    assert!(
        session.messages()[2]
            .content
            .contains("Incorrect. Keep analyzing the case.")
    );
}

#[test]
fn blank_guess_is_rejected_without_appending() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());

    assert_eq!(session.submit_diagnosis("   "), Err(SessionError::EmptyGuess));
    assert_eq!(session.messages().len(), 1);
}

#[test]
fn guess_without_case_is_rejected() {
    let mut session = Session::new();
    assert_eq!(session.submit_diagnosis("asthma"), Err(SessionError::NoActiveCase));
}

#[test]
fn case_without_diagnosis_refuses_judging_and_reveal() {
    let mut session = Session::new();
    session.start_case(Case {
        narrative: "Narrative only.".to_string(),
        diagnosis: String::new(),
    });

    assert_eq!(
        session.submit_diagnosis("anything"),
        Err(SessionError::DiagnosisUnavailable)
    );
    assert_eq!(session.reveal(), Err(SessionError::DiagnosisUnavailable));
    assert_eq!(session.messages().len(), 1);
    assert!(!session.is_revealed());
}

#[test]
fn reveal_sets_flag_and_appends_diagnosis() {
    let mut session = Session::new();
    session.start_case(pneumonia_case());

    let diagnosis = session.reveal().unwrap();
    assert_eq!(diagnosis, "Community-Acquired Pneumonia");
    assert!(session.is_revealed());
    assert_eq!(
        session.messages().last(),
        Some(&Message::assistant(
            "Correct Diagnosis: Community-Acquired Pneumonia"
        ))
    );
}

#[test]
fn reveal_without_case_fails() {
    let mut session = Session::new();
    assert_eq!(session.reveal(), Err(SessionError::NoActiveCase));
}

#[test]
fn role_serializes_snake_case() {
    let json = serde_json::to_string(&Message::assistant("hi")).unwrap();
    assert_eq!(json, r#"{"role":"assistant","content":"hi"}"#);
    assert_eq!(Role::User.to_string(), "User");
}
