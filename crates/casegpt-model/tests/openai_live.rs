//! Integration test against a real OpenAI-compatible endpoint.
//!
//! Requires `OPENAI_API_KEY` in the environment.
//!
//! Run with: `cargo test -p casegpt-model --test openai_live -- --ignored`

use casegpt_core::parse::parse_case;
use casegpt_model::client::CaseModel;
use casegpt_model::openai::{OpenAiModel, OpenAiSettings};
use casegpt_model::prompts::CASE_SYSTEM_PROMPT;

#[test]
#[ignore]
fn generates_a_parseable_case() {
    let api_key = std::env::var("OPENAI_API_KEY").expect("OPENAI_API_KEY not set");
    let model = OpenAiModel::new(OpenAiSettings::new(api_key));

    let completion = model.generate(CASE_SYSTEM_PROMPT).expect("generate failed");
    println!("{completion}");

    let parsed = parse_case(&completion);
    assert!(parsed.marker_found, "model omitted the diagnosis marker");
    assert!(!parsed.diagnosis.is_empty());
}
