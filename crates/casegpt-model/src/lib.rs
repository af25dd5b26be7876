//! casegpt-model
//!
//! Language-model access for case generation and case questions: the
//! [`client::CaseModel`] seam, prompt templates, and the OpenAI-compatible
//! and Bedrock backends.

pub mod bedrock;
pub mod client;
pub mod error;
pub mod openai;
pub mod prompts;
