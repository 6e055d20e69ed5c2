//! Prompt domain
//!
//! Renders the grounded question-answering prompt sent to the generation backend.

mod template;

pub use template::{PromptTemplate, REFUSAL_SENTENCE};
