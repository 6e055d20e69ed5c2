//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod answer_question;
pub mod ask_agreement;
pub mod authorize;
pub mod conversation;

#[cfg(test)]
pub(crate) mod testing;
