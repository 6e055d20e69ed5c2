//! Port definitions (interfaces for external dependencies)
//!
//! Ports define the interfaces that adapters must implement.
//! This follows the Hexagonal Architecture pattern.

pub mod agreement_repository;
pub mod llm_gateway;
pub mod question_answerer;
