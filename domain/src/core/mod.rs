//! Core domain concepts shared across all subdomains.
//!
//! - [`model::ModelId`]: identifier of the generation model
//! - [`question::Question`]: a validated question about an agreement
//! - [`error::DomainError`]: domain-level errors
//! - [`validation`]: structured configuration issues

pub mod error;
pub mod model;
pub mod question;
pub mod string;
pub mod validation;
