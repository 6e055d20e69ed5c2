//! Infrastructure layer for covenant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod gemini;
pub mod store;

// Re-export commonly used types
pub use config::{ConfigError, ConfigLoader, FileConfig};
pub use gemini::{GeminiConfig, GeminiError, GeminiGateway};
pub use store::{InMemoryAgreementStore, JsonAgreementStore, StoreError};
