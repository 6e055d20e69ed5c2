//! Presentation layer for covenant
//!
//! This crate contains CLI definitions, the HTTP API, output formatters,
//! progress indicators, and the interactive chat interface.

pub mod chat;
pub mod cli;
pub mod http;
pub mod output;
pub mod progress;

// Re-export commonly used types
pub use chat::ChatRepl;
pub use cli::commands::{Cli, Command, OutputFormat};
pub use http::{AppState, JwtAuth, build_router, serve};
pub use output::console::ConsoleFormatter;
pub use progress::spinner::AnswerSpinner;
