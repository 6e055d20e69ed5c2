//! Interactive chat module
//!
//! Provides a line-editor based conversation about one agreement.

mod repl;

pub use repl::ChatRepl;
