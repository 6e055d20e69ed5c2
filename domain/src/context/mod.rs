//! Context assembly for grounded question answering.
//!
//! An agreement's text can be far larger than what the generation backend
//! accepts in one request. [`ContextAssembler`] reduces it to a bounded,
//! deterministic payload:
//!
//! - short documents pass through unchanged
//! - long documents are split into overlapping [`Segment`]s, scored against
//!   the question's terms, and the best ones are stitched back together in
//!   document order
//!
//! [`ContextBudget`] holds the knobs.

pub mod assembler;
pub mod context_budget;
pub mod segment;
pub mod tokens;

pub use assembler::{AssembledContext, AssemblyStrategy, ContextAssembler, EMPTY_DOCUMENT_CONTEXT};
pub use context_budget::ContextBudget;
pub use segment::{Segment, split_segments};
