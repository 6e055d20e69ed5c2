//! Bounded, deterministic context assembly.

use super::context_budget::ContextBudget;
use super::segment::{Segment, split_segments};
use super::tokens::{question_terms, score};
use crate::core::string::{char_boundaries, take_chars};
use std::cmp::Reverse;

/// Context sent in place of an empty agreement.
pub const EMPTY_DOCUMENT_CONTEXT: &str = "[The document is empty.]";

/// Placed between non-contiguous excerpts of a long document.
const EXCERPT_SEPARATOR: &str = "\n[...]\n";

/// How the context was produced, for logging and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyStrategy {
    /// The document was empty; the sentinel was used.
    Empty,
    /// The document fit the budget and was passed through unchanged.
    Full,
    /// The document was segmented and the best segments were kept.
    Excerpts {
        segments_total: usize,
        segments_selected: usize,
        spans: usize,
    },
}

/// Result of [`ContextAssembler::assemble`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssembledContext {
    pub text: String,
    pub strategy: AssemblyStrategy,
}

impl AssembledContext {
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

/// Reduces an agreement's text plus a question to a bounded context.
///
/// Pure: the same text, question and budget always produce byte-identical
/// output.
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextAssembler {
    budget: ContextBudget,
}

impl ContextAssembler {
    pub fn new(budget: ContextBudget) -> Self {
        Self { budget }
    }

    pub fn budget(&self) -> &ContextBudget {
        &self.budget
    }

    pub fn assemble(&self, text: &str, question: &str) -> AssembledContext {
        if text.is_empty() {
            return AssembledContext {
                text: EMPTY_DOCUMENT_CONTEXT.to_string(),
                strategy: AssemblyStrategy::Empty,
            };
        }

        let max_chars = self.budget.max_context_chars();
        if text.chars().count() <= max_chars {
            return AssembledContext {
                text: text.to_string(),
                strategy: AssemblyStrategy::Full,
            };
        }

        let segments = split_segments(text, &self.budget);
        let selected = self.select(&segments, question);
        let spans = merge_spans(&selected);
        let assembled = join_spans(text, &spans, max_chars);

        AssembledContext {
            strategy: AssemblyStrategy::Excerpts {
                segments_total: segments.len(),
                segments_selected: selected.len(),
                spans: assembled.1,
            },
            text: assembled.0,
        }
    }

    /// Pick the `top_k` best segments, returned in document order.
    fn select<'s, 'a>(&self, segments: &'s [Segment<'a>], question: &str) -> Vec<&'s Segment<'a>> {
        let terms = question_terms(question);
        let mut ranked: Vec<(usize, &Segment<'a>)> = segments
            .iter()
            .map(|segment| (score(segment.text, &terms), segment))
            .collect();
        // Higher score first; earlier segment wins ties
        ranked.sort_by_key(|(score, segment)| (Reverse(*score), segment.start));
        ranked.truncate(self.budget.top_k());

        let mut selected: Vec<&Segment<'a>> = ranked.into_iter().map(|(_, s)| s).collect();
        selected.sort_by_key(|segment| segment.start);
        selected
    }
}

/// Merge segments (already in document order) whose spans overlap or touch.
fn merge_spans(selected: &[&Segment<'_>]) -> Vec<(usize, usize)> {
    let mut spans: Vec<(usize, usize)> = Vec::with_capacity(selected.len());
    for segment in selected {
        match spans.last_mut() {
            Some(last) if segment.start <= last.1 => last.1 = last.1.max(segment.end),
            _ => spans.push((segment.start, segment.end)),
        }
    }
    spans
}

/// Concatenate spans within `max_chars`, dropping trailing spans that do not fit.
///
/// Returns the text and the number of spans it contains.
fn join_spans(text: &str, spans: &[(usize, usize)], max_chars: usize) -> (String, usize) {
    let bounds = char_boundaries(text);
    let separator_len = EXCERPT_SEPARATOR.chars().count();
    let mut out = String::new();
    let mut used = 0;
    let mut count = 0;

    for &(start, end) in spans {
        let span_text = &text[bounds[start]..bounds[end]];
        if count == 0 {
            let piece = take_chars(span_text, max_chars);
            out.push_str(piece);
            used = piece.chars().count();
            count = 1;
            continue;
        }
        let len = end - start;
        if used + separator_len + len > max_chars {
            break;
        }
        out.push_str(EXCERPT_SEPARATOR);
        out.push_str(span_text);
        used += separator_len + len;
        count += 1;
    }
    (out, count)
}
