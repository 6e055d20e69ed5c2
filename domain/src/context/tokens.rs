//! Term extraction and relevance scoring.
//!
//! Tokens are whitespace-delimited words, lowercased, with every
//! non-alphanumeric character removed. Questions and segments are
//! tokenized the same way so their terms compare directly.

use std::collections::{BTreeSet, HashSet};

/// Normalize one whitespace-delimited word into a token.
fn normalize(word: &str) -> String {
    word.chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Iterate the non-empty tokens of `text`.
pub fn tokenize(text: &str) -> impl Iterator<Item = String> + '_ {
    text.split_whitespace()
        .map(normalize)
        .filter(|token| !token.is_empty())
}

/// Distinct terms of a question, in a stable order.
pub fn question_terms(question: &str) -> BTreeSet<String> {
    tokenize(question).collect()
}

/// Number of distinct `terms` that occur in `text`.
pub fn score(text: &str, terms: &BTreeSet<String>) -> usize {
    if terms.is_empty() {
        return 0;
    }
    let present: HashSet<String> = tokenize(text).collect();
    terms.iter().filter(|term| present.contains(*term)).count()
}
