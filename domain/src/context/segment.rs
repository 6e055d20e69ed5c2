//! Splitting long documents into overlapping segments.

use super::context_budget::ContextBudget;
use crate::core::string::char_boundaries;

/// A contiguous slice of a document, addressed by char offsets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// Char offset of the first character
    pub start: usize,
    /// Char offset one past the last character
    pub end: usize,
    pub text: &'a str,
}

impl Segment<'_> {
    pub fn char_len(&self) -> usize {
        self.end - self.start
    }
}

/// Char offsets just past every blank line (`"\n\n"`) in `text`.
fn paragraph_breaks(text: &str) -> Vec<usize> {
    let mut breaks = Vec::new();
    let mut prev_newline = false;
    for (i, c) in text.chars().enumerate() {
        let is_newline = c == '\n';
        if is_newline && prev_newline {
            breaks.push(i + 1);
        }
        prev_newline = is_newline;
    }
    breaks
}

/// Split `text` into segments of at most `segment_size` chars.
///
/// Each segment ends at the last paragraph break inside the second half of
/// its window, or exactly at the window end when there is none. The next
/// segment starts `overlap_size` chars before the previous end, and always
/// at least one char after the previous start.
pub fn split_segments<'a>(text: &'a str, budget: &ContextBudget) -> Vec<Segment<'a>> {
    let bounds = char_boundaries(text);
    let total = bounds.len() - 1;
    if total == 0 {
        return Vec::new();
    }

    let size = budget.segment_size().max(1);
    let overlap = budget.overlap_size().min(size - 1);
    let breaks = paragraph_breaks(text);

    let mut segments = Vec::new();
    let mut start = 0;
    loop {
        let target = (start + size).min(total);
        let end = if target == total {
            total
        } else {
            let min_end = start + (size / 2).max(1);
            // last break <= target
            let idx = breaks.partition_point(|&b| b <= target);
            match idx.checked_sub(1).map(|i| breaks[i]) {
                Some(b) if b >= min_end => b,
                _ => target,
            }
        };

        segments.push(Segment {
            start,
            end,
            text: &text[bounds[start]..bounds[end]],
        });

        if end == total {
            break;
        }
        start = end.saturating_sub(overlap).max(start + 1);
    }
    segments
}
