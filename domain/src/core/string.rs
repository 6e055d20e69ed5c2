//! String utilities for the domain layer.
//!
//! Lengths used by context assembly are counted in `char`s, so these
//! helpers translate between char offsets and byte offsets.

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries. Intended for log previews.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        let target = max_len.saturating_sub(3);
        let mut end = target.min(s.len());
        while end > 0 && !s.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...", &s[..end])
    }
}

/// Return the first `max_chars` characters of `s`.
pub fn take_chars(s: &str, max_chars: usize) -> &str {
    match s.char_indices().nth(max_chars) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

/// Byte offset of every char boundary in `s`, including `s.len()`.
///
/// Index `i` of the result is the byte offset of char `i`.
pub fn char_boundaries(s: &str) -> Vec<usize> {
    let mut offsets: Vec<usize> = s.char_indices().map(|(idx, _)| idx).collect();
    offsets.push(s.len());
    offsets
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is two bytes
        assert_eq!(truncate("café au lait", 20), "café au lait");
        assert_eq!(truncate("éééééé", 8), "éé...");
    }

    #[test]
    fn test_take_chars() {
        assert_eq!(take_chars("hello", 3), "hel");
        assert_eq!(take_chars("hello", 10), "hello");
        assert_eq!(take_chars("héllo", 2), "hé");
        assert_eq!(take_chars("", 2), "");
    }

    #[test]
    fn test_char_boundaries() {
        assert_eq!(char_boundaries("ab"), vec![0, 1, 2]);
        assert_eq!(char_boundaries("é!"), vec![0, 2, 3]);
        assert_eq!(char_boundaries(""), vec![0]);
    }
}
