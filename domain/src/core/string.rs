//! String utilities for the domain layer.

/// Count whitespace-delimited tokens in `text`.
///
/// An empty or whitespace-only string has zero words.
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// Truncate a string to a maximum length with ellipsis (UTF-8 safe)
///
/// Uses byte length for max_len but ensures truncation occurs at valid
/// UTF-8 character boundaries.
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_word_count_collapses_whitespace() {
        assert_eq!(word_count("Remote work  improves\n\tproductivity"), 4);
        assert_eq!(word_count("  padded  "), 1);
    }

    #[test]
    fn test_word_count_empty() {
        assert_eq!(word_count(""), 0);
        assert_eq!(word_count(" \n "), 0);
    }

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate("hello", 10), "hello");
        assert_eq!(truncate("hello world", 8), "hello...");
    }

    #[test]
    fn test_truncate_multibyte() {
        // 'é' is two bytes, the cut must back up to a char boundary
        assert_eq!(truncate("ééééé", 8), "éé...");
    }
}
