// Output formatting: terminal display and Markdown study sheets.

pub mod markdown;
pub mod terminal;

/// Shorten `text` to `max_chars` characters, marking the cut with "...".
///
/// Counts characters, not bytes, so accented letters and emoji never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate_chars("chlorophyll", 20), "chlorophyll");
        assert_eq!(truncate_chars("exact", 5), "exact");
    }

    #[test]
    fn test_truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("café au lait", 4), "café...");
    }
}
