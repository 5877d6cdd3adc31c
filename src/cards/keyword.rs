// Longest-word keyword selection.
//
// A deliberately crude salience heuristic: after stripping punctuation, the
// longest token that is not a stopword wins. No frequency analysis, no
// grammar. Ties go to the leftmost token, because the scan only replaces the
// current best on a strictly greater length.

use std::sync::LazyLock;

use regex_lite::Regex;

use super::stopwords::Stopwords;
use super::traits::KeywordSelector;

/// Quoting, bracket and clause punctuation removed from the whole sentence
/// before it is split into words.
static SENTENCE_PUNCTUATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"["'()\[\],;:]"#).expect("sentence punctuation pattern is a valid regex")
});

/// Anything a token may not contain.
static NON_TOKEN_CHAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^a-zA-Z0-9_-]").expect("token character pattern is a valid regex")
});

/// Split a sentence into cleaned tokens, in sentence order.
///
/// Tokens keep only ASCII letters, digits, `_` and `-`; words that clean down
/// to nothing are dropped.
pub fn tokenize(sentence: &str) -> Vec<String> {
    let stripped = SENTENCE_PUNCTUATION.replace_all(sentence, "");
    stripped
        .split_whitespace()
        .map(|word| NON_TOKEN_CHAR.replace_all(word, "").into_owned())
        .filter(|token| !token.is_empty())
        .collect()
}

/// Picks the longest non-stopword token, falling back to the first token.
#[derive(Debug, Clone, Default)]
pub struct LongestWordSelector {
    pub stopwords: Stopwords,
}

impl LongestWordSelector {
    pub fn new(stopwords: Stopwords) -> Self {
        Self { stopwords }
    }
}

impl KeywordSelector for LongestWordSelector {
    fn select(&self, sentence: &str) -> String {
        let tokens = tokenize(sentence);

        let mut best: Option<&String> = None;
        let mut best_len = 0;
        for token in &tokens {
            if self.stopwords.contains(token) {
                continue;
            }
            let len = token.chars().count();
            if len > best_len {
                best = Some(token);
                best_len = len;
            }
        }

        // All stopwords: a stopword keyword still beats no card at all.
        best.or_else(|| tokens.first()).cloned().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_strips_punctuation() {
        assert_eq!(
            tokenize("The cat sat on the mat."),
            vec!["The", "cat", "sat", "on", "the", "mat"]
        );
        assert_eq!(
            tokenize("\"Quoted\" (bracketed) [list], a; b: c!"),
            vec!["Quoted", "bracketed", "list", "a", "b", "c"]
        );
    }

    #[test]
    fn test_tokenize_keeps_hyphen_and_underscore() {
        assert_eq!(tokenize("well-known snake_case"), vec!["well-known", "snake_case"]);
    }

    #[test]
    fn test_tokenize_drops_symbol_only_words() {
        assert_eq!(tokenize("one -- ... two"), vec!["one", "--", "two"]);
        assert!(tokenize("... !!! ???").is_empty());
    }

    #[test]
    fn test_leftmost_wins_ties() {
        let selector = LongestWordSelector::default();
        assert_eq!(selector.select("The cat sat on the mat."), "cat");
    }

    #[test]
    fn test_longest_wins() {
        let selector = LongestWordSelector::default();
        assert_eq!(selector.select("Water boils at 100 degrees."), "degrees");
    }

    #[test]
    fn test_all_stopwords_falls_back_to_first() {
        let selector = LongestWordSelector::default();
        assert_eq!(selector.select("The is a"), "The");
    }

    #[test]
    fn test_no_tokens_is_empty() {
        let selector = LongestWordSelector::default();
        assert_eq!(selector.select(""), "");
        assert_eq!(selector.select("?! ... ,;"), "");
    }

    #[test]
    fn test_injected_stopwords() {
        let selector = LongestWordSelector::new(Stopwords::from_list(&["cat"]));
        assert_eq!(selector.select("The cat sat on the mat."), "The");
    }
}
