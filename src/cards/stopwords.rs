// Stopword list: words that never become a keyword, however long.
//
// The list is a plain value handed to the keyword selector rather than a
// module-level constant, so callers and tests can inject their own.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use stop_words::{get, LANGUAGE};

/// The built-in list. Kept short on purpose: it only filters the glue words
/// that would otherwise win ties against real content words.
const BUILTIN: &[&str] = &[
    "the", "is", "in", "at", "of", "a", "an", "and", "or", "to", "for", "by", "on", "with",
    "that", "this", "it", "as", "are", "was", "were", "be", "from", "which", "have", "has",
    "had", "but", "not", "they", "their", "its", "you", "we", "he", "she",
    // Lowercase so that "I" is a stopword under case-insensitive lookup.
    "i", "me", "my",
    "your", "our", "us",
];

/// A read-only, case-insensitive set of stopwords (stored lowercase).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Default for Stopwords {
    fn default() -> Self {
        Self::from_list(BUILTIN)
    }
}

impl Stopwords {
    /// Build a stopword set from an arbitrary word list.
    pub fn from_list<S: AsRef<str>>(words: &[S]) -> Self {
        Self {
            words: words
                .iter()
                .map(|w| w.as_ref().trim().to_lowercase())
                .filter(|w| !w.is_empty())
                .collect(),
        }
    }

    /// The full English list shipped with the `stop-words` crate.
    ///
    /// Much more aggressive than the built-in list, so common adverbs and
    /// auxiliaries stop winning on length alone.
    pub fn english() -> Self {
        let words: Vec<String> = get(LANGUAGE::English);
        Self::from_list(words.as_slice())
    }

    /// Load a word list from a file: one word per line, `#` starts a comment.
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read stopword list {}", path.display()))?;

        let words: Vec<&str> = raw
            .lines()
            .map(|line| line.split('#').next().unwrap_or_default())
            .collect();

        let stopwords = Self::from_list(words.as_slice());
        if stopwords.is_empty() {
            anyhow::bail!("Stopword list {} contains no words", path.display());
        }
        Ok(stopwords)
    }

    /// Case-insensitive membership test.
    pub fn contains(&self, word: &str) -> bool {
        if self.words.contains(word) {
            return true;
        }
        self.words.contains(&word.to_lowercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_case_insensitive() {
        let stopwords = Stopwords::default();
        assert!(stopwords.contains("the"));
        assert!(stopwords.contains("The"));
        assert!(stopwords.contains("THE"));
        assert!(stopwords.contains("I"));
        assert!(!stopwords.contains("photosynthesis"));
        assert_eq!(stopwords.len(), BUILTIN.len());
    }

    #[test]
    fn test_from_list_lowercases() {
        let stopwords = Stopwords::from_list(&["Cat", "  ", "MAT"]);
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("cat"));
        assert!(stopwords.contains("mat"));
    }

    #[test]
    fn test_english_is_larger_than_builtin() {
        let english = Stopwords::english();
        assert!(english.len() > Stopwords::default().len());
        assert!(english.contains("the"));
    }

    #[test]
    fn test_from_file_skips_comments_and_blanks() {
        let path = std::env::temp_dir().join("flashforge_stopwords_test.txt");
        fs::write(&path, "# custom list\nfoo\n\nBar # trailing comment\n").unwrap();

        let stopwords = Stopwords::from_file(&path).unwrap();
        assert_eq!(stopwords.len(), 2);
        assert!(stopwords.contains("foo"));
        assert!(stopwords.contains("bar"));

        let _ = fs::remove_file(&path);
    }

    #[test]
    fn test_from_file_missing_fails() {
        let result = Stopwords::from_file(Path::new("/definitely/not/here.txt"));
        assert!(result.is_err());
    }
}
