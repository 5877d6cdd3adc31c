use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::cards::generator::{GenerateOptions, DEFAULT_MAX_CARDS, DEFAULT_MIN_SENTENCE_LEN};
use crate::cards::stopwords::Stopwords;

/// Which stopword list the keyword selector uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StopwordSource {
    /// The short built-in list (default)
    Builtin,
    /// The full English list from the stop-words crate
    English,
    /// A word-list file, one word per line
    File(PathBuf),
}

impl StopwordSource {
    /// Parse `builtin`, `english`, or anything else as a file path.
    pub fn parse(raw: &str) -> Self {
        match raw.trim() {
            "" | "builtin" => Self::Builtin,
            "english" => Self::English,
            path => Self::File(PathBuf::from(path)),
        }
    }

    pub fn load(&self) -> Result<Stopwords> {
        match self {
            Self::Builtin => Ok(Stopwords::default()),
            Self::English => Ok(Stopwords::english()),
            Self::File(path) => Stopwords::from_file(path),
        }
    }
}

/// Central configuration loaded from environment variables.
///
/// The .env file is loaded at startup via dotenvy. Every value has a
/// default, and CLI flags override whatever is set here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Card cap per generation run (FLASHFORGE_MAX_CARDS)
    pub max_cards: usize,
    /// Shortest sentence worth a card (FLASHFORGE_MIN_SENTENCE_LEN)
    pub min_sentence_len: usize,
    /// Stopword list (FLASHFORGE_STOPWORDS)
    pub stopwords: StopwordSource,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            min_sentence_len: DEFAULT_MIN_SENTENCE_LEN,
            stopwords: StopwordSource::Builtin,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from any key lookup. `load` uses the process
    /// environment; tests pass a map.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let max_cards = match lookup("FLASHFORGE_MAX_CARDS") {
            Some(raw) => parse_positive(&raw)
                .with_context(|| format!("FLASHFORGE_MAX_CARDS is invalid: {raw:?}"))?,
            None => defaults.max_cards,
        };

        let min_sentence_len = match lookup("FLASHFORGE_MIN_SENTENCE_LEN") {
            Some(raw) => raw.trim().parse::<usize>().with_context(|| {
                format!("FLASHFORGE_MIN_SENTENCE_LEN is invalid: {raw:?}")
            })?,
            None => defaults.min_sentence_len,
        };

        let stopwords = lookup("FLASHFORGE_STOPWORDS")
            .map(|raw| StopwordSource::parse(&raw))
            .unwrap_or(defaults.stopwords);

        Ok(Self {
            max_cards,
            min_sentence_len,
            stopwords,
        })
    }

    /// Apply a `--max-cards` override, rejecting zero.
    pub fn set_max_cards(&mut self, max_cards: usize) -> Result<()> {
        if max_cards == 0 {
            anyhow::bail!("--max-cards must be at least 1");
        }
        self.max_cards = max_cards;
        Ok(())
    }

    pub fn generate_options(&self) -> GenerateOptions {
        GenerateOptions {
            max_cards: self.max_cards,
            min_sentence_len: self.min_sentence_len,
        }
    }

    pub fn stopwords(&self) -> Result<Stopwords> {
        self.stopwords.load()
    }
}

fn parse_positive(raw: &str) -> Result<usize> {
    let value: usize = raw.trim().parse()?;
    if value == 0 {
        anyhow::bail!("must be a positive integer");
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = Config::from_lookup(|_| None).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.max_cards, 50);
        assert_eq!(config.min_sentence_len, 10);
    }

    #[test]
    fn test_reads_overrides() {
        let config = Config::from_lookup(lookup_from(&[
            ("FLASHFORGE_MAX_CARDS", "5"),
            ("FLASHFORGE_MIN_SENTENCE_LEN", "20"),
            ("FLASHFORGE_STOPWORDS", "english"),
        ]))
        .unwrap();
        assert_eq!(config.max_cards, 5);
        assert_eq!(config.min_sentence_len, 20);
        assert_eq!(config.stopwords, StopwordSource::English);
    }

    #[test]
    fn test_rejects_zero_max_cards() {
        let result = Config::from_lookup(lookup_from(&[("FLASHFORGE_MAX_CARDS", "0")]));
        assert!(result.is_err());

        let mut config = Config::default();
        assert!(config.set_max_cards(0).is_err());
        assert_eq!(config.max_cards, 50);
    }

    #[test]
    fn test_rejects_garbage() {
        let result = Config::from_lookup(lookup_from(&[("FLASHFORGE_MAX_CARDS", "lots")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_stopword_source_parse() {
        assert_eq!(StopwordSource::parse("builtin"), StopwordSource::Builtin);
        assert_eq!(StopwordSource::parse(""), StopwordSource::Builtin);
        assert_eq!(StopwordSource::parse("english"), StopwordSource::English);
        assert_eq!(
            StopwordSource::parse("./words.txt"),
            StopwordSource::File(PathBuf::from("./words.txt"))
        );
    }
}
