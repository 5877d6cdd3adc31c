// Card generation: the pipeline that ties the three stages together.
//
// segment -> (skip short) -> select keyword -> (skip empty) -> synthesize
//
// Pure and synchronous: no I/O, no shared mutable state. Running it again on
// new text simply produces a new Vec; replacing the old one is the caller's
// job (see `deck::Deck::replace`).

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::keyword::LongestWordSelector;
use super::segmenter::split_into_sentences;
use super::synthesizer::synthesize;
use super::traits::KeywordSelector;

/// Sentences shorter than this (in Unicode scalar values, after trimming) are
/// noise. Astral characters such as emoji count once each, not as two
/// UTF-16 units.
pub const DEFAULT_MIN_SENTENCE_LEN: usize = 10;

/// Default card cap when the caller doesn't pick one.
pub const DEFAULT_MAX_CARDS: usize = 50;

/// One generated flashcard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// The sentence with its keyword masked, or the generic fallback prompt
    pub question: String,
    /// The keyword, `ANSWER_SEPARATOR`, then the unmasked sentence
    pub answer: String,
    /// The sentence this card was built from, unmodified
    pub source_sentence: String,
    /// The word that was masked
    pub keyword: String,
}

/// Knobs for a generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Stop once this many cards exist. Zero means no cards.
    pub max_cards: usize,
    /// Minimum trimmed sentence length in characters
    pub min_sentence_len: usize,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            max_cards: DEFAULT_MAX_CARDS,
            min_sentence_len: DEFAULT_MIN_SENTENCE_LEN,
        }
    }
}

/// Runs the full pipeline with a pluggable keyword selector.
#[derive(Debug, Clone, Default)]
pub struct CardGenerator<S = LongestWordSelector> {
    selector: S,
    options: GenerateOptions,
}

impl<S: KeywordSelector> CardGenerator<S> {
    pub fn new(selector: S, options: GenerateOptions) -> Self {
        Self { selector, options }
    }

    pub fn options(&self) -> GenerateOptions {
        self.options
    }

    /// Turn text into cards, in sentence order, capped at `max_cards`.
    ///
    /// Never fails: empty or unusable input gives an empty Vec, and deciding
    /// how to tell the user about that is up to the caller.
    pub fn generate(&self, text: &str) -> Vec<Card> {
        let mut cards = Vec::new();

        for sentence in split_into_sentences(text) {
            if cards.len() >= self.options.max_cards {
                break;
            }

            let len = sentence.chars().count();
            if len < self.options.min_sentence_len {
                debug!(len, sentence = %sentence, "Skipping short sentence");
                continue;
            }

            let keyword = self.selector.select(&sentence);
            if keyword.is_empty() {
                debug!(sentence = %sentence, "Skipping sentence with no usable token");
                continue;
            }

            let qa = synthesize(&sentence, &keyword);
            cards.push(Card {
                question: qa.question,
                answer: qa.answer,
                source_sentence: sentence,
                keyword,
            });
        }

        debug!(cards = cards.len(), "Generated flashcards");
        cards
    }
}

/// Generate cards with the built-in stopwords and the default minimum length.
pub fn generate_cards(text: &str, max_cards: usize) -> Vec<Card> {
    let options = GenerateOptions {
        max_cards,
        ..GenerateOptions::default()
    };
    CardGenerator::new(LongestWordSelector::default(), options).generate(text)
}
