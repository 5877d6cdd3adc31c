// Keyword selector trait: swap-ready abstraction.
//
// The generator only needs "give me the word to blank out". The default
// implementation is the longest-non-stopword heuristic, but a smarter picker
// can slot in here without touching segmentation or masking.

/// Trait for choosing the single word of a sentence to mask.
pub trait KeywordSelector {
    /// Pick the keyword for one sentence. An empty string means the sentence
    /// has no usable token and should not become a card.
    fn select(&self, sentence: &str) -> String;
}
