// Question synthesis: blank out the keyword, pair it with the answer.
//
// The keyword comes from a punctuation-stripped copy of the sentence, so its
// surface form is not guaranteed to appear verbatim ("Earth's" -> "Earths").
// When the masked match fails the question degrades to a generic prompt
// rather than an error.

use regex_lite::Regex;
use serde::{Deserialize, Serialize};

/// Replaces the keyword in the question text.
pub const MASK: &str = "____";

/// Lead-in of the generic question used when the keyword can't be located.
pub const FALLBACK_PROMPT: &str = "What is the key term? — ";

/// Sits between the keyword and the full sentence in every answer.
pub const ANSWER_SEPARATOR: &str = " — ";

/// A question and its answer, before being attached to a card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionAnswer {
    pub question: String,
    pub answer: String,
}

/// Build the masked question and the answer for one sentence.
///
/// The answer is always the keyword, `ANSWER_SEPARATOR`, then the sentence,
/// whichever question form is used.
pub fn synthesize(sentence: &str, keyword: &str) -> QuestionAnswer {
    let question = mask_first(sentence, keyword)
        .unwrap_or_else(|| format!("{FALLBACK_PROMPT}\n\n{sentence}"));

    QuestionAnswer {
        question,
        answer: format!("{keyword}{ANSWER_SEPARATOR}{sentence}"),
    }
}

/// Replace the first case-insensitive literal occurrence of `keyword`.
///
/// Returns `None` when there is nothing to mask, including the degenerate
/// case where masking leaves the sentence unchanged.
fn mask_first(sentence: &str, keyword: &str) -> Option<String> {
    if keyword.is_empty() {
        return None;
    }

    let pattern = Regex::new(&format!("(?i){}", regex_lite::escape(keyword))).ok()?;
    let found = pattern.find(sentence)?;

    let mut question = String::with_capacity(sentence.len());
    question.push_str(&sentence[..found.start()]);
    question.push_str(MASK);
    question.push_str(&sentence[found.end()..]);

    (question != sentence).then_some(question)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masks_first_occurrence_only() {
        let qa = synthesize("Degrees matter. Many degrees.", "degrees");
        assert_eq!(qa.question, "____ matter. Many degrees.");
        assert_eq!(qa.answer, "degrees — Degrees matter. Many degrees.");
    }

    #[test]
    fn test_masks_inside_word() {
        // Literal substring match, not a word-boundary match.
        let qa = synthesize("Catalysts speed things up.", "cat");
        assert_eq!(qa.question, "____alysts speed things up.");
    }

    #[test]
    fn test_regex_metacharacters_are_literal() {
        let qa = synthesize("A well-known fact.", "well-known");
        assert_eq!(qa.question, "A ____ fact.");

        let qa = synthesize("Prices rose 1+1 percent.", "1+1");
        assert_eq!(qa.question, "Prices rose ____ percent.");
    }

    #[test]
    fn test_fallback_when_not_found() {
        let qa = synthesize("Earth's orbit is elliptical.", "Earths");
        assert_eq!(
            qa.question,
            "What is the key term? — \n\nEarth's orbit is elliptical."
        );
        assert_eq!(qa.answer, "Earths — Earth's orbit is elliptical.");
    }

    #[test]
    fn test_fallback_when_mask_is_a_no_op() {
        let qa = synthesize("Fill in ____ here.", "____");
        assert!(qa.question.starts_with(FALLBACK_PROMPT));
    }

    #[test]
    fn test_empty_keyword_falls_back() {
        let qa = synthesize("Nothing to mask here.", "");
        assert!(qa.question.starts_with(FALLBACK_PROMPT));
        assert_eq!(qa.answer, " — Nothing to mask here.");
    }
}
