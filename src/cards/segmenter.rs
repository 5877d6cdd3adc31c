// Sentence segmentation.
//
// Newline runs are folded into a single space first so a paragraph break
// never produces an empty sentence. A boundary is a `.`, `?` or `!` followed
// by whitespace; the terminator stays with the sentence it ends.

use std::sync::LazyLock;

use regex_lite::Regex;

static NEWLINE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n+").expect("newline pattern is a valid regex"));

/// regex-lite's `\s` is ASCII-only, so the Unicode spaces (NBSP, em space,
/// ideographic space, ...) are listed explicitly.
const WHITESPACE_CLASS: &str = "[\t\n\u{0B}\u{0C}\r \u{85}\u{A0}\u{1680}\u{2000}-\u{200A}\u{2028}\u{2029}\u{202F}\u{205F}\u{3000}\u{FEFF}]";

static BOUNDARY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!("[.?!]{WHITESPACE_CLASS}+")).expect("boundary pattern is a valid regex")
});

/// Split raw text into an ordered list of trimmed, non-empty sentences.
///
/// Text without any terminal punctuation comes back as a single sentence.
pub fn split_into_sentences(text: &str) -> Vec<String> {
    let joined = NEWLINE_RUN.replace_all(text, " ");

    let mut sentences = Vec::new();
    let mut start = 0;
    for boundary in BOUNDARY.find_iter(&joined) {
        // Terminators are single-byte ASCII, so +1 keeps it on this side.
        push_trimmed(&mut sentences, &joined[start..boundary.start() + 1]);
        start = boundary.end();
    }
    push_trimmed(&mut sentences, &joined[start..]);

    sentences
}

fn push_trimmed(sentences: &mut Vec<String>, piece: &str) {
    let trimmed = piece.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
}
