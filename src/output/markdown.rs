// Markdown study sheet: one section per card, question then answer.
//
// The answer sits in a <details> block so the sheet can be used for
// self-testing when rendered.

use std::fmt::Write as _;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::cards::Card;

/// Render cards as a Markdown document.
pub fn render_deck(cards: &[Card]) -> String {
    let mut md = String::new();
    md.push_str("# Flashcards\n\n");

    if cards.is_empty() {
        md.push_str("_No flashcards were generated._\n");
        return md;
    }

    for (i, card) in cards.iter().enumerate() {
        // Writing into a String can't fail.
        let _ = writeln!(md, "## Card {}\n", i + 1);
        for line in card.question.lines() {
            if line.is_empty() {
                md.push_str(">\n");
            } else {
                let _ = writeln!(md, "> {line}");
            }
        }
        md.push('\n');
        let _ = writeln!(
            md,
            "<details><summary>Answer</summary>\n\n**{}**: {}\n\n</details>\n",
            card.keyword, card.source_sentence
        );
    }

    md
}

/// Write the Markdown study sheet to `path`.
pub fn write_deck(path: &Path, cards: &[Card]) -> Result<()> {
    fs::write(path, render_deck(cards))
        .with_context(|| format!("Failed to write study sheet to {}", path.display()))?;
    info!(path = %path.display(), cards = cards.len(), "Wrote Markdown study sheet");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::generate_cards;

    #[test]
    fn test_render_empty() {
        let md = render_deck(&[]);
        assert!(md.contains("No flashcards were generated"));
    }

    #[test]
    fn test_render_cards() {
        let cards = generate_cards("Water boils at 100 degrees. It freezes at 0 degrees.", 10);
        let md = render_deck(&cards);

        assert!(md.contains("## Card 1"));
        assert!(md.contains("## Card 2"));
        assert!(md.contains("> Water boils at 100 ____."));
        assert!(md.contains("**degrees**: Water boils at 100 degrees."));
    }

    #[test]
    fn test_render_fallback_question_keeps_blank_line() {
        let cards = generate_cards("Shakespeare's masterpiece endures.", 10);
        let md = render_deck(&cards);
        assert!(md.contains("> What is the key term? — \n>\n> Shakespeare's masterpiece endures."));
    }
}
