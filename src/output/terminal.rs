// Colored terminal output for generated cards.
//
// main.rs decides *what* to show (which face, whether anything was
// generated); this module only decides how it looks.

use colored::Colorize;

use crate::cards::deck::{CardView, Face};
use crate::cards::Card;

/// What the user sees when a paragraph produced nothing.
pub const EMPTY_HINT: &str = "Couldn't generate flashcards. Try a longer paragraph.";

/// Display every card in the deck, question or answer depending on its face.
pub fn display_cards(views: &[CardView<'_>]) {
    if views.is_empty() {
        println!("{}", "No flashcards yet.".dimmed());
        return;
    }

    for view in views {
        let label = format!("#{:<3}", view.index + 1);
        match view.face {
            Face::Question => {
                println!("  {} {}", label.bold(), "Q".bright_blue().bold());
                print_indented(view.text);
            }
            Face::Answer => {
                println!("  {} {}", label.bold(), "A".bright_green().bold());
                print_indented(&view.text.green().to_string());
            }
        }
        println!();
    }
}

/// One-line header for a freshly generated set.
pub fn display_summary(cards: &[Card], sentence_preview_chars: usize) {
    println!(
        "\n{}",
        format!("=== {} flashcards ===", cards.len()).bold()
    );
    if let Some(first) = cards.first() {
        println!(
            "  starting from: {}",
            super::truncate_chars(&first.source_sentence, sentence_preview_chars).dimmed()
        );
    }
    println!();
}

/// Study-mode status line: how many cards are flipped.
pub fn display_progress(revealed: usize, total: usize) {
    println!("  {} {}/{} revealed", "~".yellow(), revealed, total);
}

pub fn display_empty_hint() {
    eprintln!("{}", EMPTY_HINT.yellow());
}

fn print_indented(text: &str) {
    for line in text.lines() {
        println!("       {line}");
    }
}
