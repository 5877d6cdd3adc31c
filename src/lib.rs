// FlashForge: flashcards from prose
//
// This is the library root. `cards` holds the text pipeline
// (segment -> pick keyword -> mask), the rest is the ambient shell around it.

pub mod cards;
pub mod config;
pub mod output;
