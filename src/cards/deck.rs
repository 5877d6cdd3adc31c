// Study deck: which cards are showing their answer.
//
// Revealed state is keyed by card index and lives beside the cards, so
// replacing the cards and forgetting what was revealed always happen
// together.

use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;

use super::generator::Card;

/// Which side of a card is facing up.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Face {
    Question,
    Answer,
}

/// What a renderer needs to draw one card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CardView<'a> {
    pub index: usize,
    pub face: Face,
    pub text: &'a str,
    pub revealed: bool,
}

#[derive(Debug, Clone, Default)]
pub struct Deck {
    cards: Vec<Card>,
    revealed: BTreeSet<usize>,
}

impl Deck {
    pub fn new(cards: Vec<Card>) -> Self {
        Self {
            cards,
            revealed: BTreeSet::new(),
        }
    }

    /// Swap in a freshly generated set. Old revealed markers are dropped.
    pub fn replace(&mut self, cards: Vec<Card>) {
        self.cards = cards;
        self.revealed.clear();
    }

    pub fn clear(&mut self) {
        self.replace(Vec::new());
    }

    /// Flip one card. Returns whether it is now revealed.
    pub fn toggle(&mut self, index: usize) -> Result<bool> {
        if index >= self.cards.len() {
            anyhow::bail!(
                "No card #{} — the deck has {} cards",
                index + 1,
                self.cards.len()
            );
        }

        if self.revealed.remove(&index) {
            Ok(false)
        } else {
            self.revealed.insert(index);
            Ok(true)
        }
    }

    pub fn reveal_all(&mut self) {
        self.revealed = (0..self.cards.len()).collect();
    }

    pub fn hide_all(&mut self) {
        self.revealed.clear();
    }

    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.contains(&index)
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn revealed_count(&self) -> usize {
        self.revealed.len()
    }

    /// Project the deck into renderable views, in card order.
    pub fn view(&self) -> Vec<CardView<'_>> {
        self.cards
            .iter()
            .enumerate()
            .map(|(index, card)| {
                let revealed = self.is_revealed(index);
                let (face, text) = if revealed {
                    (Face::Answer, card.answer.as_str())
                } else {
                    (Face::Question, card.question.as_str())
                };
                CardView {
                    index,
                    face,
                    text,
                    revealed,
                }
            })
            .collect()
    }
}
