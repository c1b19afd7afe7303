//! The board: an ordered, strictly paired deal of cards.
//!
//! A board is built by duplicating a set of symbols and shuffling the
//! result. Each board carries the generation it was dealt in so delayed
//! transitions scheduled against an older board can be recognised.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardState, Symbol};
use crate::core::GameRng;

/// Ordered sequence of cards, two per symbol.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
    pair_count: usize,
    generation: u64,
}

impl Board {
    /// Deal a board: every symbol twice, then shuffled.
    ///
    /// `symbols` must be distinct for strict pairing to hold.
    #[must_use]
    pub fn deal(symbols: &[Symbol], generation: u64, rng: &mut GameRng) -> Self {
        let mut faces: Vec<Symbol> = symbols.iter().chain(symbols.iter()).cloned().collect();
        rng.shuffle(&mut faces);

        let cards = faces
            .into_iter()
            .enumerate()
            .map(|(index, face)| Card::new(index, face))
            .collect();

        Self {
            cards,
            pair_count: symbols.len(),
            generation,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the board has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.pair_count
    }

    /// Generation this board was dealt in.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Get a card by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    /// All cards in board order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// How many times each face occurs.
    #[must_use]
    pub fn face_counts(&self) -> FxHashMap<Symbol, usize> {
        let mut counts = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.face.clone()).or_insert(0) += 1;
        }
        counts
    }

    /// Every face appears exactly twice and there are `pair_count` faces.
    #[must_use]
    pub fn is_strictly_paired(&self) -> bool {
        let counts = self.face_counts();
        counts.len() == self.pair_count && counts.values().all(|&n| n == 2)
    }

    /// Check if every card has been matched.
    #[must_use]
    pub fn all_matched(&self) -> bool {
        self.cards.iter().all(Card::is_matched)
    }

    /// Set a card's state. Out-of-range indices are ignored.
    pub(crate) fn set_state(&mut self, index: usize, state: CardState) {
        if let Some(card) = self.cards.get_mut(index) {
            card.state = state;
        }
    }

    /// Reveal every card that is not already matched.
    pub(crate) fn reveal_all(&mut self) {
        for card in self.cards.iter_mut().filter(|c| !c.is_matched()) {
            card.state = CardState::Revealed;
        }
    }

    /// Hide every card that is not matched.
    pub(crate) fn hide_unmatched(&mut self) {
        for card in self.cards.iter_mut().filter(|c| !c.is_matched()) {
            card.state = CardState::Hidden;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::SymbolCatalog;

    fn deal(count: usize, seed: u64) -> Board {
        let catalog = SymbolCatalog::default();
        let mut rng = GameRng::new(seed);
        Board::deal(catalog.take(count), 1, &mut rng)
    }

    #[test]
    fn test_deal_is_strictly_paired() {
        let board = deal(6, 42);
        assert_eq!(board.len(), 12);
        assert_eq!(board.pair_count(), 6);
        assert!(board.is_strictly_paired());
    }

    #[test]
    fn test_indices_match_positions() {
        let board = deal(8, 3);
        for (i, card) in board.cards().iter().enumerate() {
            assert_eq!(card.index, i);
            assert!(card.is_hidden());
        }
    }

    #[test]
    fn test_deal_uses_catalog_prefix() {
        let catalog = SymbolCatalog::default();
        let board = deal(6, 9);
        let counts = board.face_counts();
        for symbol in catalog.take(6) {
            assert_eq!(counts.get(symbol), Some(&2));
        }
        assert!(!counts.contains_key(&Symbol::from("bi-lightning")));
    }

    #[test]
    fn test_same_seed_same_deal() {
        assert_eq!(deal(8, 11), deal(8, 11));
    }

    #[test]
    fn test_reveal_and_hide_skip_matched() {
        let mut board = deal(6, 42);
        board.set_state(0, CardState::Matched);

        board.reveal_all();
        assert_eq!(board.get(0).unwrap().state, CardState::Matched);
        assert!(board.cards()[1..].iter().all(|c| c.state == CardState::Revealed));

        board.hide_unmatched();
        assert_eq!(board.get(0).unwrap().state, CardState::Matched);
        assert!(board.cards()[1..].iter().all(Card::is_hidden));
    }

    #[test]
    fn test_all_matched() {
        let mut board = deal(6, 42);
        assert!(!board.all_matched());
        for i in 0..board.len() {
            board.set_state(i, CardState::Matched);
        }
        assert!(board.all_matched());
    }

    #[test]
    fn test_set_state_out_of_range_is_ignored() {
        let mut board = deal(6, 42);
        let before = board.clone();
        board.set_state(99, CardState::Matched);
        assert_eq!(board, before);
    }
}
