//! Card instances - one board position each.

use serde::{Deserialize, Serialize};

use super::symbol::Symbol;

/// Visibility state of a card.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CardState {
    /// Face down.
    #[default]
    Hidden,
    /// Face up, not yet resolved (pending pick or preview).
    Revealed,
    /// Face up permanently; part of a found pair.
    Matched,
}

/// A card on the board.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    /// Board position; stable for the lifetime of the board.
    pub index: usize,

    /// Face value used for match comparison.
    pub face: Symbol,

    /// Current visibility.
    pub state: CardState,
}

impl Card {
    /// Create a face-down card.
    #[must_use]
    pub fn new(index: usize, face: Symbol) -> Self {
        Self {
            index,
            face,
            state: CardState::Hidden,
        }
    }

    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.state == CardState::Hidden
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.state == CardState::Matched
    }

    /// Does this card share a face with `other`?
    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.index != other.index && self.face == other.face
    }
}
