//! Read-only view of the engine for rendering.

use serde::{Deserialize, Serialize};

use super::phase::Phase;
use crate::cards::{Card, CardState, Symbol};
use crate::core::Difficulty;

/// One card as the presentation layer may see it.
///
/// Hidden cards never expose their face.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub index: usize,
    pub face: Option<Symbol>,
    pub state: CardState,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        let face = match card.state {
            CardState::Hidden => None,
            CardState::Revealed | CardState::Matched => Some(card.face.clone()),
        };
        Self {
            index: card.index,
            face,
            state: card.state,
        }
    }
}

/// Everything a renderer needs after an operation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub difficulty: Difficulty,

    /// Grid layout as `(columns, rows)`.
    pub grid: (usize, usize),

    pub layout_class: String,

    pub phase: Phase,

    /// True while the post-start preview is running.
    pub previewing: bool,

    /// False after a difficulty change until the next start.
    pub started: bool,

    pub cards: Vec<CardView>,

    pub move_count: usize,

    pub matched_pair_count: usize,

    pub pair_count: usize,

    /// Set once the game is won.
    pub final_moves: Option<usize>,

    pub generation: u64,
}

impl Snapshot {
    /// Should the renderer enable card clicks?
    #[must_use]
    pub fn input_enabled(&self) -> bool {
        self.phase.accepts_input()
    }

    /// Should the win banner be shown?
    #[must_use]
    pub fn is_won(&self) -> bool {
        self.phase == Phase::Won
    }
}
