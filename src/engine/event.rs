//! Events the engine emits for the presentation layer.
//!
//! Snapshots describe *where* the game is; events describe *what just
//! happened*, so a renderer can animate flips and show the win banner
//! without diffing snapshots.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Something that happened inside the engine.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum GameEvent {
    /// A fresh board was dealt.
    BoardDealt {
        difficulty: Difficulty,
        generation: u64,
    },
    /// Every card was turned face up for the preview.
    PreviewStarted,
    /// The preview ended; the board accepts picks.
    PreviewEnded,
    /// A single card was turned face up by a pick.
    CardRevealed { index: usize },
    /// Two picked cards matched.
    PairMatched { first: usize, second: usize },
    /// Two picked cards did not match.
    PairMismatched { first: usize, second: usize },
    /// A mismatched pair was turned back face down.
    CardsHidden { first: usize, second: usize },
    /// The final pair was found.
    GameWon { moves: usize },
}
