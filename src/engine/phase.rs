//! Engine phases and the result of a card selection.

use serde::{Deserialize, Serialize};

/// High-level engine phase.
///
/// `Idle` covers both the pre-start state and the timed preview; use
/// `MatchingEngine::is_previewing` to tell them apart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Board dealt, input locked.
    #[default]
    Idle,
    /// Waiting for the first card of a turn.
    AwaitingFirstPick,
    /// One card pending; waiting for the second.
    AwaitingSecondPick,
    /// A mismatched pair is on display; input locked until it flips back.
    Resolving,
    /// Every pair found. Terminal until the board is rebuilt.
    Won,
}

impl Phase {
    /// Does this phase accept card selections?
    #[must_use]
    pub const fn accepts_input(self) -> bool {
        matches!(self, Phase::AwaitingFirstPick | Phase::AwaitingSecondPick)
    }
}

/// Why a selection was absorbed without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IgnoreReason {
    /// The engine is idle, previewing, resolving, or won.
    Locked,
    /// No card at that index.
    OutOfRange,
    /// The card is already part of a found pair.
    AlreadyMatched,
    /// The card is already face up (the pending first pick).
    AlreadyRevealed,
}

/// What a call to `select_card` did.
///
/// This is informational only. `Ignored` selections leave the engine
/// exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectOutcome {
    /// Nothing changed.
    Ignored(IgnoreReason),
    /// First card of a turn revealed.
    FirstPick,
    /// Second card matched the first. `won` is set on the final pair.
    Matched { won: bool },
    /// Second card did not match; the pair flips back after a delay.
    Mismatched,
}

impl SelectOutcome {
    /// Did the selection change engine state?
    #[must_use]
    pub const fn is_effective(self) -> bool {
        !matches!(self, SelectOutcome::Ignored(_))
    }
}
