//! Matching-game engine: turn state machine, win detection, snapshots.
//!
//! ## Phases
//!
//! ```text
//! Idle --(preview elapses)--> AwaitingFirstPick
//! AwaitingFirstPick --(pick)--> AwaitingSecondPick
//! AwaitingSecondPick --(match)--> AwaitingFirstPick | Won (last pair)
//! AwaitingSecondPick --(mismatch)--> Resolving
//! Resolving --(delay elapses)--> AwaitingFirstPick
//! any --(configure / start_or_restart)--> Idle
//! ```
//!
//! `Idle` and `Resolving` lock input. Delays are scheduled on a virtual
//! clock and tagged with the board generation; see [`crate::schedule`].

mod event;
mod matching;
mod phase;
mod snapshot;

pub use event::GameEvent;
pub use matching::{MatchingEngine, EVENT_LOG_CAPACITY};
pub use phase::{IgnoreReason, Phase, SelectOutcome};
pub use snapshot::{CardView, Snapshot};
