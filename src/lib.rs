//! # memory-match
//!
//! Engine for a single-player card-matching memory game.
//!
//! The engine owns the board, the turn in progress, and the move and match
//! counters. A presentation layer forwards card clicks into it and renders
//! the [`Snapshot`] it produces after every operation.
//!
//! ## Design Principles
//!
//! 1. **No hidden timers**: The preview and mismatch delays are scheduled
//!    on a virtual clock the host advances. Tests drive it by hand.
//!
//! 2. **Generation tagging**: Every deal bumps a generation counter. A delayed
//!    transition only applies to the board it was scheduled for.
//!
//! 3. **Absorb bad input**: Clicks on locked, matched, or already revealed
//!    cards are no-ops, never errors.
//!
//! ## Modules
//!
//! - `core`: Difficulties, timings, configuration, deterministic RNG
//! - `cards`: Symbols, the symbol catalog, card state
//! - `board`: Paired deal and board invariants
//! - `schedule`: Virtual clock and delayed transitions
//! - `engine`: The turn state machine and read-only snapshots
//!
//! ## Example
//!
//! ```
//! use std::time::Duration;
//! use memory_match::{Difficulty, EngineConfig, MatchingEngine, Phase, SelectOutcome};
//!
//! let mut engine = MatchingEngine::new(EngineConfig::new(7)).unwrap();
//! engine.configure(Difficulty::Hard);
//! engine.start_or_restart();
//! engine.advance(Duration::from_secs(2));
//!
//! assert_eq!(engine.select_card(0), SelectOutcome::FirstPick);
//! assert_eq!(engine.phase(), Phase::AwaitingSecondPick);
//! assert_eq!(engine.snapshot().cards.len(), 16);
//! ```

pub mod board;
pub mod cards;
pub mod core;
pub mod engine;
pub mod error;
pub mod schedule;

// Re-export commonly used types
pub use crate::core::{Difficulty, EngineConfig, GameRng, GameRngState, Timings};

pub use crate::cards::{Card, CardState, Symbol, SymbolCatalog};

pub use crate::board::Board;

pub use crate::schedule::{ScheduledTransition, Scheduler, Transition};

pub use crate::engine::{
    CardView, GameEvent, IgnoreReason, MatchingEngine, Phase, SelectOutcome, Snapshot,
    EVENT_LOG_CAPACITY,
};

pub use crate::error::{ConfigError, Result};
