//! Delayed transitions on a manually advanced virtual clock.
//!
//! The engine never sleeps or registers callbacks. Instead, when it needs
//! a delay (the preview reveal, the mismatch re-hide) it schedules a
//! `Transition` due at `now + delay`, tagged with the generation of the
//! board it belongs to. The host advances the clock, by real elapsed time
//! in production or by hand in tests, and the engine applies whatever has
//! come due.
//!
//! ```
//! use std::time::Duration;
//! use memory_match::schedule::{Scheduler, Transition};
//!
//! let mut scheduler = Scheduler::new();
//! scheduler.schedule(Duration::from_millis(1000), 1, Transition::EndPreview);
//!
//! scheduler.advance(Duration::from_millis(999));
//! assert!(scheduler.pop_due().is_none());
//!
//! scheduler.advance(Duration::from_millis(1));
//! assert_eq!(scheduler.pop_due().unwrap().transition, Transition::EndPreview);
//! ```

use std::time::Duration;

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// A state change the engine applies once its delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Transition {
    /// Hide all unmatched cards and open the board for picks.
    EndPreview,

    /// Flip a mismatched pair back face down and unlock the board.
    HideMismatch { first: usize, second: usize },
}

/// A transition waiting on the clock.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledTransition {
    /// Virtual time at which the transition becomes due.
    pub due: Duration,

    /// Board generation at schedule time.
    pub generation: u64,

    /// What to do.
    pub transition: Transition,

    /// Insertion order, breaks ties between equal `due` times.
    seq: u64,
}

/// Queue of pending transitions plus the virtual clock.
///
/// At most a couple of transitions are ever pending at once, so the
/// queue lives inline.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Scheduler {
    now: Duration,
    pending: SmallVec<[ScheduledTransition; 2]>,
    next_seq: u64,
}

impl Scheduler {
    /// Create a scheduler with the clock at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `transition` to become due after `delay`.
    pub fn schedule(&mut self, delay: Duration, generation: u64, transition: Transition) {
        let entry = ScheduledTransition {
            due: self.now + delay,
            generation,
            transition,
            seq: self.next_seq,
        };
        self.next_seq += 1;
        self.pending.push(entry);
    }

    /// Move the clock forward.
    pub fn advance(&mut self, elapsed: Duration) {
        self.now += elapsed;
    }

    /// Remove and return the earliest transition that is due, if any.
    ///
    /// Transitions come out in due order, then in the order they were
    /// scheduled.
    pub fn pop_due(&mut self) -> Option<ScheduledTransition> {
        let now = self.now;
        let position = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= now)
            .min_by_key(|(_, entry)| (entry.due, entry.seq))
            .map(|(i, _)| i)?;
        Some(self.pending.remove(position))
    }

    /// Time remaining until the next pending transition is due.
    ///
    /// `Some(Duration::ZERO)` means something is already due.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.pending
            .iter()
            .map(|entry| entry.due.saturating_sub(self.now))
            .min()
    }

    /// All pending transitions, in no particular order.
    #[must_use]
    pub fn pending(&self) -> &[ScheduledTransition] {
        &self.pending
    }

    /// Number of pending transitions.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Drop every pending transition. The clock keeps its time.
    pub fn clear(&mut self) {
        self.pending.clear();
    }
}
