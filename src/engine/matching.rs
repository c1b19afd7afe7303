//! The matching-game engine.

use std::collections::VecDeque;
use std::time::Duration;

use smallvec::SmallVec;
use tracing::{debug, trace};

use super::event::GameEvent;
use super::phase::{IgnoreReason, Phase, SelectOutcome};
use super::snapshot::{CardView, Snapshot};
use crate::board::Board;
use crate::cards::{CardState, SymbolCatalog};
use crate::core::{Difficulty, EngineConfig, GameRng, GameRngState, Timings};
use crate::error::Result;
use crate::schedule::{ScheduledTransition, Scheduler, Transition};

/// Events kept for the presentation layer before the oldest are dropped.
pub const EVENT_LOG_CAPACITY: usize = 256;

/// Single-player card-matching engine.
///
/// Owns the board, the turn in progress, the session counters, and the
/// virtual clock used for the preview and mismatch delays. Every
/// operation runs to completion; delays are applied by `advance`.
///
/// Hosts that render from events should call `drain_events` after each
/// operation. Undrained events are capped at [`EVENT_LOG_CAPACITY`],
/// oldest first out.
///
/// ```
/// use std::time::Duration;
/// use memory_match::{EngineConfig, MatchingEngine, Phase};
///
/// let mut engine = MatchingEngine::new(EngineConfig::new(42)).unwrap();
/// assert_eq!(engine.phase(), Phase::Idle);
///
/// engine.start_or_restart();
/// assert!(engine.is_previewing());
///
/// engine.advance(Duration::from_millis(2000));
/// assert_eq!(engine.phase(), Phase::AwaitingFirstPick);
/// ```
#[derive(Clone, Debug)]
pub struct MatchingEngine {
    catalog: SymbolCatalog,
    timings: Timings,
    difficulty: Difficulty,
    rng: GameRng,

    /// Current board; its generation tags scheduled transitions.
    board: Board,
    phase: Phase,
    previewing: bool,
    started: bool,

    /// Cards revealed in the current, unresolved turn.
    pending: SmallVec<[usize; 2]>,
    move_count: usize,
    matched_pair_count: usize,

    scheduler: Scheduler,
    events: VecDeque<GameEvent>,
}

impl MatchingEngine {
    /// Create an engine with a dealt, locked board.
    pub fn new(config: EngineConfig) -> Result<Self> {
        config.validate()?;

        let mut rng = match &config.rng_state {
            Some(state) => GameRng::from_state(state),
            None => GameRng::new(config.seed).for_context("deal"),
        };
        let board = Board::deal(config.catalog.take(config.difficulty.pair_count()), 0, &mut rng);

        let mut engine = Self {
            catalog: config.catalog,
            timings: config.timings,
            difficulty: config.difficulty,
            rng,
            board,
            phase: Phase::Idle,
            previewing: false,
            started: false,
            pending: SmallVec::new(),
            move_count: 0,
            matched_pair_count: 0,
            scheduler: Scheduler::new(),
            events: VecDeque::new(),
        };
        engine.push_event(GameEvent::BoardDealt {
            difficulty: engine.difficulty,
            generation: 0,
        });
        Ok(engine)
    }

    // === Lifecycle ===

    /// Deal a fresh board for `difficulty` and lock input.
    ///
    /// Bumps the generation and drops every pending transition; `apply`
    /// still rejects anything tagged with an older generation.
    pub fn configure(&mut self, difficulty: Difficulty) {
        let generation = self.board.generation() + 1;
        self.difficulty = difficulty;
        self.board = Board::deal(
            self.catalog.take(difficulty.pair_count()),
            generation,
            &mut self.rng,
        );
        self.scheduler.clear();
        debug_assert!(self.board.is_strictly_paired());

        self.phase = Phase::Idle;
        self.previewing = false;
        self.started = false;
        self.pending.clear();
        self.move_count = 0;
        self.matched_pair_count = 0;

        debug!(
            generation,
            difficulty = %difficulty,
            cards = self.board.len(),
            "dealt board"
        );
        self.push_event(GameEvent::BoardDealt {
            difficulty,
            generation,
        });
    }

    /// Redeal at the current difficulty and run the timed preview.
    ///
    /// All cards are shown until the preview delay elapses; input stays
    /// locked until then.
    pub fn start_or_restart(&mut self) {
        self.configure(self.difficulty);

        self.started = true;
        self.previewing = true;
        self.board.reveal_all();
        self.scheduler
            .schedule(self.timings.preview, self.board.generation(), Transition::EndPreview);

        self.push_event(GameEvent::PreviewStarted);
    }

    // === Player action ===

    /// Pick the card at `index`.
    ///
    /// Ineffective picks (locked phase, bad index, matched or already
    /// revealed card) change nothing and report why.
    pub fn select_card(&mut self, index: usize) -> SelectOutcome {
        let outcome = self.try_select(index);
        trace!(index, ?outcome, phase = ?self.phase, "select card");
        outcome
    }

    fn try_select(&mut self, index: usize) -> SelectOutcome {
        if !self.phase.accepts_input() {
            return SelectOutcome::Ignored(IgnoreReason::Locked);
        }

        let Some(card) = self.board.get(index) else {
            return SelectOutcome::Ignored(IgnoreReason::OutOfRange);
        };
        match card.state {
            CardState::Matched => return SelectOutcome::Ignored(IgnoreReason::AlreadyMatched),
            CardState::Revealed => return SelectOutcome::Ignored(IgnoreReason::AlreadyRevealed),
            CardState::Hidden => {}
        }

        self.board.set_state(index, CardState::Revealed);
        self.push_event(GameEvent::CardRevealed { index });

        match self.pending.first().copied() {
            None => {
                self.pending.push(index);
                self.phase = Phase::AwaitingSecondPick;
                SelectOutcome::FirstPick
            }
            Some(first) => {
                self.move_count += 1;
                self.resolve_turn(first, index)
            }
        }
    }

    fn resolve_turn(&mut self, first: usize, second: usize) -> SelectOutcome {
        let is_match = match (self.board.get(first), self.board.get(second)) {
            (Some(a), Some(b)) => a.pairs_with(b),
            _ => false,
        };

        if is_match {
            self.board.set_state(first, CardState::Matched);
            self.board.set_state(second, CardState::Matched);
            self.pending.clear();
            self.matched_pair_count += 1;
            self.push_event(GameEvent::PairMatched { first, second });

            let won = self.matched_pair_count == self.board.pair_count();
            if won {
                self.phase = Phase::Won;
                debug!(moves = self.move_count, "game won");
                self.push_event(GameEvent::GameWon {
                    moves: self.move_count,
                });
            } else {
                self.phase = Phase::AwaitingFirstPick;
            }
            SelectOutcome::Matched { won }
        } else {
            self.pending.push(second);
            self.phase = Phase::Resolving;
            self.scheduler.schedule(
                self.timings.mismatch_delay,
                self.board.generation(),
                Transition::HideMismatch { first, second },
            );
            self.push_event(GameEvent::PairMismatched { first, second });
            SelectOutcome::Mismatched
        }
    }

    // === Clock ===

    /// Advance the virtual clock and apply every transition that came due.
    ///
    /// Returns how many transitions were applied. Transitions scheduled
    /// for an earlier board generation are dropped.
    pub fn advance(&mut self, elapsed: Duration) -> usize {
        self.scheduler.advance(elapsed);

        let mut applied = 0;
        while let Some(entry) = self.scheduler.pop_due() {
            if self.apply(entry) {
                applied += 1;
            }
        }
        applied
    }

    /// Time until the next pending transition, for hosts driving a timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.scheduler.next_deadline()
    }

    fn apply(&mut self, entry: ScheduledTransition) -> bool {
        if entry.generation != self.board.generation() {
            debug!(
                scheduled = entry.generation,
                current = self.board.generation(),
                transition = ?entry.transition,
                "dropping stale transition"
            );
            return false;
        }

        match entry.transition {
            Transition::EndPreview if self.previewing => {
                self.board.hide_unmatched();
                self.previewing = false;
                self.phase = Phase::AwaitingFirstPick;
                self.push_event(GameEvent::PreviewEnded);
                true
            }
            Transition::HideMismatch { first, second } if self.phase == Phase::Resolving => {
                self.board.set_state(first, CardState::Hidden);
                self.board.set_state(second, CardState::Hidden);
                self.pending.clear();
                self.phase = Phase::AwaitingFirstPick;
                self.push_event(GameEvent::CardsHidden { first, second });
                true
            }
            transition => {
                debug!(?transition, phase = ?self.phase, "transition no longer applies");
                false
            }
        }
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// True during the locked preview after a (re)start.
    #[must_use]
    pub fn is_previewing(&self) -> bool {
        self.previewing
    }

    /// False after `configure` until the next `start_or_restart`.
    #[must_use]
    pub fn has_started(&self) -> bool {
        self.started
    }

    /// The full board, including faces of hidden cards.
    ///
    /// Renderers should use `snapshot`, which masks hidden faces.
    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Board generation; bumped on every deal.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.board.generation()
    }

    /// Number of transitions waiting on the clock.
    #[must_use]
    pub fn pending_transition_count(&self) -> usize {
        self.scheduler.pending_count()
    }

    /// Position of the deal RNG.
    ///
    /// An engine built with `EngineConfig::with_rng_state` from this value
    /// deals the same board the next `configure` here would.
    #[must_use]
    pub fn rng_state(&self) -> GameRngState {
        self.rng.state()
    }

    /// Cards revealed in the unresolved turn.
    #[must_use]
    pub fn pending_picks(&self) -> &[usize] {
        &self.pending
    }

    #[must_use]
    pub fn move_count(&self) -> usize {
        self.move_count
    }

    #[must_use]
    pub fn matched_pair_count(&self) -> usize {
        self.matched_pair_count
    }

    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.board.pair_count()
    }

    /// Final move count, once the game is won.
    #[must_use]
    pub fn final_moves(&self) -> Option<usize> {
        (self.phase == Phase::Won).then_some(self.move_count)
    }

    /// Take all events emitted since the last drain, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        self.events.drain(..).collect()
    }

    fn push_event(&mut self, event: GameEvent) {
        if self.events.len() == EVENT_LOG_CAPACITY {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            difficulty: self.difficulty,
            grid: self.difficulty.grid(),
            layout_class: self.difficulty.layout_class().to_string(),
            phase: self.phase,
            previewing: self.previewing,
            started: self.started,
            cards: self.board.cards().iter().map(CardView::from).collect(),
            move_count: self.move_count,
            matched_pair_count: self.matched_pair_count,
            pair_count: self.board.pair_count(),
            final_moves: self.final_moves(),
            generation: self.board.generation(),
        }
    }
}
