//! Engine configuration types.
//!
//! Hosts configure the engine at startup by providing:
//! - `Difficulty`: Board size and layout
//! - `Timings`: Preview and mismatch delays
//! - `EngineConfig`: Combines these with the symbol catalog and seed
//!
//! Gameplay rules never hardcode board sizes; they read them from here.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::rng::GameRngState;
use crate::cards::SymbolCatalog;
use crate::error::{ConfigError, Result};

/// Board difficulty. A fixed, enumerated set.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// 6 pairs on a 4x3 grid.
    #[default]
    Easy,
    /// 8 pairs on a 4x4 grid.
    Hard,
}

impl Difficulty {
    /// Every difficulty, easiest first.
    pub const ALL: [Difficulty; 2] = [Difficulty::Easy, Difficulty::Hard];

    /// Number of distinct symbols (and therefore pairs) on the board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self {
            Difficulty::Easy => 6,
            Difficulty::Hard => 8,
        }
    }

    /// Total number of cards dealt.
    #[must_use]
    pub const fn card_count(self) -> usize {
        self.pair_count() * 2
    }

    /// Grid layout as `(columns, rows)`.
    #[must_use]
    pub const fn grid(self) -> (usize, usize) {
        match self {
            Difficulty::Easy => (4, 3),
            Difficulty::Hard => (4, 4),
        }
    }

    /// Class name the presentation layer attaches to each card.
    #[must_use]
    pub const fn layout_class(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy-mode",
            Difficulty::Hard => "hard-mode",
        }
    }

    /// Identifier used by difficulty selectors.
    #[must_use]
    pub const fn id(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Hard => "hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Difficulty {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self> {
        Difficulty::ALL
            .into_iter()
            .find(|d| d.id() == s)
            .ok_or_else(|| ConfigError::UnknownDifficulty(s.to_string()))
    }
}

/// Fixed delays driving the two locked phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timings {
    /// How long every card stays revealed after a (re)start.
    pub preview: Duration,

    /// How long a mismatched pair stays revealed before flipping back.
    pub mismatch_delay: Duration,
}

impl Default for Timings {
    fn default() -> Self {
        Self {
            preview: Duration::from_millis(2000),
            mismatch_delay: Duration::from_millis(1000),
        }
    }
}

/// Complete engine configuration.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Symbols boards are drawn from.
    pub catalog: SymbolCatalog,

    /// Preview and mismatch delays.
    pub timings: Timings,

    /// Difficulty of the first board.
    pub difficulty: Difficulty,

    /// Seed for the deal RNG.
    pub seed: u64,

    /// Resume the deal RNG from a captured position instead of `seed`.
    #[serde(default)]
    pub rng_state: Option<GameRngState>,
}

impl EngineConfig {
    /// Create a default configuration with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Use a custom symbol catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: SymbolCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Set the initial difficulty.
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Resume dealing from a state taken with `MatchingEngine::rng_state`.
    #[must_use]
    pub fn with_rng_state(mut self, state: GameRngState) -> Self {
        self.rng_state = Some(state);
        self
    }

    /// Set the preview duration.
    #[must_use]
    pub fn with_preview(mut self, preview: Duration) -> Self {
        self.timings.preview = preview;
        self
    }

    /// Set the mismatch delay.
    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.timings.mismatch_delay = delay;
        self
    }

    /// Check the catalog can serve every difficulty.
    ///
    /// `configure` may switch to any difficulty at runtime, so the check
    /// covers all of them, not just the initial one.
    pub fn validate(&self) -> Result<()> {
        let largest = Difficulty::ALL
            .iter()
            .map(|d| d.pair_count())
            .max()
            .unwrap_or(0);
        self.catalog.ensure_supports(largest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Symbol;

    #[test]
    fn test_difficulty_sizes() {
        assert_eq!(Difficulty::Easy.pair_count(), 6);
        assert_eq!(Difficulty::Easy.card_count(), 12);
        assert_eq!(Difficulty::Easy.grid(), (4, 3));

        assert_eq!(Difficulty::Hard.pair_count(), 8);
        assert_eq!(Difficulty::Hard.card_count(), 16);
        assert_eq!(Difficulty::Hard.grid(), (4, 4));
    }

    #[test]
    fn test_grid_fits_cards() {
        for difficulty in Difficulty::ALL {
            let (cols, rows) = difficulty.grid();
            assert_eq!(cols * rows, difficulty.card_count());
        }
    }

    #[test]
    fn test_difficulty_parse() {
        assert_eq!("easy".parse::<Difficulty>(), Ok(Difficulty::Easy));
        assert_eq!("hard".parse::<Difficulty>(), Ok(Difficulty::Hard));
        assert_eq!(
            "medium".parse::<Difficulty>(),
            Err(ConfigError::UnknownDifficulty("medium".to_string()))
        );
        assert_eq!(format!("{}", Difficulty::Hard), "hard");
    }

    #[test]
    fn test_default_timings() {
        let timings = Timings::default();
        assert_eq!(timings.preview, Duration::from_millis(2000));
        assert_eq!(timings.mismatch_delay, Duration::from_millis(1000));
    }

    #[test]
    fn test_config_builder() {
        let config = EngineConfig::new(7)
            .with_difficulty(Difficulty::Hard)
            .with_preview(Duration::from_millis(500))
            .with_mismatch_delay(Duration::from_millis(250));

        assert_eq!(config.seed, 7);
        assert_eq!(config.difficulty, Difficulty::Hard);
        assert_eq!(config.timings.preview, Duration::from_millis(500));
        assert_eq!(config.timings.mismatch_delay, Duration::from_millis(250));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_requires_hard_sized_catalog() {
        let small = SymbolCatalog::new((0..6).map(|i| Symbol::new(format!("s{}", i))));
        let config = EngineConfig::new(1).with_catalog(small);

        assert_eq!(
            config.validate(),
            Err(ConfigError::CatalogTooSmall { needed: 8, available: 6 })
        );
    }
}
