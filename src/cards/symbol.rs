//! Face symbols and the catalog they are drawn from.

use std::fmt;

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Face value shown on the front of a card.
///
/// Symbols are opaque to the engine: two cards match when their symbols
/// compare equal, nothing else is interpreted.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Symbol(String);

impl Symbol {
    /// Create a symbol from any string-like identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for Symbol {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Icons used when no custom catalog is supplied.
pub const DEFAULT_ICONS: [&str; 8] = [
    "bi-hammer",
    "bi-wrench-adjustable",
    "bi-compass",
    "bi-rulers",
    "bi-gear",
    "bi-thermometer-half",
    "bi-diagram-3",
    "bi-lightning",
];

/// Ordered pool of symbols.
///
/// Boards always draw the *first* `pair_count` symbols, so catalog order
/// decides which icons appear at lower difficulties.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SymbolCatalog {
    symbols: Vec<Symbol>,
}

impl Default for SymbolCatalog {
    fn default() -> Self {
        Self::new(DEFAULT_ICONS.iter().copied().map(Symbol::from))
    }
}

impl SymbolCatalog {
    /// Create a catalog from symbols in draw order.
    pub fn new(symbols: impl IntoIterator<Item = Symbol>) -> Self {
        Self {
            symbols: symbols.into_iter().collect(),
        }
    }

    /// Number of symbols available.
    #[must_use]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// All symbols in draw order.
    #[must_use]
    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    /// The first `count` symbols, or fewer if the catalog is short.
    #[must_use]
    pub fn take(&self, count: usize) -> &[Symbol] {
        &self.symbols[..count.min(self.symbols.len())]
    }

    /// Check that `pair_count` distinct symbols can be drawn.
    pub fn ensure_supports(&self, pair_count: usize) -> Result<()> {
        let mut seen = FxHashSet::default();
        for symbol in &self.symbols {
            if !seen.insert(symbol) {
                return Err(ConfigError::DuplicateSymbol(symbol.to_string()));
            }
        }

        if self.symbols.len() < pair_count {
            return Err(ConfigError::CatalogTooSmall {
                needed: pair_count,
                available: self.symbols.len(),
            });
        }

        Ok(())
    }
}
