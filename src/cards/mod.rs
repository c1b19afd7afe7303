//! Card system: face symbols, the symbol catalog, and per-card state.
//!
//! ## Key Types
//!
//! - `Symbol`: Face value printed on a card (an icon identifier)
//! - `SymbolCatalog`: Ordered pool boards draw their symbols from
//! - `Card`: One board position with its face and visibility state
//! - `CardState`: Hidden, revealed, or matched

pub mod card;
pub mod symbol;

pub use card::{Card, CardState};
pub use symbol::{Symbol, SymbolCatalog};
