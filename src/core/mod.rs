//! Core engine types: configuration and deterministic RNG.

pub mod config;
pub mod rng;

pub use config::{Difficulty, EngineConfig, Timings};
pub use rng::{GameRng, GameRngState};
