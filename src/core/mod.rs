//! Core types: configuration, errors, deterministic RNG.
//!
//! Everything else in the crate builds on these and nothing here knows
//! about embeddings or clues.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{DataConfig, GameConfig, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_THRESHOLD};
pub use error::{Error, Result};
pub use rng::GameRng;
