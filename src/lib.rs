//! # codenames
//!
//! A spymaster for the word-association game Codenames, driven by a
//! pre-computed word embedding.
//!
//! ## How a clue is chosen
//!
//! 1. **Filter**: every vocabulary word is compared against the agent words
//!    and the other board words. Words clearly related to an agent word and
//!    unrelated to every other board word survive, minus spelling variants
//!    of the agent words.
//!
//! 2. **Select**: each surviving, unused word is scored against the agent
//!    words still on the board. Wider coverage always wins; equal coverage
//!    is decided by mean similarity.
//!
//! 3. **Play**: the turn engine gives the clue, collects guesses from a
//!    `GuessReader` and repeats until every agent word is found.
//!
//! ## Modules
//!
//! - `core`: configuration, errors, deterministic RNG
//! - `embedding`: vocabulary and vector table, data loading
//! - `clue`: candidate filter and clue selector
//! - `game`: game state, turn engine, guess readers, clue log

pub mod clue;
pub mod core;
pub mod embedding;
pub mod game;

// Re-export commonly used types
pub use crate::core::{DataConfig, Error, GameConfig, GameRng, Result};

pub use crate::embedding::{load_dataset, Dataset, EmbeddingSpace, VectorTable};

pub use crate::clue::{CandidateFilter, CandidatePool, Clue, ClueSelector};

pub use crate::game::{
    ClueLog, Game, GameState, GameSummary, GuessReader, Phase, RoundRecord, ScriptedReader,
    TerminalReader,
};
