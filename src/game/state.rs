//! Mutable state of one game.
//!
//! ## Invariants
//!
//! - Remaining agent words are always live board words (not yet hidden).
//! - The used-clue set starts with every board word and only grows.
//! - Guessed words are replaced on the board by [`HIDDEN`].

use im::Vector;
use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Marker replacing a guessed word on the board.
pub const HIDDEN: &str = "---";

/// What happened in one completed round.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Round number (starts at 1).
    pub round: u32,

    /// Clue given this round.
    pub clue: String,

    /// Number announced with the clue.
    pub count: usize,

    /// Picks in the order they were made.
    pub picks: Vec<String>,

    /// How many picks were agent words.
    pub correct: usize,
}

impl RoundRecord {
    /// Picks that were not agent words.
    #[must_use]
    pub fn wrong(&self) -> usize {
        self.picks.len() - self.correct
    }
}

/// Board, remaining agent words, used clues and round history.
///
/// History uses `im::Vector` so snapshots of the state are cheap to clone.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Vec<String>,
    agents: Vec<String>,
    used_clues: FxHashSet<String>,
    history: Vector<RoundRecord>,
}

impl GameState {
    /// Create a state from a board and the agent words on it.
    ///
    /// Board words must be distinct and every agent word must be on the
    /// board. Remaining agent words are kept in board order.
    pub fn new<S: AsRef<str>>(board: Vec<String>, agents: &[S]) -> Result<Self> {
        if board.is_empty() {
            return Err(Error::config("board is empty"));
        }

        let mut used_clues = FxHashSet::default();
        for word in &board {
            if word == HIDDEN {
                return Err(Error::config(format!("'{}' cannot be a board word", HIDDEN)));
            }
            if !used_clues.insert(word.clone()) {
                return Err(Error::config(format!("'{}' appears twice on the board", word)));
            }
        }

        let agent_set: FxHashSet<&str> = agents.iter().map(AsRef::as_ref).collect();
        if agent_set.len() != agents.len() {
            return Err(Error::config("agent words must be distinct"));
        }
        if let Some(missing) = agent_set.iter().find(|a| !used_clues.contains(**a)) {
            return Err(Error::config(format!("agent word '{}' is not on the board", missing)));
        }

        let agents = board
            .iter()
            .filter(|w| agent_set.contains(w.as_str()))
            .cloned()
            .collect();

        Ok(Self {
            board,
            agents,
            used_clues,
            history: Vector::new(),
        })
    }

    /// Board words, with guessed words replaced by [`HIDDEN`].
    pub fn board(&self) -> &[String] {
        &self.board
    }

    /// Agent words not yet guessed.
    pub fn remaining_agents(&self) -> &[String] {
        &self.agents
    }

    /// Board words plus every clue already given.
    pub fn used_clues(&self) -> &FxHashSet<String> {
        &self.used_clues
    }

    /// Completed rounds, oldest first.
    pub fn history(&self) -> &Vector<RoundRecord> {
        &self.history
    }

    /// Number of completed rounds.
    #[must_use]
    pub fn rounds(&self) -> usize {
        self.history.len()
    }

    /// True once every agent word has been guessed.
    #[must_use]
    pub fn is_done(&self) -> bool {
        self.agents.is_empty()
    }

    /// True if `word` is still visible on the board.
    #[must_use]
    pub fn is_live(&self, word: &str) -> bool {
        word != HIDDEN && self.board.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn is_agent(&self, word: &str) -> bool {
        self.agents.iter().any(|a| a == word)
    }

    /// Record a clue so it is never given again.
    pub fn mark_used(&mut self, clue: &str) {
        self.used_clues.insert(clue.to_string());
    }

    /// Hide a picked word. Returns whether it was an agent word.
    pub fn apply_pick(&mut self, word: &str) -> Result<bool> {
        let slot = self
            .board
            .iter()
            .position(|w| w == word && w != HIDDEN)
            .ok_or_else(|| Error::InvalidPick {
                word: word.to_string(),
            })?;
        self.board[slot] = HIDDEN.to_string();

        let before = self.agents.len();
        self.agents.retain(|a| a != word);
        Ok(self.agents.len() < before)
    }

    pub(crate) fn record(&mut self, record: RoundRecord) {
        self.history.push_back(record);
    }
}
