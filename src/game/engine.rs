//! Turn engine with the computer as spymaster.
//!
//! ## Lifecycle
//!
//! ```text
//! setup ──▶ GiveClue ──▶ ResolveGuesses ──▶ GiveClue ... ──▶ Done
//! ```
//!
//! Setup deals (or accepts) a board, picks the agent words and computes the
//! candidate pool once. Each round then selects a clue for the agent words
//! still on the board, hands it to a [`GuessReader`], and applies the picks.
//! The game is done when no agent words remain.
//!
//! [`Game::play`] drives the whole loop; [`Game::next_clue`] and
//! [`Game::resolve`] expose the two halves of a round for callers that
//! supply picks themselves.

use std::io::Write;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::log::ClueLog;
use super::reader::GuessReader;
use super::state::{GameState, RoundRecord};
use crate::clue::{CandidateFilter, CandidatePool, Clue, ClueSelector};
use crate::core::{Error, GameConfig, GameRng, Result};
use crate::embedding::EmbeddingSpace;

/// Where the game is in its round cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the next clue.
    GiveClue,
    /// A clue is out; waiting for picks.
    ResolveGuesses,
    /// Every agent word has been found.
    Done,
}

/// Totals for a finished (or abandoned) game.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    /// Completed rounds.
    pub rounds: usize,
    /// Clues given, in order.
    pub clues: Vec<String>,
    /// Picks that hit agent words.
    pub correct_picks: usize,
    /// Picks that missed.
    pub wrong_picks: usize,
}

/// One game, owning its state for its whole lifetime.
pub struct Game<'a> {
    space: &'a EmbeddingSpace,
    config: GameConfig,
    selector: ClueSelector,
    candidates: CandidatePool,
    state: GameState,
    phase: Phase,
    pending: Option<Clue>,
}

impl<'a> Game<'a> {
    /// Set up a game on an explicit board.
    ///
    /// `config` must validate, the board must have `config.board_size()`
    /// distinct vocabulary words, and exactly `config.agents` agent words
    /// must be on it.
    pub fn new<S: AsRef<str>>(
        space: &'a EmbeddingSpace,
        config: GameConfig,
        board: Vec<String>,
        agents: &[S],
    ) -> Result<Self> {
        config.validate()?;
        if board.len() != config.board_size() {
            return Err(Error::config(format!(
                "board has {} words but a {}x{} board needs {}",
                board.len(),
                config.rows,
                config.cols,
                config.board_size()
            )));
        }

        if agents.len() != config.agents {
            return Err(Error::config(format!(
                "{} agent words given but the game expects {}",
                agents.len(),
                config.agents
            )));
        }

        let state = GameState::new(board, agents)?;
        let candidates = CandidateFilter::from_config(&config).find_candidates(
            space,
            state.board(),
            state.remaining_agents(),
        )?;
        info!(
            agents = state.remaining_agents().len(),
            candidates = candidates.len(),
            "game ready"
        );

        let phase = if state.is_done() {
            Phase::Done
        } else {
            Phase::GiveClue
        };

        Ok(Self {
            space,
            selector: ClueSelector::from_config(&config),
            config,
            candidates,
            state,
            phase,
            pending: None,
        })
    }

    /// Deal a random board from `codenames` and sample its agent words.
    pub fn deal(
        space: &'a EmbeddingSpace,
        config: GameConfig,
        codenames: &[String],
        rng: &mut GameRng,
    ) -> Result<Self> {
        config.validate()?;
        if codenames.len() < config.board_size() {
            return Err(Error::config(format!(
                "need {} codenames for the board, only {} available",
                config.board_size(),
                codenames.len()
            )));
        }

        let board = rng.sample(codenames, config.board_size());
        let agents = rng.sample(&board, config.agents);
        debug!(seed = rng.seed(), "dealt board");
        Self::new(space, config, board, &agents)
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The candidate pool computed at setup.
    pub fn candidates(&self) -> &CandidatePool {
        &self.candidates
    }

    /// The clue waiting for picks, if any.
    pub fn pending_clue(&self) -> Option<&Clue> {
        self.pending.as_ref()
    }

    /// Select the next clue and mark it used.
    pub fn next_clue(&mut self) -> Result<Clue> {
        self.expect_phase(Phase::GiveClue)?;

        let clue = self.selector.find_clue(
            self.space,
            &self.candidates,
            self.state.remaining_agents(),
            self.state.used_clues(),
        )?;
        self.state.mark_used(&clue.word);
        debug!(
            round = self.state.rounds() + 1,
            clue = %clue.word,
            group = ?clue.group,
            "giving clue"
        );

        self.pending = Some(clue.clone());
        self.phase = Phase::ResolveGuesses;
        Ok(clue)
    }

    /// Apply the picks for the pending clue, in order.
    ///
    /// Every pick must be a distinct live board word; otherwise nothing is
    /// applied and `InvalidPick` is returned.
    pub fn resolve<S: AsRef<str>>(&mut self, picks: &[S]) -> Result<RoundRecord> {
        self.expect_phase(Phase::ResolveGuesses)?;

        for (i, pick) in picks.iter().enumerate() {
            let pick = pick.as_ref();
            let repeated = picks[..i].iter().any(|p| p.as_ref() == pick);
            if repeated || !self.state.is_live(pick) {
                return Err(Error::InvalidPick {
                    word: pick.to_string(),
                });
            }
        }

        let clue = self
            .pending
            .take()
            .ok_or_else(|| Error::config("no clue is pending"))?;

        let mut correct = 0;
        for pick in picks {
            if self.state.apply_pick(pick.as_ref())? {
                correct += 1;
            }
        }

        let record = RoundRecord {
            round: self.state.rounds() as u32 + 1,
            count: clue.count(),
            clue: clue.word,
            picks: picks.iter().map(|p| p.as_ref().to_string()).collect(),
            correct,
        };
        self.state.record(record.clone());

        self.phase = if self.state.is_done() {
            Phase::Done
        } else {
            Phase::GiveClue
        };
        debug!(
            round = record.round,
            correct = record.correct,
            wrong = record.wrong(),
            remaining = self.state.remaining_agents().len(),
            "round resolved"
        );
        Ok(record)
    }

    /// Play rounds until every agent word is found.
    ///
    /// Any error (including an interrupted reader) ends the game; the
    /// round in flight is discarded.
    pub fn play<R, W>(&mut self, reader: &mut R, log: &mut ClueLog<W>) -> Result<GameSummary>
    where
        R: GuessReader + ?Sized,
        W: Write,
    {
        while self.phase != Phase::Done {
            reader.show_board(self.state.board(), self.config.rows)?;

            let clue = self.next_clue()?;
            log.record(self.state.rounds() as u32 + 1, &clue)?;

            let remaining = self.state.remaining_agents().len();
            reader.show_clue(&clue, remaining)?;

            let picks = reader.read_picks(
                self.state.board(),
                self.state.remaining_agents(),
                clue.count(),
            )?;
            self.resolve(&picks)?;
        }

        let summary = self.summary();
        info!(rounds = summary.rounds, wrong = summary.wrong_picks, "game over");
        Ok(summary)
    }

    /// Totals over the rounds played so far.
    pub fn summary(&self) -> GameSummary {
        let history = self.state.history();
        GameSummary {
            rounds: history.len(),
            clues: history.iter().map(|r| r.clue.clone()).collect(),
            correct_picks: history.iter().map(|r| r.correct).sum(),
            wrong_picks: history.iter().map(RoundRecord::wrong).sum(),
        }
    }

    fn expect_phase(&self, expected: Phase) -> Result<()> {
        if self.phase != expected {
            return Err(Error::config(format!(
                "expected phase {:?}, game is in {:?}",
                expected, self.phase
            )));
        }
        Ok(())
    }
}
