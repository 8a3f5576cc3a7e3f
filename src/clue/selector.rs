//! Clue selection: picking the best unused candidate for the agent words
//! still on the board.
//!
//! ## Scoring
//!
//! For each candidate, the similarities to the remaining agent words are
//! computed. Its *coverage* is the number of similarities above the
//! threshold and its *score* is their mean.
//!
//! The running best starts with a minimum coverage of 1. A candidate is
//! considered when its coverage reaches the running minimum. If its coverage
//! is strictly higher, the running best score is first reset to 0 so the
//! new tier can win on any positive mean. The candidate wins if its mean
//! then beats the running best score, and the running minimum becomes its
//! coverage.
//!
//! The reset happens even when the candidate then fails to win, which means
//! a later candidate of the old coverage can still take over against a
//! best score of 0.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::filter::CandidatePool;
use crate::core::{Error, GameConfig, Result, DEFAULT_THRESHOLD};
use crate::embedding::{dot, EmbeddingSpace};

/// A chosen clue and the agent words it is meant to point at.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Clue {
    /// The clue word.
    pub word: String,

    /// Mean similarity over the covered agent words.
    pub score: f32,

    /// Agent words whose similarity exceeds the threshold, in the order
    /// they were passed to the selector.
    pub group: SmallVec<[String; 4]>,

    /// Similarity of each `group` word to the clue.
    pub scores: SmallVec<[f32; 4]>,
}

impl Clue {
    /// Number announced with the clue.
    #[must_use]
    pub fn count(&self) -> usize {
        self.group.len()
    }
}

/// Picks clues from a candidate pool.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClueSelector {
    threshold: f32,
}

impl Default for ClueSelector {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
        }
    }
}

impl ClueSelector {
    pub fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.threshold)
    }

    /// Find the best clue among `candidates` not yet in `used`.
    ///
    /// Fails with `NoCandidate` when no unused candidate covers even one of
    /// the `remaining` agent words.
    pub fn find_clue<S: AsRef<str>>(
        &self,
        space: &EmbeddingSpace,
        candidates: &CandidatePool,
        remaining: &[S],
        used: &FxHashSet<String>,
    ) -> Result<Clue> {
        let agent_vectors = space.vectors_of(remaining)?;

        let mut best: Option<(usize, Vec<f32>)> = None;
        let mut best_score = 0.0_f32;
        let mut most_count = 1_usize;
        let mut scores = Vec::with_capacity(agent_vectors.len());

        for &index in candidates.indices() {
            if used.contains(space.word(index)) {
                continue;
            }

            let row = space.row(index);
            scores.clear();
            scores.extend(agent_vectors.iter().map(|agent| dot(row, agent)));

            let above = scores.iter().filter(|&&s| s > self.threshold);
            let count = above.clone().count();
            if count < most_count {
                continue;
            }

            let mean = above.sum::<f32>() / count as f32;
            if count > most_count {
                best_score = 0.0;
            }
            if mean > best_score {
                best_score = mean;
                most_count = count;
                best = Some((index, scores.clone()));
            }
        }

        let Some((index, best_scores)) = best else {
            return Err(Error::NoCandidate {
                threshold: self.threshold,
            });
        };

        let (group, scores) = remaining
            .iter()
            .zip(best_scores)
            .filter(|(_, s)| *s > self.threshold)
            .map(|(w, s)| (w.as_ref().to_string(), s))
            .unzip();

        let clue = Clue {
            word: space.word(index).to_string(),
            score: best_score,
            group,
            scores,
        };
        debug!(clue = %clue.word, count = clue.count(), score = clue.score, "clue selected");
        Ok(clue)
    }
}
