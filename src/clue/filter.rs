//! Candidate filtering: which vocabulary words may be offered as clues.
//!
//! A word is a candidate when it is
//! - off the board,
//! - more similar than the threshold to at least one agent word,
//! - less similar than the threshold to every non-agent board word,
//! - not a spelling variant of any agent word (see [`too_similar`]).
//!
//! The result only depends on the embedding space and the initial
//! agent/non-agent partition, so a game computes it once at setup.

use rustc_hash::FxHashSet;

use super::morphology::too_similar;
use crate::core::{GameConfig, Result, DEFAULT_MAX_EDIT_DISTANCE, DEFAULT_THRESHOLD};
use crate::embedding::{dot, EmbeddingSpace};

/// Eligible clue words, as vocabulary indices in vocabulary order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CandidatePool {
    indices: Vec<usize>,
}

impl CandidatePool {
    /// Build a pool from explicit words.
    pub fn from_words<S: AsRef<str>>(space: &EmbeddingSpace, words: &[S]) -> Result<Self> {
        let indices = words
            .iter()
            .map(|w| space.index_of(w.as_ref()))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self { indices })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    /// Candidate words in pool order.
    pub fn words<'a>(&'a self, space: &'a EmbeddingSpace) -> impl Iterator<Item = &'a str> + 'a {
        self.indices.iter().map(move |&i| space.word(i))
    }
}

/// Similarity and spelling filter over the whole vocabulary.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateFilter {
    threshold: f32,
    max_edit_distance: usize,
}

impl Default for CandidateFilter {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
        }
    }
}

impl CandidateFilter {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            ..Self::default()
        }
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            threshold: config.threshold,
            max_edit_distance: config.max_edit_distance,
        }
    }

    #[must_use]
    pub fn with_max_edit_distance(mut self, distance: usize) -> Self {
        self.max_edit_distance = distance;
        self
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Compute the candidate pool for a board and its agent words.
    ///
    /// Fails with `UnknownWord` if any board word is missing from `space`.
    pub fn find_candidates<S: AsRef<str>>(
        &self,
        space: &EmbeddingSpace,
        board: &[S],
        agents: &[S],
    ) -> Result<CandidatePool> {
        let agent_set: FxHashSet<&str> = agents.iter().map(AsRef::as_ref).collect();
        let board_set: FxHashSet<&str> = board.iter().map(AsRef::as_ref).collect();
        let negatives: Vec<&str> = board
            .iter()
            .map(AsRef::as_ref)
            .filter(|w| !agent_set.contains(w))
            .collect();

        let positive_vectors = space.vectors_of(agents)?;
        let negative_vectors = space.vectors_of(&negatives)?;

        let indices = space
            .iter()
            .filter(|(_, word, _)| !board_set.contains(word))
            .filter(|(_, _, row)| max_similarity(row, &positive_vectors) > self.threshold)
            .filter(|(_, _, row)| max_similarity(row, &negative_vectors) < self.threshold)
            .filter(|(_, word, _)| {
                !agent_set
                    .iter()
                    .any(|agent| too_similar(word, agent, self.max_edit_distance))
            })
            .map(|(i, _, _)| i)
            .collect();

        Ok(CandidatePool { indices })
    }
}

fn max_similarity(row: &[f32], others: &[&[f32]]) -> f32 {
    others
        .iter()
        .map(|other| dot(row, other))
        .fold(f32::NEG_INFINITY, f32::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn space() -> EmbeddingSpace {
        EmbeddingSpace::from_pairs(vec![
            ("ocean", vec![1.0, 0.0, 0.0, 0.0]),
            ("river", vec![0.8, 0.6, 0.0, 0.0]),
            ("bank", vec![0.0, 0.0, 0.0, 1.0]),
            ("water", vec![0.9, 0.436, 0.0, 0.0]),
            ("money", vec![0.0, 0.0, 0.0, 1.0]),
            ("oceans", vec![1.0, 0.0, 0.0, 0.0]),
            ("rivering", vec![0.0, 1.0, 0.0, 0.0]),
            ("fish", vec![0.6, 0.0, 0.0, 0.8]),
            ("stream", vec![0.5, 0.5, 0.7071, 0.0]),
            ("cloud", vec![0.0, 0.0, 1.0, 0.0]),
        ])
        .unwrap()
    }

    fn board() -> Vec<&'static str> {
        vec!["ocean", "river", "bank"]
    }

    #[test]
    fn test_find_candidates() {
        let space = space();
        let pool = CandidateFilter::default()
            .find_candidates(&space, &board(), &["ocean", "river"])
            .unwrap();

        let words: Vec<&str> = pool.words(&space).collect();
        assert_eq!(words, vec!["water", "stream"]);
    }

    #[test]
    fn test_spelling_variants_are_excluded() {
        let space = space();
        let pool = CandidateFilter::default()
            .find_candidates(&space, &board(), &["ocean", "river"])
            .unwrap();
        let words: Vec<&str> = pool.words(&space).collect();

        assert!(!words.contains(&"oceans"));
        assert!(!words.contains(&"rivering"));

        // Without the edit-distance guard, "oceans" gets through but the
        // "-ing" rule still removes "rivering".
        let pool = CandidateFilter::default()
            .with_max_edit_distance(0)
            .find_candidates(&space, &board(), &["ocean", "river"])
            .unwrap();
        let words: Vec<&str> = pool.words(&space).collect();
        assert!(words.contains(&"oceans"));
        assert!(!words.contains(&"rivering"));
    }

    #[test]
    fn test_board_words_never_candidates() {
        let space = space();
        let pool = CandidateFilter::new(-1.0)
            .with_max_edit_distance(0)
            .find_candidates(&space, &["ocean", "cloud"], &["ocean", "cloud"])
            .unwrap();

        // Every off-board word passes a threshold of -1.
        let words: Vec<&str> = pool.words(&space).collect();
        assert_eq!(words.len(), space.len() - 2);
        assert!(!words.contains(&"ocean"));
        assert!(!words.contains(&"cloud"));
    }

    #[test]
    fn test_no_negatives_accepts_all_positives() {
        let space = space();
        let pool = CandidateFilter::default()
            .find_candidates(&space, &["cloud"], &["cloud"])
            .unwrap();
        let words: Vec<&str> = pool.words(&space).collect();
        assert_eq!(words, vec!["stream"]);
    }

    #[test]
    fn test_threshold_too_high_gives_empty_pool() {
        let space = space();
        let pool = CandidateFilter::new(1.5)
            .find_candidates(&space, &board(), &["ocean", "river"])
            .unwrap();
        assert!(pool.is_empty());
    }

    #[test]
    fn test_unknown_board_word_propagates() {
        let space = space();
        let result = CandidateFilter::default().find_candidates(&space, &["ocean", "zebra"], &["ocean"]);
        assert!(matches!(result, Err(crate::core::Error::UnknownWord { .. })));
    }

    #[test]
    fn test_pool_from_words() {
        let space = space();
        let pool = CandidatePool::from_words(&space, &["cloud", "fish"]).unwrap();
        assert_eq!(pool.len(), 2);
        assert_eq!(pool.indices(), &[9, 7]);
        assert!(CandidatePool::from_words(&space, &["zebra"]).is_err());
    }
}
