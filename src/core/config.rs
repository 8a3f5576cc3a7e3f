//! Game and data configuration.
//!
//! - `GameConfig`: board shape, number of agent words, similarity threshold
//! - `DataConfig`: where the embedding data lives and how much of it to load

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};

/// Default cosine-similarity cutoff between "associated" and "unassociated".
pub const DEFAULT_THRESHOLD: f32 = 0.3;

/// Candidates within this edit distance of an agent word are never clues.
pub const DEFAULT_MAX_EDIT_DISTANCE: usize = 2;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameConfig {
    /// Rows used when printing the board.
    pub rows: usize,

    /// Columns used when printing the board.
    pub cols: usize,

    /// Number of agent words sampled from the board.
    pub agents: usize,

    /// Cosine-similarity threshold used by both the filter and the selector.
    pub threshold: f32,

    /// Candidates at this edit distance or closer to an agent word are dropped.
    pub max_edit_distance: usize,

    /// Seed for dealing. `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rows: 5,
            cols: 5,
            agents: 8,
            threshold: DEFAULT_THRESHOLD,
            max_edit_distance: DEFAULT_MAX_EDIT_DISTANCE,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Create the default configuration (5x5 board, 8 agents, threshold 0.3).
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the board shape.
    #[must_use]
    pub fn with_board(mut self, rows: usize, cols: usize) -> Self {
        self.rows = rows;
        self.cols = cols;
        self
    }

    /// Set the number of agent words.
    #[must_use]
    pub fn with_agents(mut self, agents: usize) -> Self {
        self.agents = agents;
        self
    }

    /// Set the similarity threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Set the dealing seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Number of words on the board.
    #[must_use]
    pub fn board_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Check the configuration is playable.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(Error::config(format!(
                "board must have at least one row and column, got {}x{}",
                self.rows, self.cols
            )));
        }
        if self.agents == 0 {
            return Err(Error::config("at least one agent word is required"));
        }
        if self.agents > self.board_size() {
            return Err(Error::config(format!(
                "{} agent words do not fit on a board of {}",
                self.agents,
                self.board_size()
            )));
        }
        if !self.threshold.is_finite() {
            return Err(Error::config(format!(
                "threshold must be finite, got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// Location of the embedding data set.
///
/// The directory holds `words`, `vectors.bin`, `stopwords.txt` and `wordlist`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DataConfig {
    /// Directory containing the data files.
    pub dir: PathBuf,

    /// Keep only the first `n` vocabulary entries (after stop-word removal).
    pub limit_vocab: Option<usize>,
}

impl DataConfig {
    pub const WORDS_FILE: &'static str = "words";
    pub const VECTORS_FILE: &'static str = "vectors.bin";
    pub const STOPWORDS_FILE: &'static str = "stopwords.txt";
    pub const CODENAMES_FILE: &'static str = "wordlist";

    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            limit_vocab: None,
        }
    }

    #[must_use]
    pub fn with_limit_vocab(mut self, limit: Option<usize>) -> Self {
        self.limit_vocab = limit;
        self
    }

    pub fn words_path(&self) -> PathBuf {
        self.dir.join(Self::WORDS_FILE)
    }

    pub fn vectors_path(&self) -> PathBuf {
        self.dir.join(Self::VECTORS_FILE)
    }

    pub fn stopwords_path(&self) -> PathBuf {
        self.dir.join(Self::STOPWORDS_FILE)
    }

    pub fn codenames_path(&self) -> PathBuf {
        self.dir.join(Self::CODENAMES_FILE)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.board_size(), 25);
        assert_eq!(config.agents, 8);
        assert!((config.threshold - 0.3).abs() < f32::EPSILON);
        assert_eq!(config.max_edit_distance, 2);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::new()
            .with_board(4, 4)
            .with_agents(6)
            .with_threshold(0.4)
            .with_seed(123);

        assert_eq!(config.board_size(), 16);
        assert_eq!(config.agents, 6);
        assert_eq!(config.threshold, 0.4);
        assert_eq!(config.seed, Some(123));
    }

    #[test]
    fn test_validate_rejects_bad_configs() {
        assert!(GameConfig::new().with_board(0, 5).validate().is_err());
        assert!(GameConfig::new().with_agents(0).validate().is_err());
        assert!(GameConfig::new().with_board(2, 2).with_agents(5).validate().is_err());
        assert!(GameConfig::new().with_threshold(f32::NAN).validate().is_err());
    }

    #[test]
    fn test_serialization() {
        let config = GameConfig::new().with_seed(5);
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: GameConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_data_paths() {
        let data = DataConfig::new("dataset").with_limit_vocab(Some(50_000));
        assert_eq!(data.words_path(), PathBuf::from("dataset/words"));
        assert_eq!(data.vectors_path(), PathBuf::from("dataset/vectors.bin"));
        assert_eq!(data.stopwords_path(), PathBuf::from("dataset/stopwords.txt"));
        assert_eq!(data.codenames_path(), PathBuf::from("dataset/wordlist"));
        assert_eq!(data.limit_vocab, Some(50_000));
    }
}
