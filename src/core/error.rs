//! Error types for the spymaster engine.

use thiserror::Error;

/// Main error type for the crate.
///
/// Every variant is unrecoverable for the game in progress; only the
/// role-selection loop of the binary recovers and offers a new game.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown word '{word}': not in the embedding vocabulary")]
    UnknownWord { word: String },

    #[error("vocabulary has {words} entries but the vector table has {rows} rows (after {stage})")]
    LoadIntegrity {
        words: usize,
        rows: usize,
        stage: String,
    },

    #[error("ran out of clue candidates at threshold {threshold}; lower the threshold")]
    NoCandidate { threshold: f32 },

    #[error("invalid configuration: {message}")]
    InvalidConfiguration { message: String },

    #[error("'{word}' is not a word on the board")]
    InvalidPick { word: String },

    #[error("interrupted")]
    Interrupted,

    #[error("failed to {operation}: {source}")]
    Io {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("vector table encoding error: {0}")]
    Bincode(#[from] bincode::Error),
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap an IO error with the operation that failed.
    pub fn io(operation: impl Into<String>, source: std::io::Error) -> Self {
        Error::Io {
            operation: operation.into(),
            source,
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        Error::InvalidConfiguration {
            message: message.into(),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io {
            operation: "IO operation".to_string(),
            source,
        }
    }
}
