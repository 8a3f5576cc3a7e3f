//! Append-only diagnostic record of the clues the spymaster gives.
//!
//! One NDJSON line per clue: the clue word, the agent words it was meant
//! to cover and their similarity scores. The engine never reads it back.

use std::fs::{File, OpenOptions};
use std::io::{self, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::clue::Clue;
use crate::core::{Error, Result};

#[derive(Serialize)]
struct ClueLogEntry<'a> {
    round: u32,
    clue: &'a str,
    group: &'a [String],
    scores: &'a [f32],
}

/// Clue log owned by one game.
///
/// Each line is flushed as it is written, and the underlying file is closed
/// when the log is dropped.
#[derive(Debug)]
pub struct ClueLog<W: Write> {
    out: W,
}

impl ClueLog<BufWriter<File>> {
    /// Open (or create) a log file for appending.
    pub fn open(path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| Error::io(format!("open clue log {}", path.display()), e))?;
        Ok(Self::new(BufWriter::new(file)))
    }
}

impl ClueLog<io::Sink> {
    /// A log that discards everything.
    pub fn disabled() -> Self {
        Self::new(io::sink())
    }
}

impl<W: Write> ClueLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    /// Append one clue.
    pub fn record(&mut self, round: u32, clue: &Clue) -> Result<()> {
        let entry = ClueLogEntry {
            round,
            clue: &clue.word,
            group: &clue.group,
            scores: &clue.scores,
        };
        serde_json::to_writer(&mut self.out, &entry)?;
        writeln!(self.out)
            .and_then(|()| self.out.flush())
            .map_err(|e| Error::io("write clue log", e))
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
