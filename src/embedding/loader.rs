//! Reading the data set from disk and converting raw GloVe dumps.
//!
//! A data directory contains:
//! - `words`: vocabulary, one word per line, aligned with `vectors.bin`
//! - `vectors.bin`: a `bincode`-encoded [`VectorTable`]
//! - `stopwords.txt`: words never used as vocabulary entries
//! - `wordlist`: the words allowed on a board

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use rustc_hash::FxHashSet;
use tracing::{debug, info};

use super::space::{EmbeddingSpace, VectorTable};
use crate::core::{DataConfig, Error, Result};

/// Loaded embedding space plus the codename list restricted to it.
#[derive(Clone, Debug)]
pub struct Dataset {
    pub space: EmbeddingSpace,
    pub codenames: Vec<String>,
}

/// Load a complete data set described by `config`.
pub fn load_dataset(config: &DataConfig) -> Result<Dataset> {
    info!(dir = %config.dir().display(), "loading data set");

    let stopwords: FxHashSet<String> = read_lines(&config.stopwords_path())?
        .into_iter()
        .filter(|w| !w.is_empty())
        .collect();

    info!("loading words");
    let words = read_lines(&config.words_path())?;

    info!("loading vectors");
    let table = read_vector_table(&config.vectors_path())?;

    info!(stopwords = stopwords.len(), "removing stopwords");
    let space = EmbeddingSpace::builder(words, table)
        .without_stopwords(stopwords)
        .limit_vocab(config.limit_vocab)
        .build()?;

    info!("loading codenames");
    let codenames = read_codenames(&config.codenames_path(), &space)?;

    info!(
        vocabulary = space.len(),
        dim = space.dim(),
        codenames = codenames.len(),
        "ready"
    );
    Ok(Dataset { space, codenames })
}

/// Read a file as lowercase, trimmed lines. Empty lines are kept so that
/// line numbers stay aligned with the vector table.
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| Error::io(format!("open {}", path.display()), e))?;
    BufReader::new(file)
        .lines()
        .map(|line| {
            line.map(|l| l.trim().to_lowercase())
                .map_err(|e| Error::io(format!("read {}", path.display()), e))
        })
        .collect()
}

/// Read the codename list, keeping only words the space knows.
///
/// Multi-word codenames are joined with `-`. Duplicates are dropped so a
/// board sampled from the list never repeats a word.
pub fn read_codenames(path: &Path, space: &EmbeddingSpace) -> Result<Vec<String>> {
    let mut seen = FxHashSet::default();
    let mut codenames = Vec::new();
    for line in read_lines(path)? {
        let word = line.replace(' ', "-");
        if word.is_empty() || !space.contains(&word) {
            continue;
        }
        if seen.insert(word.clone()) {
            codenames.push(word);
        }
    }
    Ok(codenames)
}

pub fn read_vector_table(path: &Path) -> Result<VectorTable> {
    let file = File::open(path).map_err(|e| Error::io(format!("open {}", path.display()), e))?;
    Ok(bincode::deserialize_from(BufReader::new(file))?)
}

pub fn write_vector_table(path: &Path, table: &VectorTable) -> Result<()> {
    let file =
        File::create(path).map_err(|e| Error::io(format!("create {}", path.display()), e))?;
    let mut writer = BufWriter::new(file);
    bincode::serialize_into(&mut writer, table)?;
    writer
        .flush()
        .map_err(|e| Error::io(format!("write {}", path.display()), e))
}

/// Summary of a GloVe conversion.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ConvertStats {
    /// Lines read from the dump.
    pub lines: usize,
    /// Rows written (purely alphabetic words).
    pub kept: usize,
    /// Vector width.
    pub dim: usize,
}

/// Convert a whitespace-separated GloVe text dump into `words` and
/// `vectors.bin` inside `out_dir`.
///
/// Only purely alphabetic words are kept. Every kept vector is normalised
/// to unit length.
pub fn convert_glove(input: &Path, out_dir: &Path) -> Result<ConvertStats> {
    let file = File::open(input).map_err(|e| Error::io(format!("open {}", input.display()), e))?;
    let mut stats = ConvertStats::default();
    let mut words = Vec::new();
    let mut data = Vec::new();

    for (counter, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|e| Error::io(format!("read {}", input.display()), e))?;
        stats.lines += 1;

        let mut fields = line.split_whitespace();
        let Some(word) = fields.next() else {
            continue;
        };
        let word = word.to_lowercase();
        if !word.chars().all(char::is_alphabetic) {
            continue;
        }

        let mut row = fields
            .map(str::parse::<f32>)
            .collect::<std::result::Result<Vec<f32>, _>>()
            .map_err(|e| Error::config(format!("line {}: bad number: {}", counter + 1, e)))?;

        if words.is_empty() {
            stats.dim = row.len();
        } else if row.len() != stats.dim {
            return Err(Error::LoadIntegrity {
                words: words.len() + 1,
                rows: words.len(),
                stage: format!(
                    "line {} has {} values instead of {}",
                    counter + 1,
                    row.len(),
                    stats.dim
                ),
            });
        }

        let norm = row.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > 0.0 {
            row.iter_mut().for_each(|x| *x /= norm);
        }
        data.extend_from_slice(&row);
        words.push(word);

        if counter % 10_000 == 0 {
            debug!(processed = counter, "converting");
        }
    }
    stats.kept = words.len();

    fs::create_dir_all(out_dir)
        .map_err(|e| Error::io(format!("create {}", out_dir.display()), e))?;
    write_vector_table(
        &out_dir.join(DataConfig::VECTORS_FILE),
        &VectorTable::new(stats.dim, data),
    )?;
    let words_path = out_dir.join(DataConfig::WORDS_FILE);
    fs::write(&words_path, words.join("\n"))
        .map_err(|e| Error::io(format!("write {}", words_path.display()), e))?;

    info!(lines = stats.lines, kept = stats.kept, dim = stats.dim, "conversion done");
    Ok(stats)
}
