//! Word vocabulary and its unit-normalised vector table.
//!
//! ## Layout
//!
//! Vectors are stored row-major in a single `Vec<f32>`, one row per
//! vocabulary entry. Rows are normalised at build time so cosine similarity
//! is a plain dot product.
//!
//! ## Integrity
//!
//! The vocabulary and the table must stay aligned through every filtering
//! step. The builder checks this after each step and fails with
//! [`Error::LoadIntegrity`] instead of carrying a misaligned space forward.

use rustc_hash::{FxHashMap, FxHashSet};
use serde::{Deserialize, Serialize};

use crate::core::{Error, Result};

/// Dense vector table as stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VectorTable {
    /// Width of every row.
    pub dim: usize,

    /// Row-major data, `rows * dim` values.
    pub data: Vec<f32>,
}

impl VectorTable {
    pub fn new(dim: usize, data: Vec<f32>) -> Self {
        Self { dim, data }
    }

    /// Build a table from individual rows. All rows must share one width.
    pub fn from_rows(rows: &[Vec<f32>]) -> Result<Self> {
        let dim = rows.first().map_or(0, Vec::len);
        let mut data = Vec::with_capacity(rows.len() * dim);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != dim {
                return Err(Error::LoadIntegrity {
                    words: rows.len(),
                    rows: i,
                    stage: format!("row {} has width {} instead of {}", i, row.len(), dim),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self { dim, data })
    }

    /// Number of complete rows.
    #[must_use]
    pub fn rows(&self) -> usize {
        if self.dim == 0 {
            0
        } else {
            self.data.len() / self.dim
        }
    }

    fn is_rectangular(&self) -> bool {
        if self.dim == 0 {
            self.data.is_empty()
        } else {
            self.data.len() % self.dim == 0
        }
    }

    fn remove_rows(&mut self, sorted: &[usize]) {
        if sorted.is_empty() {
            return;
        }
        let dim = self.dim;
        let mut skip = sorted.iter().peekable();
        let mut kept = Vec::with_capacity(self.data.len().saturating_sub(sorted.len() * dim));
        for (i, row) in self.data.chunks_exact(dim).enumerate() {
            if skip.peek() == Some(&&i) {
                skip.next();
                continue;
            }
            kept.extend_from_slice(row);
        }
        self.data = kept;
    }

    fn truncate(&mut self, rows: usize) {
        self.data.truncate(rows * self.dim);
    }

    fn normalize(&mut self) {
        if self.dim == 0 {
            return;
        }
        for row in self.data.chunks_exact_mut(self.dim) {
            let norm = dot(row, row).sqrt();
            if norm > 0.0 {
                row.iter_mut().for_each(|x| *x /= norm);
            }
        }
    }
}

/// Dot product of two equally sized vectors.
#[inline]
#[must_use]
pub fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Vocabulary plus unit vectors, read-only after construction.
#[derive(Clone, Debug)]
pub struct EmbeddingSpace {
    words: Vec<String>,
    table: VectorTable,
    weirdness: Vec<f32>,
    index: FxHashMap<String, usize>,
}

/// Builder applying stop-word removal and vocabulary truncation.
pub struct EmbeddingSpaceBuilder {
    words: Vec<String>,
    table: VectorTable,
    stopwords: Option<FxHashSet<String>>,
    limit: Option<usize>,
}

impl EmbeddingSpaceBuilder {
    /// Drop every vocabulary entry in `stopwords`, together with its row.
    #[must_use]
    pub fn without_stopwords(mut self, stopwords: FxHashSet<String>) -> Self {
        self.stopwords = Some(stopwords);
        self
    }

    /// Keep only the first `limit` entries.
    #[must_use]
    pub fn limit_vocab(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn build(self) -> Result<EmbeddingSpace> {
        let Self {
            mut words,
            mut table,
            stopwords,
            limit,
        } = self;

        if !table.is_rectangular() {
            return Err(Error::LoadIntegrity {
                words: words.len(),
                rows: table.rows(),
                stage: "reading the vector table".to_string(),
            });
        }
        check_alignment(&words, &table, "loading")?;

        if let Some(stopwords) = stopwords {
            let removed: Vec<usize> = words
                .iter()
                .enumerate()
                .filter(|(_, w)| stopwords.contains(w.as_str()))
                .map(|(i, _)| i)
                .collect();
            words.retain(|w| !stopwords.contains(w.as_str()));
            table.remove_rows(&removed);
            check_alignment(&words, &table, "stopword removal")?;
        }

        if let Some(limit) = limit {
            words.truncate(limit);
            table.truncate(limit);
            check_alignment(&words, &table, "vocabulary truncation")?;
        }

        table.normalize();

        let mut index = FxHashMap::default();
        index.reserve(words.len());
        for (i, word) in words.iter().enumerate() {
            index.entry(word.clone()).or_insert(i);
        }

        let weirdness = (0..words.len())
            .map(|i| ((i + 1) as f32).ln() + 1.0)
            .collect();

        Ok(EmbeddingSpace {
            words,
            table,
            weirdness,
            index,
        })
    }
}

fn check_alignment(words: &[String], table: &VectorTable, stage: &str) -> Result<()> {
    if words.len() != table.rows() {
        return Err(Error::LoadIntegrity {
            words: words.len(),
            rows: table.rows(),
            stage: stage.to_string(),
        });
    }
    Ok(())
}

impl EmbeddingSpace {
    /// Start building a space from an aligned vocabulary and table.
    pub fn builder(words: Vec<String>, table: VectorTable) -> EmbeddingSpaceBuilder {
        EmbeddingSpaceBuilder {
            words,
            table,
            stopwords: None,
            limit: None,
        }
    }

    /// Build a space directly from `(word, vector)` pairs.
    pub fn from_pairs<S: Into<String>>(pairs: Vec<(S, Vec<f32>)>) -> Result<Self> {
        let (words, rows): (Vec<String>, Vec<Vec<f32>>) =
            pairs.into_iter().map(|(w, v)| (w.into(), v)).unzip();
        let table = VectorTable::from_rows(&rows)?;
        Self::builder(words, table).build()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Vector width.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.table.dim
    }

    /// Word at a vocabulary index.
    #[must_use]
    pub fn word(&self, index: usize) -> &str {
        &self.words[index]
    }

    /// All vocabulary words in index order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Index of a word, or `UnknownWord`.
    pub fn index_of(&self, word: &str) -> Result<usize> {
        self.index
            .get(word)
            .copied()
            .ok_or_else(|| Error::UnknownWord {
                word: word.to_string(),
            })
    }

    /// Unit vector at a vocabulary index.
    #[must_use]
    pub fn row(&self, index: usize) -> &[f32] {
        let dim = self.table.dim;
        &self.table.data[index * dim..(index + 1) * dim]
    }

    /// Unit vector of a single word.
    pub fn vector_of(&self, word: &str) -> Result<&[f32]> {
        Ok(self.row(self.index_of(word)?))
    }

    /// Unit vectors of several words, one row per word.
    ///
    /// Fails on the first unknown word.
    pub fn vectors_of<S: AsRef<str>>(&self, words: &[S]) -> Result<Vec<&[f32]>> {
        words.iter().map(|w| self.vector_of(w.as_ref())).collect()
    }

    /// Cosine similarity between two vocabulary words.
    pub fn similarity(&self, a: &str, b: &str) -> Result<f32> {
        Ok(dot(self.vector_of(a)?, self.vector_of(b)?))
    }

    /// Rarity proxy, increasing with the vocabulary index.
    #[must_use]
    pub fn weirdness(&self, index: usize) -> f32 {
        self.weirdness[index]
    }

    /// Iterate `(index, word, vector)` over the whole vocabulary.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &str, &[f32])> + '_ {
        self.words
            .iter()
            .enumerate()
            .map(move |(i, w)| (i, w.as_str(), self.row(i)))
    }
}
