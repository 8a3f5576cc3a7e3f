//! Clue engine: candidate filtering and clue selection.
//!
//! - `filter`: reduces the vocabulary to words that may be given as clues
//! - `selector`: scores candidates against the remaining agent words
//! - `morphology`: spelling-closeness checks used by the filter

pub mod filter;
pub mod morphology;
pub mod selector;

pub use filter::{CandidateFilter, CandidatePool};
pub use morphology::{edit_distance, is_ing_variant, too_similar};
pub use selector::{Clue, ClueSelector};
