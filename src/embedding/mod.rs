//! Word embedding space and its on-disk data set.

pub mod loader;
pub mod space;

pub use loader::{convert_glove, load_dataset, ConvertStats, Dataset};
pub use space::{dot, EmbeddingSpace, EmbeddingSpaceBuilder, VectorTable};
