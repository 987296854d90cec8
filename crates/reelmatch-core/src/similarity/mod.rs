//! Similarity Module
//!
//! Cosine similarity between feature vectors and ranking of similarity rows.

mod matrix;
mod ranker;

pub use matrix::{cosine_row, cosine_similarity, SimilarityMatrix};
pub use ranker::{rank, Ranker, ScoredIndex};
