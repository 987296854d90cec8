//! Ranker - orders a similarity row into the top-N result indices.

use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_TOP_N;

/// A corpus row with its similarity score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredIndex {
    /// Row position in the corpus
    pub index: usize,
    /// Cosine similarity to the query
    pub score: f64,
}

/// Sorts similarity rows descending with ties in corpus order
#[derive(Debug, Clone, Copy)]
pub struct Ranker {
    top_n: usize,
}

impl Default for Ranker {
    fn default() -> Self {
        Self::new(DEFAULT_TOP_N)
    }
}

impl Ranker {
    /// Ranker returning `top_n` results
    pub fn new(top_n: usize) -> Self {
        Self { top_n }
    }

    /// Configured result count
    pub fn top_n(&self) -> usize {
        self.top_n
    }

    /// Rank "similar to a known record": the record itself is excluded
    pub fn rank_similar(&self, row: &[f64], own_index: usize) -> Vec<ScoredIndex> {
        rank(row, Some(own_index), self.top_n)
    }

    /// Rank a free-text query row: nothing is excluded
    pub fn rank_query(&self, row: &[f64]) -> Vec<ScoredIndex> {
        rank(row, None, self.top_n)
    }
}

/// Stable descending sort of a row, optionally excluding one index, then
/// truncated to `n`.
pub fn rank(row: &[f64], exclude: Option<usize>, n: usize) -> Vec<ScoredIndex> {
    let mut scored: Vec<ScoredIndex> = row
        .iter()
        .enumerate()
        .filter(|(index, _)| Some(*index) != exclude)
        .map(|(index, &score)| ScoredIndex { index, score })
        .collect();

    // sort_by is stable, so equal scores keep corpus order.
    scored.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    scored.truncate(n);
    scored
}
