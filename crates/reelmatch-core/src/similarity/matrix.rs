//! Pairwise cosine similarity over the corpus vectors.

use crate::vectorize::SparseVector;

/// Cosine similarity of two sparse vectors.
///
/// Returns a value in [0, 1] for non-negative weights; a zero vector is
/// orthogonal to everything.
///
/// ```
/// use reelmatch_core::similarity::cosine_similarity;
/// use reelmatch_core::vectorize::SparseVector;
///
/// let a = SparseVector::from_entries(vec![(0, 1.0), (1, 1.0)]);
/// let b = SparseVector::from_entries(vec![(0, 1.0)]);
/// let sim = cosine_similarity(&a, &b);
/// assert!((sim - 1.0 / 2.0_f64.sqrt()).abs() < 1e-12);
/// ```
pub fn cosine_similarity(a: &SparseVector, b: &SparseVector) -> f64 {
    let norm_a = a.norm();
    let norm_b = b.norm();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (a.dot(b) / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Similarity of a query against every corpus vector (a 1×N row)
pub fn cosine_row(query: &SparseVector, vectors: &[SparseVector]) -> Vec<f64> {
    vectors.iter().map(|v| cosine_similarity(query, v)).collect()
}

/// Symmetric N×N cosine similarity matrix, row-major
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    n: usize,
    data: Vec<f64>,
}

impl SimilarityMatrix {
    /// Compute the matrix for a set of vectors.
    ///
    /// Only the upper triangle is computed; the diagonal is 1.0 for every
    /// record, including records whose vector is zero.
    pub fn from_vectors(vectors: &[SparseVector]) -> Self {
        let n = vectors.len();
        let mut data = vec![0.0; n * n];

        for i in 0..n {
            data[i * n + i] = 1.0;
            for j in (i + 1)..n {
                let sim = cosine_similarity(&vectors[i], &vectors[j]);
                data[i * n + j] = sim;
                data[j * n + i] = sim;
            }
        }

        Self { n, data }
    }

    /// Number of records (rows)
    pub fn len(&self) -> usize {
        self.n
    }

    /// True for an empty corpus
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// similarity(i, j), `None` when either index is out of range
    pub fn get(&self, i: usize, j: usize) -> Option<f64> {
        if i < self.n && j < self.n {
            Some(self.data[i * self.n + j])
        } else {
            None
        }
    }

    /// Row `i`: similarity of record `i` to every record
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        if i < self.n {
            Some(&self.data[i * self.n..(i + 1) * self.n])
        } else {
            None
        }
    }
}
