//! Batches of simplex points.

use std::slice::ChunksExact;

/// `len()` points of dimension `dim()`, stored row-major.
///
/// Each row is one point on the unit simplex: non-negative coordinates
/// summing to 1 (up to floating-point rounding).
#[derive(Debug, Clone, PartialEq)]
pub struct SampleBatch {
    dim: usize,
    data: Vec<f64>,
}

impl SampleBatch {
    /// Empty batch with room for `count` points of dimension `dim`.
    pub(crate) fn with_capacity(dim: usize, count: usize) -> Self {
        debug_assert!(dim > 0);
        Self {
            dim,
            data: Vec::with_capacity(dim * count),
        }
    }

    /// Append one point. `point.len()` must equal `dim`.
    pub(crate) fn push(&mut self, point: &[f64]) {
        debug_assert_eq!(point.len(), self.dim);
        self.data.extend_from_slice(point);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.data.len() / self.dim
    }

    /// True if the batch holds no points.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Dimension of every point.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// The `i`-th point, if any.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let start = i.checked_mul(self.dim)?;
        self.data.get(start..start.checked_add(self.dim)?)
    }

    /// Iterate over the points in order.
    pub fn rows(&self) -> ChunksExact<'_, f64> {
        self.data.chunks_exact(self.dim)
    }

    /// Flat row-major view of all coordinates.
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    /// Consume into the flat row-major buffer.
    pub fn into_vec(self) -> Vec<f64> {
        self.data
    }

    /// Consume into one `Vec` per point.
    pub fn into_rows(self) -> Vec<Vec<f64>> {
        self.rows().map(<[f64]>::to_vec).collect()
    }
}

impl<'a> IntoIterator for &'a SampleBatch {
    type Item = &'a [f64];
    type IntoIter = ChunksExact<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows()
    }
}
