//! Uniform simplex sampling from integer order statistics (Kraemer).
//!
//! Pick `n - 1` distinct cut points uniformly from `[1, M - 1]`, sort them,
//! and bracket with `0` and `M`:
//!
//! \[
//! 0 = x_0 < x_1 < \dots < x_{n-1} < x_n = M
//! \]
//!
//! The gaps `g_i = x_{i+1} - x_i` telescope to `M`. Normalized, they are
//! uniform on the simplex:
//!
//! - full support: `p_i = g_i / M`. Every gap is at least 1, so every
//!   coordinate is strictly positive.
//! - without full support: `p_i = (g_i - 1) / (M - n)`. The shifted gaps are a
//!   uniform composition of `M - n` into `n` non-negative parts, so points on
//!   the boundary faces (exact zeros) are reachable.
//!
//! `M` defaults to [`DEFAULT_BOUND`] (`2^62`), wide enough that quantization
//! is far below `f64` resolution. Smaller bounds are accepted for testing.
//!
//! ## References
//!
//! - Smith & Tromble (2004): *Sampling Uniformly from the Unit Simplex*.
//! - Devroye (1986): *Non-Uniform Random Variate Generation*, ch. V.

use log::{debug, trace};
use rand::prelude::*;

use crate::batch::SampleBatch;
use crate::distinct::sample_distinct_sorted;
use crate::error::{check_request, SimplexError};
use crate::SimplexSampler;

/// Default integer bound `M = 2^62`.
pub const DEFAULT_BOUND: u64 = 1 << 62;

/// Simplex point from sorted, distinct cuts in `[1, bound - 1]`.
///
/// Returns `cuts.len() + 1` coordinates. With `full_support = false` the
/// caller must keep `cuts.len() + 1 < bound`.
///
/// ```
/// use simsam::kraemer::point_from_cuts;
/// assert_eq!(point_from_cuts(&[2, 5, 8], 10, true), vec![0.2, 0.3, 0.3, 0.2]);
/// ```
pub fn point_from_cuts(cuts: &[u64], bound: u64, full_support: bool) -> Vec<f64> {
    let mut point = Vec::with_capacity(cuts.len() + 1);
    fill_from_cuts(cuts, bound, full_support, &mut point);
    point
}

fn fill_from_cuts(cuts: &[u64], bound: u64, full_support: bool, point: &mut Vec<f64>) {
    debug_assert!(cuts.windows(2).all(|w| w[0] < w[1]));
    debug_assert!(cuts.iter().all(|&c| c > 0 && c < bound));

    let gaps = cuts
        .iter()
        .chain(std::iter::once(&bound))
        .scan(0u64, |prev, &x| {
            let gap = x - *prev;
            *prev = x;
            Some(gap)
        });

    if full_support {
        let scale = bound as f64;
        point.extend(gaps.map(|g| g as f64 / scale));
    } else {
        let scale = (bound - (cuts.len() as u64 + 1)) as f64;
        point.extend(gaps.map(|g| (g - 1) as f64 / scale));
    }
}

/// Uniform simplex sampler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KraemerSampler {
    bound: u64,
    full_support: bool,
}

impl Default for KraemerSampler {
    fn default() -> Self {
        Self::new()
    }
}

impl KraemerSampler {
    /// Sampler with bound [`DEFAULT_BOUND`] and full support.
    pub fn new() -> Self {
        Self {
            bound: DEFAULT_BOUND,
            full_support: true,
        }
    }

    /// Set the integer bound `M`.
    pub fn with_bound(mut self, bound: u64) -> Self {
        self.bound = bound;
        self
    }

    /// Allow (`false`) or exclude (`true`) exact zeros.
    pub fn with_full_support(mut self, full_support: bool) -> Self {
        self.full_support = full_support;
        self
    }

    pub fn bound(&self) -> u64 {
        self.bound
    }

    pub fn full_support(&self) -> bool {
        self.full_support
    }

    /// Sample `count` points on the `n`-simplex using `rand::rng()`.
    pub fn sample(&self, n: usize, count: usize) -> Result<SampleBatch, SimplexError> {
        let mut rng = rand::rng();
        self.sample_with_rng(n, count, &mut rng)
    }

    /// Sample `count` points on the `n`-simplex with a caller-supplied RNG.
    ///
    /// # Errors
    ///
    /// - [`SimplexError::InvalidArgument`] if `n < 2`, `count < 1`, or the
    ///   bound is below 2.
    /// - [`SimplexError::DimensionTooLarge`] if `[1, M - 1]` holds fewer than
    ///   `n - 1` integers, or, without full support, if `n >= M`.
    pub fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<SampleBatch, SimplexError> {
        self.check(n, count)?;
        debug!(
            "kraemer: sampling {count} points on the {n}-simplex (bound={}, full_support={})",
            self.bound, self.full_support
        );

        let mut batch = SampleBatch::with_capacity(n, count);
        let mut point = Vec::with_capacity(n);

        for _ in 0..count {
            let cuts = sample_distinct_sorted(rng, 1, self.bound - 1, n - 1);
            trace!("kraemer: cuts {cuts:?}");

            point.clear();
            fill_from_cuts(&cuts, self.bound, self.full_support, &mut point);
            batch.push(&point);
        }

        Ok(batch)
    }

    fn check(&self, n: usize, count: usize) -> Result<(), SimplexError> {
        check_request(n, count)?;
        if self.bound < 2 {
            return Err(SimplexError::InvalidArgument(format!(
                "bound must be >= 2 (got {})",
                self.bound
            )));
        }

        let too_large = match u64::try_from(n) {
            Ok(dim) if self.full_support => dim > self.bound,
            Ok(dim) => dim >= self.bound,
            Err(_) => true,
        };
        if too_large {
            return Err(SimplexError::DimensionTooLarge {
                dim: n,
                bound: self.bound,
            });
        }
        Ok(())
    }
}

impl SimplexSampler for KraemerSampler {
    fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<SampleBatch, SimplexError> {
        KraemerSampler::sample_with_rng(self, n, count, rng)
    }
}

/// Sample `count` uniform points on the `n`-simplex with bound [`DEFAULT_BOUND`].
///
/// # Errors
///
/// [`SimplexError::InvalidArgument`] if `n < 2` or `count < 1`.
pub fn kraemer_sampling(
    n: usize,
    count: usize,
    full_support: bool,
) -> Result<SampleBatch, SimplexError> {
    let mut rng = rand::rng();
    kraemer_sampling_with_rng(n, count, full_support, &mut rng)
}

/// [`kraemer_sampling`] with a caller-supplied RNG.
pub fn kraemer_sampling_with_rng<R: Rng + ?Sized>(
    n: usize,
    count: usize,
    full_support: bool,
    rng: &mut R,
) -> Result<SampleBatch, SimplexError> {
    KraemerSampler::new()
        .with_full_support(full_support)
        .sample_with_rng(n, count, rng)
}
