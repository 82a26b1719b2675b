//! Stick-breaking simplex sampler.
//!
//! Draws `a_0, ..., a_{n-2} ~ Uniform[0, 1)` and breaks a fraction `a_i` off
//! whatever is left of the unit stick:
//!
//! \[
//! p_i = a_i \prod_{j<i} (1 - a_j), \qquad p_{n-1} = 1 - \sum_{i<n-1} p_i
//! \]
//!
//! The result always lies on the simplex, but it is **not uniform**: earlier
//! coordinates take more mass than later ones (for `n = 3`, `p_0` is uniform
//! on `[0, 1)` with mean 1/2, against 1/3 under the uniform simplex). Use
//! [`crate::kraemer`] when the distribution matters; this is a fast baseline.
//!
//! Notes:
//! - `naive_sampling` uses `rand::rng()`; `naive_sampling_with_rng` is the
//!   deterministic entrypoint.

use log::{debug, trace};
use rand::prelude::*;

use crate::batch::SampleBatch;
use crate::error::{check_request, SimplexError};
use crate::SimplexSampler;

/// Stick-breaking point from `n - 1` break fractions.
///
/// `fractions` should lie in `[0, 1)`; the returned point has
/// `fractions.len() + 1` coordinates.
///
/// ```
/// use simsam::naive::stick_breaking;
/// assert_eq!(stick_breaking(&[0.5, 0.5]), vec![0.5, 0.25, 0.25]);
/// ```
pub fn stick_breaking(fractions: &[f64]) -> Vec<f64> {
    let mut point = Vec::with_capacity(fractions.len() + 1);
    fill_stick_breaking(fractions, &mut point);
    point
}

fn fill_stick_breaking(fractions: &[f64], point: &mut Vec<f64>) {
    let mut remaining = 1.0;
    let mut sum = 0.0;
    for &a in fractions {
        let p = a * remaining;
        remaining *= 1.0 - a;
        sum += p;
        point.push(p);
    }
    point.push(1.0 - sum);
}

/// Sample `count` points on the `n`-simplex by stick-breaking.
///
/// # Errors
///
/// [`SimplexError::InvalidArgument`] if `n < 2` or `count < 1`.
pub fn naive_sampling(n: usize, count: usize) -> Result<SampleBatch, SimplexError> {
    let mut rng = rand::rng();
    naive_sampling_with_rng(n, count, &mut rng)
}

/// [`naive_sampling`] with a caller-supplied RNG.
pub fn naive_sampling_with_rng<R: Rng + ?Sized>(
    n: usize,
    count: usize,
    rng: &mut R,
) -> Result<SampleBatch, SimplexError> {
    check_request(n, count)?;
    debug!("naive: sampling {count} points on the {n}-simplex");

    let mut batch = SampleBatch::with_capacity(n, count);
    let mut fractions = Vec::with_capacity(n - 1);
    let mut point = Vec::with_capacity(n);

    for _ in 0..count {
        fractions.clear();
        fractions.extend((0..n - 1).map(|_| rng.random::<f64>()));

        point.clear();
        fill_stick_breaking(&fractions, &mut point);
        trace!("naive: point {point:?}");
        batch.push(&point);
    }

    Ok(batch)
}

/// Stick-breaking sampler as a [`SimplexSampler`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NaiveSampler;

impl SimplexSampler for NaiveSampler {
    fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<SampleBatch, SimplexError> {
        naive_sampling_with_rng(n, count, rng)
    }
}
