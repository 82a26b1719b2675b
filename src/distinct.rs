//! Distinct integers drawn without replacement from a wide range.
//!
//! Uses **Floyd's algorithm** (Bentley & Floyd, 1987): to pick `k` values from
//! `[low, high]`, walk `j` over the last `k` positions of the range, draw
//! `t ~ Uniform[low, j]`, and keep `t` unless it was already chosen, in which
//! case keep `j`. Every `k`-subset is equally likely.
//!
//! Cost is `k` RNG calls and O(k log k) set work, independent of the width of
//! the range, so ranges on the order of `2^62` are fine.
//!
//! ## References
//!
//! - Bentley & Floyd (1987): *Programming Pearls: A Sample of Brilliance*.

use std::collections::BTreeSet;

use rand::prelude::*;

/// Draw `k` distinct integers uniformly from `[low, high]`, returned ascending.
///
/// # Panics
///
/// Panics if `low > high` or if `k` exceeds the number of integers in the range.
pub fn sample_distinct_sorted<R: Rng + ?Sized>(
    rng: &mut R,
    low: u64,
    high: u64,
    k: usize,
) -> Vec<u64> {
    assert!(low <= high, "sample_distinct_sorted: low must be <= high");
    let width = high - low;
    assert!(
        (k as u64).saturating_sub(1) <= width,
        "sample_distinct_sorted: k must not exceed the range size"
    );
    if k == 0 {
        return Vec::new();
    }

    let mut chosen = BTreeSet::new();
    let first = high - (k as u64 - 1);
    for j in first..=high {
        let t = rng.random_range(low..=j);
        if !chosen.insert(t) {
            chosen.insert(j);
        }
    }

    chosen.into_iter().collect()
}
