//! `simsam`: random points on the unit simplex.
//!
//! A point on the unit `n`-simplex is a vector of `n` non-negative reals
//! summing to 1, i.e. a probability distribution over `n` outcomes.
//!
//! Exposed modules:
//! - `naive`: stick-breaking sampler. Fast, but **not** uniform.
//! - `kraemer`: uniform sampler from integer order statistics, with or
//!   without full support.
//! - `distinct`: distinct integers without replacement from a wide range
//!   (Floyd's algorithm).
//! - `batch`: the `(N, n)` result table.
//!
//! Every sampler has a `*_with_rng` entrypoint for reproducible runs; the
//! plain variants draw from `rand::rng()`. Nothing here holds global RNG state.

#![forbid(unsafe_code)]

use rand::Rng;

pub mod batch;
pub mod distinct;
pub mod error;
pub mod kraemer;
pub mod naive;

pub use batch::SampleBatch;
pub use error::SimplexError;
pub use kraemer::{
    kraemer_sampling, kraemer_sampling_with_rng, point_from_cuts, KraemerSampler, DEFAULT_BOUND,
};
pub use naive::{naive_sampling, naive_sampling_with_rng, stick_breaking, NaiveSampler};

/// A sampler producing batches of points on the unit simplex.
pub trait SimplexSampler {
    /// Sample `count` points on the `n`-simplex.
    fn sample_with_rng<R: Rng + ?Sized>(
        &self,
        n: usize,
        count: usize,
        rng: &mut R,
    ) -> Result<SampleBatch, SimplexError>;
}
