//! Print random points on the unit simplex, one per line.
//!
//! ```text
//! simsam --algorithm kraemer -n 3 -N 5 --seed 7
//! RUST_LOG=simsam=debug simsam --algorithm naive -n 4
//! ```

use clap::{Parser, ValueEnum};
use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simsam::{KraemerSampler, NaiveSampler, SampleBatch, SimplexSampler, DEFAULT_BOUND};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Algorithm {
    /// Stick-breaking; fast but not uniform.
    Naive,
    /// Uniform via integer order statistics.
    Kraemer,
}

#[derive(Debug, Parser)]
#[command(name = "simsam", version, about = "Sample points on the unit simplex")]
struct Args {
    /// Sampling algorithm.
    #[arg(short, long, value_enum, default_value_t = Algorithm::Kraemer)]
    algorithm: Algorithm,

    /// Simplex dimension (number of coordinates per point).
    #[arg(short = 'n', long = "dim", default_value_t = 3)]
    dim: usize,

    /// Number of points.
    #[arg(short = 'N', long = "count", default_value_t = 10)]
    count: usize,

    /// Seed for a reproducible run.
    #[arg(short, long)]
    seed: Option<u64>,

    /// Kraemer only: allow exact zeros (sample the closed simplex).
    #[arg(long)]
    allow_zeros: bool,

    /// Kraemer only: integer bound of the cut range.
    #[arg(long, default_value_t = DEFAULT_BOUND)]
    bound: u64,
}

fn sample<S: SimplexSampler>(
    sampler: &S,
    args: &Args,
) -> Result<SampleBatch, simsam::SimplexError> {
    match args.seed {
        Some(seed) => {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            sampler.sample_with_rng(args.dim, args.count, &mut rng)
        }
        None => sampler.sample_with_rng(args.dim, args.count, &mut rand::rng()),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args = Args::parse();
    info!("{args:?}");

    let batch = match args.algorithm {
        Algorithm::Naive => sample(&NaiveSampler, &args)?,
        Algorithm::Kraemer => {
            let sampler = KraemerSampler::new()
                .with_bound(args.bound)
                .with_full_support(!args.allow_zeros);
            sample(&sampler, &args)?
        }
    };

    for row in &batch {
        let line: Vec<String> = row.iter().map(f64::to_string).collect();
        println!("{}", line.join(" "));
    }

    Ok(())
}
