use proptest::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use simsam::distinct::sample_distinct_sorted;
use simsam::{
    kraemer_sampling_with_rng, naive_sampling_with_rng, point_from_cuts, stick_breaking,
    KraemerSampler, NaiveSampler, SampleBatch, SimplexError, SimplexSampler,
};

fn check_simplex_rows(batch: &SampleBatch, n: usize, count: usize) -> Result<(), TestCaseError> {
    prop_assert_eq!(batch.len(), count);
    prop_assert_eq!(batch.dim(), n);
    for row in batch {
        prop_assert_eq!(row.len(), n);
        prop_assert!(row.iter().all(|x| x.is_finite()));
        prop_assert!(row.iter().all(|&x| x >= -1e-12), "row {:?}", row);
        let sum: f64 = row.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }
    Ok(())
}

proptest! {
    #[test]
    fn prop_naive_rows_on_simplex(
        n in 2usize..40,
        count in 1usize..50,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let batch = naive_sampling_with_rng(n, count, &mut rng).expect("valid request");
        check_simplex_rows(&batch, n, count)?;
    }

    #[test]
    fn prop_kraemer_rows_on_simplex(
        n in 2usize..40,
        count in 1usize..50,
        full_support in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let batch =
            kraemer_sampling_with_rng(n, count, full_support, &mut rng).expect("valid request");
        check_simplex_rows(&batch, n, count)?;
        if full_support {
            prop_assert!(batch.as_slice().iter().all(|&x| x > 0.0));
        }
    }

    #[test]
    fn prop_kraemer_small_bound_on_simplex(
        n in 2usize..12,
        extra in 1u64..30,
        full_support in any::<bool>(),
        seed in any::<u64>(),
    ) {
        // Smallest bound that admits n without full support is n + 1.
        let bound = n as u64 + extra;
        let sampler = KraemerSampler::new()
            .with_bound(bound)
            .with_full_support(full_support);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let batch = sampler.sample_with_rng(n, 20, &mut rng).expect("valid request");
        check_simplex_rows(&batch, n, 20)?;
    }

    #[test]
    fn prop_invalid_requests_rejected(
        n in 0usize..2,
        count in 0usize..5,
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let naive = NaiveSampler.sample_with_rng(n, count, &mut rng);
        prop_assert!(matches!(naive, Err(SimplexError::InvalidArgument(_))));
        let kraemer = KraemerSampler::new().sample_with_rng(n, count, &mut rng);
        prop_assert!(matches!(kraemer, Err(SimplexError::InvalidArgument(_))));

        let empty = NaiveSampler.sample_with_rng(3, 0, &mut rng);
        prop_assert!(matches!(empty, Err(SimplexError::InvalidArgument(_))));
    }
}

proptest! {
    #[test]
    fn prop_stick_breaking_is_distribution(
        fractions in prop::collection::vec(0.0f64..1.0, 1..30),
    ) {
        let p = stick_breaking(&fractions);
        prop_assert_eq!(p.len(), fractions.len() + 1);
        prop_assert!(p.iter().all(|&x| x >= -1e-12));
        let sum: f64 = p.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn prop_cuts_to_gaps_sum_to_one(
        bound in 4u64..10_000,
        k in 1usize..3,
        full_support in any::<bool>(),
        seed in any::<u64>(),
    ) {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cuts = sample_distinct_sorted(&mut rng, 1, bound - 1, k);
        let p = point_from_cuts(&cuts, bound, full_support);
        prop_assert_eq!(p.len(), k + 1);
        prop_assert!(p.iter().all(|&x| x >= 0.0));
        let sum: f64 = p.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
    }

    #[test]
    fn prop_distinct_draws_are_sorted_and_in_range(
        low in 0u64..1_000,
        width in 0u64..1_000,
        k in 0usize..50,
        seed in any::<u64>(),
    ) {
        let high = low + width;
        let k = std::cmp::min(k as u64, width + 1) as usize;
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let xs = sample_distinct_sorted(&mut rng, low, high, k);

        prop_assert_eq!(xs.len(), k);
        prop_assert!(xs.windows(2).all(|w| w[0] < w[1]));
        prop_assert!(xs.iter().all(|&x| x >= low && x <= high));
    }
}
