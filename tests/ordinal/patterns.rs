// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use approx::assert_abs_diff_eq;
use ndarray::{array, Array1};
use ordpat::{ordinal_patterns, pattern_codes, weighted_ordinal_patterns, Embedding, OrdinalError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rstest::rstest;

fn random_series(len: usize, seed: u64) -> Array1<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Array1::from((0..len).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<f64>>())
}

#[test]
fn worked_example_dimension_three() {
    // Windows (most recent first): [9,7,4] [10,9,7] [6,10,9] [11,6,10] [3,11,6]
    // Patterns: 5, 5, 1, 3, 1 -> counts by ascending index: {1: 2, 3: 1, 5: 2}
    let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];

    let emb = Embedding::new(3, 1).unwrap();
    let codes = pattern_codes(&series, &emb).unwrap();
    assert_eq!(codes, array![5, 5, 1, 3, 1]);

    let counts = ordinal_patterns(&series, 3, 1).unwrap();
    assert_eq!(counts, vec![2, 1, 2]);
    assert_eq!(counts.iter().sum::<u64>(), 5);
    assert!(counts.len() <= 6);
}

#[test]
fn worked_example_weighted() {
    // Window variances: 38/9, 14/9, 26/9, 14/3, 98/9 summed into the same
    // buckets as the unweighted case: {1: 26/9 + 98/9, 3: 14/3, 5: 38/9 + 14/9}
    let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
    let weights = weighted_ordinal_patterns(&series, 3, 1).unwrap();
    assert_eq!(weights.len(), 3);
    assert_abs_diff_eq!(weights[0], 124.0 / 9.0, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[1], 14.0 / 3.0, epsilon = 1e-12);
    assert_abs_diff_eq!(weights[2], 52.0 / 9.0, epsilon = 1e-12);
}

#[test]
fn delayed_embedding_skips_samples() {
    // m=2, t=2: windows [x[j], x[j-2]] for j = 2..=5
    // [2,1] -> 1, [4,5] -> 0, [3,2] -> 1, [6,4] -> 1
    let series = array![1.0, 5.0, 2.0, 4.0, 3.0, 6.0];
    let counts = ordinal_patterns(&series, 2, 2).unwrap();
    assert_eq!(counts, vec![1, 3]);
}

#[rstest]
#[case(2, 1)]
#[case(3, 1)]
#[case(3, 2)]
#[case(4, 1)]
#[case(5, 3)]
fn counts_sum_to_window_count(#[case] dim: usize, #[case] delay: usize) {
    for seed in 0..5 {
        let len = 200;
        let series = random_series(len, seed);
        let counts = ordinal_patterns(&series, dim, delay).unwrap();
        let expected = (len - delay * (dim - 1)) as u64;
        assert_eq!(counts.iter().sum::<u64>(), expected);

        let fact: u64 = (1..=dim as u64).product();
        assert!(counts.len() as u64 <= fact);
    }
}

#[test]
fn constant_series_has_one_pattern_but_no_weight() {
    let series = Array1::from_elem(50, 3.7);
    // Ties all resolve the same way, so every window lands in one bucket
    let counts = ordinal_patterns(&series, 3, 1).unwrap();
    assert_eq!(counts, vec![48]);
    // Every window has zero variance, so the weighted histogram is empty
    let weights = weighted_ordinal_patterns(&series, 3, 1).unwrap();
    assert!(weights.is_empty());
}

#[test]
fn monotone_series_yields_a_single_bucket() {
    let series = Array1::from_iter((0..30).map(f64::from));
    let counts = ordinal_patterns(&series, 4, 1).unwrap();
    assert_eq!(counts, vec![27]);
}

#[rstest]
#[case(1, 1, OrdinalError::InvalidDimension { dim: 1 })]
#[case(0, 1, OrdinalError::InvalidDimension { dim: 0 })]
#[case(21, 1, OrdinalError::DimensionTooLarge { dim: 21 })]
#[case(3, 0, OrdinalError::InvalidDelay { delay: 0 })]
fn invalid_parameters_are_rejected(
    #[case] dim: usize,
    #[case] delay: usize,
    #[case] expected: OrdinalError,
) {
    let series = random_series(100, 7);
    assert_eq!(ordinal_patterns(&series, dim, delay), Err(expected.clone()));
    assert_eq!(weighted_ordinal_patterns(&series, dim, delay), Err(expected));
}

#[test]
fn short_series_is_rejected_not_empty() {
    // m=4, t=2 needs at least 2*3 + 1 = 7 samples
    let series = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
    let err = OrdinalError::InsufficientData { needed: 7, got: 6 };
    assert_eq!(ordinal_patterns(&series, 4, 2), Err(err.clone()));
    assert_eq!(weighted_ordinal_patterns(&series, 4, 2), Err(err.clone()));
    let emb = Embedding::new(4, 2).unwrap();
    assert_eq!(pattern_codes(&series, &emb), Err(err));

    // Exactly the minimum length gives exactly one window
    let series = array![1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0];
    assert_eq!(ordinal_patterns(&series, 4, 2).unwrap(), vec![1]);
}

#[test]
fn weighted_and_unweighted_agree_on_support() {
    // For a series with no zero-variance windows, both variants observe the
    // same patterns in the same order
    let series = random_series(300, 42);
    let counts = ordinal_patterns(&series, 3, 1).unwrap();
    let weights = weighted_ordinal_patterns(&series, 3, 1).unwrap();
    assert_eq!(counts.len(), weights.len());
    assert!(weights.iter().all(|&w| w > 0.0));
}
