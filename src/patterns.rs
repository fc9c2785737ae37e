// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ordinal-pattern aggregation: per-window codes, occurrence counts, and
//! variance-weighted sums.

use std::collections::BTreeMap;

use ndarray::Array1;

use crate::embedding::Embedding;
use crate::encoding::{argsort, factorials, lehmer_code_with_fact};
use crate::error::Result;

/// Walk every window of the embedding in ascending alignment order, handing
/// the callback each window's Lehmer code and raw values.
fn for_each_window<F>(series: &Array1<f64>, embedding: &Embedding, mut f: F) -> Result<()>
where
    F: FnMut(u64, &[f64]),
{
    let n_windows = embedding.window_count(series.len())?;
    let dim = embedding.dim();
    let span = embedding.span();

    // Reuse buffers across windows to avoid repeated allocations
    let mut window: Vec<f64> = vec![0.0; dim];
    let mut idx: Vec<usize> = (0..dim).collect();
    let fact = factorials(dim);

    for offset in span..span + n_windows {
        embedding.fill_window(series.view(), offset, &mut window);
        argsort(&window, &mut idx);
        let code = lehmer_code_with_fact(&idx, &fact);
        f(code, &window);
    }
    Ok(())
}

/// One Lehmer code per window of `series`, in ascending alignment order.
///
/// Pattern identity is preserved here; the aggregators below discard it.
pub fn pattern_codes(series: &Array1<f64>, embedding: &Embedding) -> Result<Array1<u64>> {
    let n_windows = embedding.window_count(series.len())?;
    let mut codes: Vec<u64> = Vec::with_capacity(n_windows);
    for_each_window(series, embedding, |code, _| codes.push(code))?;
    Ok(Array1::from(codes))
}

/// Occurrence counts of the ordinal patterns of `series` under an embedding
/// of dimension `dim` and delay `delay`.
///
/// Returns the nonzero counts in ascending pattern-index order; which pattern
/// produced which count is not retained. The counts sum to the number of
/// windows, `len - delay*(dim-1)`.
///
/// # Errors
///
/// `InvalidDimension`, `DimensionTooLarge` or `InvalidDelay` for bad
/// parameters; `InsufficientData` when the series is shorter than
/// `delay*(dim-1) + 1`.
pub fn ordinal_patterns(series: &Array1<f64>, dim: usize, delay: usize) -> Result<Vec<u64>> {
    let embedding = Embedding::new(dim, delay)?;
    let mut buckets: BTreeMap<u64, u64> = BTreeMap::new();
    for_each_window(series, &embedding, |code, _| {
        *buckets.entry(code).or_insert(0) += 1;
    })?;
    Ok(buckets.into_values().collect())
}

/// Variance-weighted ordinal-pattern sums of `series`.
///
/// Windowing and pattern indexing are identical to [`ordinal_patterns`], but
/// each window contributes the population variance of its own values (mean
/// squared deviation from the window mean) to its pattern's bucket instead of
/// a unit count. Buckets are summed, not averaged, and only nonzero sums are
/// returned, ascending by pattern index. A constant series has zero variance
/// in every window and therefore yields an empty list.
///
/// # Errors
///
/// Same conditions as [`ordinal_patterns`].
pub fn weighted_ordinal_patterns(series: &Array1<f64>, dim: usize, delay: usize) -> Result<Vec<f64>> {
    let embedding = Embedding::new(dim, delay)?;
    let mut buckets: BTreeMap<u64, f64> = BTreeMap::new();
    for_each_window(series, &embedding, |code, window| {
        *buckets.entry(code).or_insert(0.0) += population_variance(window);
    })?;
    Ok(buckets.into_values().filter(|&w| w != 0.0).collect())
}

/// Population variance of a window: mean of squared deviations from the
/// window's own mean.
fn population_variance(window: &[f64]) -> f64 {
    let n = window.len() as f64;
    let mean = window.iter().sum::<f64>() / n;
    window.iter().map(|&x| (x - mean).powi(2)).sum::<f64>() / n
}
