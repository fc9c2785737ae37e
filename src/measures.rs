// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Entropy and complexity measures over ordinal-pattern histograms.

use crate::error::{OrdinalError, Result};

/// Shannon entropy `-Σ w·ln(w)` of a probability-like distribution.
///
/// Exact-zero entries are filtered out; an empty or all-zero input yields 0.
/// The weights are not required to sum to 1 and negative entries are not
/// guarded against; the caller supplies a valid distribution.
pub fn shannon_entropy(weights: &[f64]) -> f64 {
    weights
        .iter()
        .filter(|&&w| w != 0.0)
        .map(|&w| -w * w.ln())
        .sum()
}

/// Normalized permutation entropy of an ordinal-pattern histogram.
///
/// The histogram is the list of nonzero pattern aggregates produced by
/// `ordinal_patterns` or `weighted_ordinal_patterns` (converted to f64). It
/// is normalized to probabilities and its Shannon entropy divided by
/// `ln(hist.len())`, the entropy of a uniform distribution over the
/// *observed* patterns. The result lies in [0, 1], with 1 for a histogram
/// whose observed patterns are equally frequent.
///
/// Note the normalizer is the count of distinct observed patterns, not the
/// full alphabet size `dim!`; this deviates from the classical Bandt-Pompe
/// definition and is kept for compatibility with the reference
/// implementation.
///
/// # Errors
///
/// `DegenerateDistribution` when fewer than 2 entries are observed (the
/// normalizer `ln(1)` would be 0) or the total mass is not positive.
pub fn permutation_entropy(hist: &[f64]) -> Result<f64> {
    let probs = normalized(hist)?;
    Ok(shannon_entropy(&probs) / (probs.len() as f64).ln())
}

/// Jensen-Shannon statistical complexity of an ordinal-pattern histogram.
///
/// Multiplies the permutation entropy by the Jensen-Shannon divergence
/// between the observed distribution and the uniform distribution over the
/// observed patterns, scaled by the closed-form constant `Q₀` that maps the
/// largest possible divergence (a one-hot distribution against uniform) to 1.
///
/// The result is 0 for an exactly uniform histogram, near 0 for a heavily
/// concentrated one (the entropy factor vanishes), and peaks in between.
/// The same observed-pattern normalization caveat as
/// [`permutation_entropy`] applies.
///
/// # Errors
///
/// `DegenerateDistribution` under the same conditions as
/// [`permutation_entropy`].
pub fn statistical_complexity(hist: &[f64]) -> Result<f64> {
    let pe = permutation_entropy(hist)?;
    let probs = normalized(hist)?;
    let length = probs.len() as f64;
    let uniform = 1.0 / length;

    // Q₀: negative inverse of the JS divergence between a one-hot
    // distribution and the uniform distribution over `length` symbols.
    let c1 = (0.5 + 0.5 / length) * (0.5 + 0.5 / length).ln();
    let c2 = (0.5 / length) * (0.5 / length).ln() * (length - 1.0);
    let c3 = 0.5 * length.ln();
    let q0 = -1.0 / (c1 + c2 + c3);

    let mixture: Vec<f64> = probs.iter().map(|&p| 0.5 * p + 0.5 * uniform).collect();
    let js = shannon_entropy(&mixture) - 0.5 * shannon_entropy(&probs) - 0.5 * length.ln();

    Ok(q0 * js * pe)
}

/// Normalize a histogram to probabilities, rejecting degenerate input.
fn normalized(hist: &[f64]) -> Result<Vec<f64>> {
    if hist.len() < 2 {
        return Err(OrdinalError::DegenerateDistribution {
            observed: hist.len(),
        });
    }
    let total: f64 = hist.iter().sum();
    if total <= 0.0 || total.is_nan() {
        return Err(OrdinalError::DegenerateDistribution { observed: 0 });
    }
    Ok(hist.iter().map(|&w| w / total).collect())
}
