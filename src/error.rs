// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for ordinal-pattern computations.

use thiserror::Error;

/// Result type alias for ordinal-pattern operations.
pub type Result<T> = std::result::Result<T, OrdinalError>;

/// Errors that can occur while computing ordinal-pattern statistics.
///
/// The reference implementation silently produced NaN or zero for these
/// cases; here each one is surfaced as a distinct error instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum OrdinalError {
    /// Embedding dimension below the minimum of 2.
    #[error("invalid embedding dimension: {dim} (must be at least 2)")]
    InvalidDimension { dim: usize },

    /// Embedding dimension too large for the u64 Lehmer code.
    #[error("embedding dimension too large: {dim} (Lehmer codes above 20! overflow u64)")]
    DimensionTooLarge { dim: usize },

    /// Embedding delay below the minimum of 1.
    #[error("invalid embedding delay: {delay} (must be at least 1)")]
    InvalidDelay { delay: usize },

    /// Series too short for the requested embedding; the partition would be empty.
    #[error("insufficient data: need at least {needed} samples, got {got}")]
    InsufficientData { needed: usize, got: usize },

    /// Histogram with fewer than 2 distinct nonzero entries; the entropy
    /// normalizer ln(1) = 0 is undefined as a divisor.
    #[error("degenerate distribution: {observed} observed pattern(s), need at least 2")]
    DegenerateDistribution { observed: usize },
}
