// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Validated embedding parameters and delay-embedding windows.

use ndarray::ArrayView1;

use crate::error::{OrdinalError, Result};

/// Time-delay embedding parameters: dimension `m` and delay `t`.
///
/// Validated on construction: `2 <= dim <= 20` and `delay >= 1`. The upper
/// dimension bound keeps the Lehmer pattern code within u64.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Embedding {
    dim: usize,
    delay: usize,
}

impl Embedding {
    pub fn new(dim: usize, delay: usize) -> Result<Self> {
        if dim < 2 {
            return Err(OrdinalError::InvalidDimension { dim });
        }
        if dim > 20 {
            return Err(OrdinalError::DimensionTooLarge { dim });
        }
        if delay < 1 {
            return Err(OrdinalError::InvalidDelay { delay });
        }
        Ok(Self { dim, delay })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn delay(&self) -> usize {
        self.delay
    }

    /// Number of series steps spanned by one window beyond its first sample,
    /// `t * (m - 1)`. Equals the number of wrap-around rows the rotation
    /// construction would discard.
    pub fn span(&self) -> usize {
        self.delay * (self.dim - 1)
    }

    /// Number of windows a series of length `len` yields, `len - t*(m-1)`.
    ///
    /// Errors with [`OrdinalError::InsufficientData`] when the partition
    /// would be empty; downstream measures are undefined on an empty
    /// partition, so the short-series case is rejected here rather than
    /// silently yielding zero entropy.
    pub fn window_count(&self, len: usize) -> Result<usize> {
        let needed = self.span() + 1;
        if len < needed {
            return Err(OrdinalError::InsufficientData { needed, got: len });
        }
        Ok(len - self.span())
    }

    /// Fill `window` with the delay-embedded window aligned at `offset`:
    /// `window[i] = series[offset - i*t]`, so index 0 holds the most recent
    /// sample and index m-1 the oldest. Valid for `offset >= span()`.
    pub(crate) fn fill_window(&self, series: ArrayView1<f64>, offset: usize, window: &mut [f64]) {
        for (i, w) in window.iter_mut().enumerate() {
            *w = series[offset - i * self.delay];
        }
    }
}
