// SPDX-FileCopyrightText: 2026 ordpat developers
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! # ordpat
//!
//! Ordinal-pattern statistics for scalar time series: permutation entropy and
//! Jensen-Shannon statistical complexity, with an amplitude-weighted variant.
//!
//! A series is delay-embedded into windows of `dim` samples spaced `delay`
//! steps apart, each window is reduced to its ordinal pattern (the ranking of
//! its values, encoded as a Lehmer code), and the resulting pattern histogram
//! feeds the entropy and complexity measures.
//!
//! ## Quick Start
//!
//! ```rust
//! use ndarray::array;
//! use ordpat::{ordinal_patterns, permutation_entropy, statistical_complexity};
//!
//! let series = array![4.0, 7.0, 9.0, 10.0, 6.0, 11.0, 3.0];
//! let counts = ordinal_patterns(&series, 3, 1)?;
//! assert_eq!(counts.iter().sum::<u64>(), 5);
//!
//! let hist: Vec<f64> = counts.iter().map(|&c| c as f64).collect();
//! let pe = permutation_entropy(&hist)?;
//! let sc = statistical_complexity(&hist)?;
//! assert!((0.0..=1.0).contains(&pe));
//! assert!(sc > 0.0);
//! # Ok::<(), ordpat::OrdinalError>(())
//! ```
//!
//! ## Normalization
//!
//! Both `permutation_entropy` and `statistical_complexity` normalize by the
//! number of *distinct observed* patterns rather than the full alphabet size
//! `dim!`. This matches the reference implementation this crate is compatible
//! with and deviates from the classical Bandt-Pompe definition; see the
//! function docs before comparing values across series.
//!
//! ## Tie handling
//!
//! Equal values within a window are ranked by their original position
//! (stable ordering, earlier index ranks lower). This single tie-break rule
//! is applied everywhere patterns are computed.

pub mod embedding;
pub mod encoding;
pub mod error;
pub mod measures;
pub mod patterns;

pub use embedding::Embedding;
pub use error::{OrdinalError, Result};
pub use measures::{permutation_entropy, shannon_entropy, statistical_complexity};
pub use patterns::{ordinal_patterns, pattern_codes, weighted_ordinal_patterns};
