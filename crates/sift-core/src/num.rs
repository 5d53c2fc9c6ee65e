// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Criterion Value Trait
//!
//! Unified numeric bounds for feature values and criterion scores.
//! `CriterionValue` collects the floating-point capabilities the search
//! components require into a single alias, keeping generic signatures short
//! and consistent across the workspace.
//!
//! ## Motivation
//!
//! Feature values and the scores a criterion function assigns to subsets
//! live in the same numeric domain. Search code should stay generic over
//! that domain (the binary instantiates `f64`) without re-stating a pile of
//! bounds at every function.
//!
//! ## Highlights
//!
//! - Requires `Float` for arithmetic, comparisons, and finiteness checks.
//! - `Debug + Display` for diagnostics and rendering.
//! - `Send + Sync` so models and outcomes can cross thread boundaries.
//!
//! Floats are only partially ordered. Every entry point into the workspace
//! validates that values are finite, so `total_order` resolves the
//! never-taken incomparable case to `Equal` instead of panicking.

use num_traits::Float;
use std::cmp::Ordering;

/// A trait alias for numeric types usable as feature values and criterion
/// scores. These are usually the floating-point types `f32` and `f64`.
pub trait CriterionValue:
    Float + std::fmt::Debug + std::fmt::Display + Send + Sync
{
}

impl<T> CriterionValue for T where T: Float + std::fmt::Debug + std::fmt::Display + Send + Sync {}

/// Compares two criterion values, treating the incomparable case as equal.
///
/// Intended for sorting value sequences that have already passed finiteness
/// validation; for such sequences this is a total order.
#[inline]
pub fn total_order<T>(a: T, b: T) -> Ordering
where
    T: CriterionValue,
{
    a.partial_cmp(&b).unwrap_or(Ordering::Equal)
}
