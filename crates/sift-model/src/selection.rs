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

use sift_core::{num::CriterionValue, utils::fmt::join_values};

/// The winning feature subset reported after a search, decoupled from the
/// search tree internals.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection<T> {
    features: Vec<T>,
    score: T,
}

impl<T> Selection<T>
where
    T: CriterionValue,
{
    /// Creates a new selection from the kept features and their score.
    #[inline]
    pub fn new(features: Vec<T>, score: T) -> Self {
        Self { features, score }
    }

    /// Returns the kept feature values, sorted ascending.
    #[inline]
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Returns the criterion score of the selection.
    #[inline]
    pub fn score(&self) -> T {
        self.score
    }

    /// Returns the number of kept features.
    #[inline]
    pub fn num_features(&self) -> usize {
        self.features.len()
    }

    /// Returns `true` if the given value is part of the selection.
    #[inline]
    pub fn contains(&self, value: T) -> bool {
        self.features.iter().any(|&v| v == value)
    }
}

impl<T> std::fmt::Display for Selection<T>
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Selection(features: {}, score: {})",
            join_values(&self.features),
            self.score
        )
    }
}
