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

use sift_core::num::CriterionValue;

/// A strategy for scoring feature subsets.
///
/// `CriterionEvaluator` decouples the solver from a particular criterion
/// function. Implementations must be pure: the same subset always yields
/// the same score, with no side effects. The solver additionally requires
/// the criterion to be monotonically non-decreasing under set inclusion;
/// that property is proven by `eval::validation` before any search runs,
/// not assumed here.
pub trait CriterionEvaluator<T>
where
    T: CriterionValue,
{
    /// Returns the name of the criterion, used in diagnostics and errors.
    fn name(&self) -> &str;

    /// Computes the criterion score of the given feature subset.
    fn evaluate(&self, features: &[T]) -> T;
}

impl<T> std::fmt::Debug for dyn CriterionEvaluator<T> + '_
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CriterionEvaluator({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn CriterionEvaluator<T> + '_
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CriterionEvaluator({})", self.name())
    }
}
