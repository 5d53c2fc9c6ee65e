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

//! Built-in criterion functions.
//!
//! Both criteria are monotonic on non-negative feature domains; a negative
//! value makes them fail the monotonicity pre-check, which is exactly the
//! safety behavior the solver relies on.

use crate::eval::evaluator::CriterionEvaluator;
use sift_core::num::CriterionValue;

/// The default criterion: the sum of the subset's feature values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SumCriterion;

impl SumCriterion {
    /// Creates a new `SumCriterion`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CriterionEvaluator<T> for SumCriterion
where
    T: CriterionValue,
{
    #[inline]
    fn name(&self) -> &str {
        "SumCriterion"
    }

    #[inline]
    fn evaluate(&self, features: &[T]) -> T {
        features.iter().fold(T::zero(), |acc, &v| acc + v)
    }
}

/// An alternative criterion: the sum of squared feature values.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct SquaredSumCriterion;

impl SquaredSumCriterion {
    /// Creates a new `SquaredSumCriterion`.
    #[inline]
    pub fn new() -> Self {
        Self
    }
}

impl<T> CriterionEvaluator<T> for SquaredSumCriterion
where
    T: CriterionValue,
{
    #[inline]
    fn name(&self) -> &str {
        "SquaredSumCriterion"
    }

    #[inline]
    fn evaluate(&self, features: &[T]) -> T {
        features.iter().fold(T::zero(), |acc, &v| acc + v * v)
    }
}

#[cfg(test)]
mod tests {
    use super::{SquaredSumCriterion, SumCriterion};
    use crate::eval::evaluator::CriterionEvaluator;

    #[test]
    fn test_sum_criterion() {
        let criterion = SumCriterion::new();
        assert_eq!(criterion.evaluate(&[1.0, 2.0, 3.0]), 6.0);
        assert_eq!(criterion.evaluate(&[4.0, 5.0]), 9.0);
        assert_eq!(criterion.evaluate(&[] as &[f64]), 0.0);
    }

    #[test]
    fn test_squared_sum_criterion() {
        let criterion = SquaredSumCriterion::new();
        assert_eq!(criterion.evaluate(&[1.0, 2.0, 3.0]), 14.0);
        assert_eq!(criterion.evaluate(&[] as &[f64]), 0.0);
    }

    #[test]
    fn test_names() {
        assert_eq!(
            CriterionEvaluator::<f64>::name(&SumCriterion::new()),
            "SumCriterion"
        );
        assert_eq!(
            CriterionEvaluator::<f64>::name(&SquaredSumCriterion::new()),
            "SquaredSumCriterion"
        );
    }

    #[test]
    fn test_dyn_display() {
        let criterion: &dyn CriterionEvaluator<f64> = &SumCriterion::new();
        assert_eq!(format!("{}", criterion), "CriterionEvaluator(SumCriterion)");
    }
}
