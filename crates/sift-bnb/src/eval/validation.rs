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

//! Validation of criterion monotonicity.
//!
//! Bound pruning is only sound if adding features never decreases the
//! criterion score: the solver discards a subtree because every descendant
//! subset is contained in the current node's subset, so under monotonicity
//! no descendant can score higher. This module proves the property for a
//! concrete feature set before the solver is allowed to run.
//!
//! The proof is exhaustive on purpose: every non-empty subset of the
//! feature set is scored (sizes ascending, combinations in lexicographic
//! index order), and every contained pair is compared. That is O(2^D)
//! evaluations and O(4^D) pair checks. The check runs once per search on
//! the small feature counts this solver targets; callers with large `D`
//! need a different proof strategy, not a faster version of this one.

use crate::eval::evaluator::CriterionEvaluator;
use fixedbitset::FixedBitSet;
use sift_core::num::{CriterionValue, total_order};

/// Iterates over all `k`-element index combinations of `0..n` in
/// lexicographic order. Yields nothing when `k == 0` or `k > n`.
#[derive(Clone, Debug)]
pub struct CombinationIterator {
    n: usize,
    indices: Vec<usize>,
    done: bool,
}

impl CombinationIterator {
    /// Creates an iterator over the `k`-element combinations of `0..n`.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indices: (0..k).collect(),
            done: k == 0 || k > n,
        }
    }
}

impl Iterator for CombinationIterator {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        let current = self.indices.clone();

        // Advance the rightmost index that still has room, then reset the
        // tail to the tight ascending run after it.
        let k = self.indices.len();
        let mut position = k;
        loop {
            if position == 0 {
                self.done = true;
                break;
            }
            position -= 1;
            if self.indices[position] + 1 <= self.n - (k - position) {
                self.indices[position] += 1;
                for tail in position + 1..k {
                    self.indices[tail] = self.indices[tail - 1] + 1;
                }
                break;
            }
        }

        Some(current)
    }
}

/// Returns whether a pair of scores for nested subsets satisfies
/// monotonicity: the superset's score must not fall below the subset's.
/// A NaN score fails the check, which rejects broken criteria early.
#[inline(always)]
fn check_monotonicity<T: CriterionValue>(subset_score: T, superset_score: T) -> bool {
    superset_score >= subset_score
}

/// Checks exhaustively whether the criterion is monotonically
/// non-decreasing with respect to set inclusion over the given features.
///
/// Every non-empty subset is enumerated and scored once; for every pair of
/// enumerated subsets where one contains the other, the score ordering is
/// asserted. Returns `false` at the first violation observed.
///
/// The features are sorted ascending before enumeration so the scored
/// subsets are reproducible; the verdict itself does not depend on order.
pub fn is_monotonic_exhaustive<T, E>(evaluator: &E, features: &[T]) -> bool
where
    T: CriterionValue,
    E: CriterionEvaluator<T> + ?Sized,
{
    let mut sorted: Vec<T> = features.to_vec();
    sorted.sort_by(|a, b| total_order(*a, *b));
    let n = sorted.len();

    // Score the full powerset, smallest subsets first. Because sizes are
    // ascending, every proper-subset pair appears with the subset at the
    // lower enumeration position.
    let mut masks: Vec<FixedBitSet> = Vec::new();
    let mut scores: Vec<T> = Vec::new();
    let mut subset: Vec<T> = Vec::with_capacity(n);

    for size in 1..=n {
        for combination in CombinationIterator::new(n, size) {
            let mut mask = FixedBitSet::with_capacity(n);
            subset.clear();
            for &position in &combination {
                mask.insert(position);
                subset.push(sorted[position]);
            }
            masks.push(mask);
            scores.push(evaluator.evaluate(&subset));
        }
    }

    for i in 0..masks.len() {
        for j in (i + 1)..masks.len() {
            if masks[i].is_subset(&masks[j]) && !check_monotonicity(scores[i], scores[j]) {
                return false;
            }
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use super::{CombinationIterator, check_monotonicity, is_monotonic_exhaustive};
    use crate::eval::evaluator::CriterionEvaluator;
    use crate::eval::sum::{SquaredSumCriterion, SumCriterion};

    #[test]
    fn test_combinations_of_three_choose_two() {
        let combos: Vec<Vec<usize>> = CombinationIterator::new(3, 2).collect();
        assert_eq!(combos, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
    }

    #[test]
    fn test_combinations_full_and_single() {
        let combos: Vec<Vec<usize>> = CombinationIterator::new(3, 3).collect();
        assert_eq!(combos, vec![vec![0, 1, 2]]);

        let combos: Vec<Vec<usize>> = CombinationIterator::new(3, 1).collect();
        assert_eq!(combos, vec![vec![0], vec![1], vec![2]]);
    }

    #[test]
    fn test_combinations_degenerate_sizes() {
        assert_eq!(CombinationIterator::new(3, 0).count(), 0);
        assert_eq!(CombinationIterator::new(2, 3).count(), 0);
    }

    #[test]
    fn test_combinations_count_matches_binomial() {
        assert_eq!(CombinationIterator::new(6, 3).count(), 20);
        assert_eq!(CombinationIterator::new(7, 2).count(), 21);
    }

    #[test]
    fn test_check_monotonicity_pairs() {
        assert!(check_monotonicity(3.0, 3.0));
        assert!(check_monotonicity(3.0, 4.0));
        assert!(!check_monotonicity(4.0, 3.0));
        // NaN scores must never pass.
        assert!(!check_monotonicity(1.0, f64::NAN));
    }

    #[test]
    fn test_sum_over_non_negative_values_is_monotonic() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert!(is_monotonic_exhaustive(&SumCriterion::new(), &features));
    }

    #[test]
    fn test_sum_with_negative_value_is_not_monotonic() {
        // {2} ⊆ {-1, 2} but 2 > 1, so adding -1 decreases the score.
        let features = [-1.0, 2.0, 3.0];
        assert!(!is_monotonic_exhaustive(&SumCriterion::new(), &features));
    }

    #[test]
    fn test_squared_sum_is_monotonic_even_with_negative_values() {
        let features = [-3.0, -1.0, 2.0];
        assert!(is_monotonic_exhaustive(
            &SquaredSumCriterion::new(),
            &features
        ));
    }

    #[test]
    fn test_verdict_does_not_depend_on_input_order() {
        let sorted = [1.0, 2.0, 3.0];
        let shuffled = [3.0, 1.0, 2.0];
        assert_eq!(
            is_monotonic_exhaustive(&SumCriterion::new(), &sorted),
            is_monotonic_exhaustive(&SumCriterion::new(), &shuffled)
        );
    }

    #[test]
    fn test_single_feature_is_trivially_monotonic() {
        assert!(is_monotonic_exhaustive(&SumCriterion::new(), &[-7.0]));
    }

    /// A deliberately broken criterion: penalizes larger subsets.
    struct InverseSizeCriterion;

    impl CriterionEvaluator<f64> for InverseSizeCriterion {
        fn name(&self) -> &str {
            "InverseSizeCriterion"
        }

        fn evaluate(&self, features: &[f64]) -> f64 {
            -(features.len() as f64)
        }
    }

    #[test]
    fn test_decreasing_criterion_is_rejected() {
        let features = [1.0, 2.0, 3.0];
        assert!(!is_monotonic_exhaustive(&InverseSizeCriterion, &features));
    }
}
