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

use crate::{
    stats::SearchStatistics,
    tree::{NodeId, SearchTree},
};
use sift_core::num::CriterionValue;
use sift_model::selection::Selection;

/// The solution component of a finished search.
#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult<T> {
    /// The search ran to completion; the selection is provably optimal.
    Optimal(Selection<T>),
    /// The search was aborted after at least one leaf was evaluated; the
    /// selection is the best incumbent, without an optimality proof.
    Feasible(Selection<T>),
    /// The search was aborted before any leaf was evaluated.
    Unknown,
}

impl<T> SearchResult<T>
where
    T: CriterionValue,
{
    /// Returns the selection carried by this result, if any.
    #[inline]
    pub fn selection(&self) -> Option<&Selection<T>> {
        match self {
            SearchResult::Optimal(selection) | SearchResult::Feasible(selection) => {
                Some(selection)
            }
            SearchResult::Unknown => None,
        }
    }
}

impl<T> std::fmt::Display for SearchResult<T>
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchResult::Optimal(selection) => {
                write!(f, "Optimal(score={})", selection.score())
            }
            SearchResult::Feasible(selection) => {
                write!(f, "Feasible(score={})", selection.score())
            }
            SearchResult::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Why a search terminated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every branch was either explored or soundly pruned.
    OptimalityProven,
    /// A monitor requested termination. The string carries the reason.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::OptimalityProven => write!(f, "Optimality Proven"),
            TerminationReason::Aborted(reason) => write!(f, "Aborted: {}", reason),
        }
    }
}

/// Everything a finished search hands back: the result, why the search
/// stopped, counters, and the fully retained tree (breadth-first indexed)
/// together with the winning leaf's node id for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<T> {
    result: SearchResult<T>,
    termination_reason: TerminationReason,
    statistics: SearchStatistics,
    tree: SearchTree<T>,
    winner: Option<NodeId>,
}

impl<T> SearchOutcome<T>
where
    T: CriterionValue,
{
    #[inline]
    pub fn optimal(
        selection: Selection<T>,
        winner: NodeId,
        tree: SearchTree<T>,
        statistics: SearchStatistics,
    ) -> Self {
        Self {
            result: SearchResult::Optimal(selection),
            termination_reason: TerminationReason::OptimalityProven,
            statistics,
            tree,
            winner: Some(winner),
        }
    }

    #[inline]
    pub fn aborted<R>(
        incumbent: Option<(Selection<T>, NodeId)>,
        reason: R,
        tree: SearchTree<T>,
        statistics: SearchStatistics,
    ) -> Self
    where
        R: Into<String>,
    {
        let termination_reason = TerminationReason::Aborted(reason.into());
        let (result, winner) = match incumbent {
            Some((selection, winner)) => (SearchResult::Feasible(selection), Some(winner)),
            None => (SearchResult::Unknown, None),
        };

        Self {
            result,
            termination_reason,
            statistics,
            tree,
            winner,
        }
    }

    /// Returns the search result.
    #[inline]
    pub fn result(&self) -> &SearchResult<T> {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn termination_reason(&self) -> &TerminationReason {
        &self.termination_reason
    }

    /// Returns the search statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns the retained, breadth-first-indexed search tree.
    #[inline]
    pub fn tree(&self) -> &SearchTree<T> {
        &self.tree
    }

    /// Returns the winning leaf's node id, if a leaf was found.
    #[inline]
    pub fn winner(&self) -> Option<NodeId> {
        self.winner
    }

    /// Returns the winning selection, if a leaf was found.
    #[inline]
    pub fn selection(&self) -> Option<&Selection<T>> {
        self.result.selection()
    }

    #[inline]
    pub fn is_optimal(&self) -> bool {
        matches!(self.result, SearchResult::Optimal(_))
    }

    #[inline]
    pub fn has_solution(&self) -> bool {
        matches!(
            self.result,
            SearchResult::Optimal(_) | SearchResult::Feasible(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    fn leaf_tree() -> (SearchTree<f64>, NodeId) {
        let mut tree = SearchTree::new();
        let root = tree.push_root(smallvec![1.0, 2.0], 3.0);
        (tree, root)
    }

    #[test]
    fn test_optimal_outcome() {
        let (tree, root) = leaf_tree();
        let selection = Selection::new(vec![1.0, 2.0], 3.0);
        let outcome =
            SearchOutcome::optimal(selection, root, tree, SearchStatistics::default());

        assert!(outcome.is_optimal());
        assert!(outcome.has_solution());
        assert_eq!(outcome.winner(), Some(root));
        assert_eq!(
            outcome.termination_reason(),
            &TerminationReason::OptimalityProven
        );
        assert_eq!(outcome.selection().unwrap().score(), 3.0);
    }

    #[test]
    fn test_aborted_with_incumbent_is_feasible() {
        let (tree, root) = leaf_tree();
        let selection = Selection::new(vec![1.0, 2.0], 3.0);
        let outcome = SearchOutcome::aborted(
            Some((selection, root)),
            "stopped by test",
            tree,
            SearchStatistics::default(),
        );

        assert!(!outcome.is_optimal());
        assert!(outcome.has_solution());
        match outcome.termination_reason() {
            TerminationReason::Aborted(reason) => assert_eq!(reason, "stopped by test"),
            other => panic!("expected Aborted, got {}", other),
        }
    }

    #[test]
    fn test_aborted_without_incumbent_is_unknown() {
        let (tree, _) = leaf_tree();
        let outcome = SearchOutcome::<f64>::aborted(
            None,
            "stopped early",
            tree,
            SearchStatistics::default(),
        );

        assert!(!outcome.has_solution());
        assert_eq!(outcome.winner(), None);
        assert!(matches!(outcome.result(), SearchResult::Unknown));
    }

    #[test]
    fn test_result_display() {
        let selection = Selection::new(vec![4.0, 5.0], 9.0);
        assert_eq!(
            format!("{}", SearchResult::Optimal(selection.clone())),
            "Optimal(score=9)"
        );
        assert_eq!(
            format!("{}", SearchResult::Feasible(selection)),
            "Feasible(score=9)"
        );
        assert_eq!(format!("{}", SearchResult::<f64>::Unknown), "Unknown");
    }
}
