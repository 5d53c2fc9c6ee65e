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

//! Branch-and-Bound solver for feature subset selection.
//!
//! This module implements the search engine that explores removal decisions
//! over a feature set while pruning subtrees that cannot beat the incumbent
//! leaf. The `BnbSolver` holds only configuration; every run builds a fresh
//! `BnbSearchSession` that owns the work stack, the retained tree, the
//! incumbent, statistics, and timing, so repeated and interleaved searches
//! never share mutable state.
//!
//! The traversal is an explicit LIFO stack machine rather than language
//! recursion. Children are created in ascending branch-value order and
//! pushed in reverse, so the smallest branch value is explored first and
//! the whole run is reproducible, including which leaf wins a tie.
//!
//! Before any search, the criterion is proven monotonic over the concrete
//! feature set (`eval::validation`); a criterion that fails the proof is
//! rejected with `SolveError::NonMonotonicCriterion`, because bound pruning
//! would otherwise silently discard optimal leaves.

use crate::{
    eval::{evaluator::CriterionEvaluator, validation},
    incumbent::Incumbent,
    monitor::search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    result::{SearchOutcome, TerminationReason},
    stats::SearchStatistics,
    tree::{FeatureVec, NodeId, SearchTree},
};
use sift_core::num::{CriterionValue, total_order};
use sift_model::{model::FeatureModel, selection::Selection};
use smallvec::SmallVec;

/// The error type for a rejected search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The criterion failed the exhaustive monotonicity proof over the
    /// supplied feature set. Running the search anyway could prune the
    /// true optimum, so the operation is refused.
    NonMonotonicCriterion { criterion: String },
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NonMonotonicCriterion { criterion } => write!(
                f,
                "Criterion '{}' is not monotonically non-decreasing over the given feature set; \
                 bound pruning would be unsound",
                criterion
            ),
        }
    }
}

impl std::error::Error for SolveError {}

/// A branch-and-bound solver for feature subset selection.
///
/// The solver is the execution engine only: subsets are scored by a
/// `CriterionEvaluator`, and observers hook in through a
/// `TreeSearchMonitor`. Input validation (target size, finiteness,
/// duplicates) happens when the `FeatureModel` is constructed; the solver
/// relies on those invariants.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct BnbSolver {
    use_pruning: bool,
}

impl Default for BnbSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl BnbSolver {
    /// Creates a solver with bound pruning enabled.
    #[inline]
    pub fn new() -> Self {
        Self { use_pruning: true }
    }

    /// Creates a solver that evaluates every leaf exhaustively.
    ///
    /// Pruning never changes the winning score, only the amount of
    /// exploration; the exhaustive variant exists to demonstrate exactly
    /// that, and to expose the full tree shape.
    #[inline]
    pub fn without_pruning() -> Self {
        Self { use_pruning: false }
    }

    /// Returns whether bound pruning is enabled.
    #[inline]
    pub fn is_pruning_enabled(&self) -> bool {
        self.use_pruning
    }

    /// Runs the search and returns the outcome: the winning selection, the
    /// retained breadth-first-indexed tree, and statistics.
    ///
    /// Rejects the operation before building anything if the criterion is
    /// not monotonic over the model's feature set.
    pub fn solve<T, E, M>(
        &self,
        model: &FeatureModel<T>,
        evaluator: &E,
        monitor: M,
    ) -> Result<SearchOutcome<T>, SolveError>
    where
        T: CriterionValue,
        E: CriterionEvaluator<T> + ?Sized,
        M: TreeSearchMonitor<T>,
    {
        if !validation::is_monotonic_exhaustive(evaluator, model.features()) {
            return Err(SolveError::NonMonotonicCriterion {
                criterion: evaluator.name().to_string(),
            });
        }

        let session = BnbSearchSession::new(self.use_pruning, model, evaluator, monitor);
        Ok(session.run())
    }
}

/// A search session: the per-run state of one solve call.
struct BnbSearchSession<'a, T, E, M>
where
    T: CriterionValue,
    E: CriterionEvaluator<T> + ?Sized,
{
    use_pruning: bool,
    model: &'a FeatureModel<T>,
    evaluator: &'a E,
    monitor: M,
    tree: SearchTree<T>,
    stack: Vec<NodeId>,
    incumbent: Incumbent<T>,
    stats: SearchStatistics,
    start_time: std::time::Instant,
}

impl<'a, T, E, M> BnbSearchSession<'a, T, E, M>
where
    T: CriterionValue,
    E: CriterionEvaluator<T> + ?Sized,
    M: TreeSearchMonitor<T>,
{
    /// Creates a new search session.
    fn new(use_pruning: bool, model: &'a FeatureModel<T>, evaluator: &'a E, monitor: M) -> Self {
        Self {
            use_pruning,
            model,
            evaluator,
            monitor,
            tree: SearchTree::with_capacity(model.num_features() * 2),
            stack: Vec::with_capacity(model.num_features()),
            incumbent: Incumbent::new(),
            stats: SearchStatistics::default(),
            start_time: std::time::Instant::now(),
        }
    }

    /// Runs the search session.
    fn run(mut self) -> SearchOutcome<T> {
        self.monitor.on_enter_search(self.model, &self.stats);

        let root_features: FeatureVec<T> = self.model.features().iter().copied().collect();
        let root_score = self.evaluator.evaluate(&root_features);
        let root = self.tree.push_root(root_features, root_score);
        self.stack.push(root);

        let termination = loop {
            let Some(id) = self.stack.pop() else {
                break TerminationReason::OptimalityProven;
            };

            if let SearchCommand::Terminate(reason) = self.monitor.search_command(&self.stats) {
                break TerminationReason::Aborted(reason);
            }

            self.visit(id);
        };

        self.stats.set_total_time(self.start_time.elapsed());
        self.monitor.on_exit_search(&self.stats);
        self.finalize(termination)
    }

    /// Visits one node: pruning check, leaf handling, branching.
    fn visit(&mut self, id: NodeId) {
        self.stats.on_node_explored();
        self.stats.on_depth_update(self.tree.node(id).level() as u64);
        self.monitor.on_node_visited(self.tree.node(id), &self.stats);

        // Pruning runs before the leaf check: an equal-scoring later leaf
        // is discarded here, which is what keeps the first-found leaf the
        // winner of ties.
        let score = self.tree.node(id).score();
        if self.use_pruning && self.incumbent.dominates(score) {
            self.stats.on_pruning_bound();
            self.monitor
                .on_prune(self.tree.node(id), PruneReason::BoundDominated, &self.stats);
            return;
        }

        if self.tree.node(id).level() == self.model.leaf_level() {
            self.stats.on_leaf_evaluated();
            if self.incumbent.try_install(id, score) {
                self.stats.on_solution_found();
                self.monitor.on_solution_found(self.tree.node(id), &self.stats);
            }
            return;
        }

        self.branch(id);
    }

    /// Expands an internal node into its children.
    ///
    /// The number of children is `(d + 1) - |preserved|`; the branch values
    /// are the smallest available values in ascending order. Child `i`
    /// removes branch value `i` and additionally preserves every later
    /// branch value, which is what makes each `d`-sized subset appear as
    /// exactly one leaf.
    fn branch(&mut self, id: NodeId) {
        let node = self.tree.node(id);
        let parent_features: FeatureVec<T> = node.features().iter().copied().collect();
        let parent_preserved: FeatureVec<T> = node.preserved_features().iter().copied().collect();

        let branch_count = (self.model.target_size() + 1) - parent_preserved.len();
        let available: FeatureVec<T> = parent_features
            .iter()
            .copied()
            .filter(|v| !parent_preserved.contains(v))
            .collect();

        debug_assert!(
            branch_count >= 1 && branch_count <= available.len(),
            "called `BnbSearchSession::branch` with inconsistent bookkeeping: \
             {} branch values requested but {} are available",
            branch_count,
            available.len()
        );

        let branch_values = &available[..branch_count];
        let mut children: SmallVec<[NodeId; 8]> = SmallVec::new();

        for (i, &value) in branch_values.iter().enumerate() {
            let features: FeatureVec<T> = parent_features
                .iter()
                .copied()
                .filter(|&v| v != value)
                .collect();

            let mut preserved: FeatureVec<T> = parent_preserved.clone();
            preserved.extend(branch_values[i + 1..].iter().copied());
            preserved.sort_by(|a, b| total_order(*a, *b));

            let score = self.evaluator.evaluate(&features);
            children.push(self.tree.push_child(id, value, features, preserved, score));
        }

        self.stats.on_branches_generated(children.len() as u64);
        self.monitor
            .on_branches_generated(self.tree.node(id), children.len(), &self.stats);

        // LIFO stack: push in reverse so the smallest branch value pops first.
        for &child in children.iter().rev() {
            self.stack.push(child);
        }
    }

    /// Builds the outcome from the finished (or aborted) session.
    ///
    /// # Note
    ///
    /// This consumes self.
    fn finalize(self, termination: TerminationReason) -> SearchOutcome<T> {
        let mut tree = self.tree;
        tree.assign_breadth_first_indices();

        let incumbent = self.incumbent.best_node().map(|winner| {
            let node = tree.node(winner);
            (Selection::new(node.features().to_vec(), node.score()), winner)
        });

        match termination {
            TerminationReason::OptimalityProven => {
                let (selection, winner) = incumbent
                    .expect("expected an incumbent leaf when termination is OptimalityProven");
                SearchOutcome::optimal(selection, winner, tree, self.stats)
            }
            TerminationReason::Aborted(reason) => {
                SearchOutcome::aborted(incumbent, reason, tree, self.stats)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::sum::{SquaredSumCriterion, SumCriterion};
    use crate::monitor::no_op::NoOperationMonitor;
    use crate::result::SearchResult;
    use rand::{Rng, SeedableRng, rngs::StdRng};

    fn model(features: &[f64], keep: usize) -> FeatureModel<f64> {
        FeatureModel::new(features.to_vec(), keep).expect("test model must be valid")
    }

    fn solve_sum(solver: BnbSolver, features: &[f64], keep: usize) -> SearchOutcome<f64> {
        solver
            .solve(&model(features, keep), &SumCriterion::new(), NoOperationMonitor::new())
            .expect("sum criterion over non-negative features must be accepted")
    }

    #[test]
    fn test_example_selects_two_largest_values() {
        let outcome = solve_sum(BnbSolver::new(), &[1.0, 2.0, 3.0, 4.0, 5.0], 2);

        assert!(outcome.is_optimal());
        let selection = outcome.selection().expect("optimal outcome has a selection");
        assert_eq!(selection.features(), &[4.0, 5.0]);
        assert_eq!(selection.score(), 9.0);
    }

    #[test]
    fn test_winner_is_a_leaf_of_target_size() {
        for (features, keep) in [
            (vec![1.0, 2.0, 3.0, 4.0, 5.0], 2usize),
            (vec![1.0, 2.0, 3.0, 4.0], 1),
            (vec![0.5, 1.5, 2.5, 3.5, 4.5, 5.5], 4),
        ] {
            let outcome = solve_sum(BnbSolver::new(), &features, keep);
            let selection = outcome.selection().unwrap();
            assert_eq!(selection.num_features(), keep);

            let winner = outcome.winner().expect("optimal outcome has a winner");
            let node = outcome.tree().node(winner);
            assert_eq!(node.level(), features.len() - keep);
            assert_eq!(node.features(), selection.features());
        }
    }

    #[test]
    fn test_keep_all_features_yields_single_node_tree() {
        let outcome = solve_sum(BnbSolver::new(), &[1.0, 2.0, 3.0], 3);

        assert_eq!(outcome.tree().len(), 1);
        let winner = outcome.winner().unwrap();
        assert_eq!(winner, outcome.tree().root().unwrap());

        let selection = outcome.selection().unwrap();
        assert_eq!(selection.features(), &[1.0, 2.0, 3.0]);
        assert_eq!(selection.score(), 6.0);
    }

    #[test]
    fn test_invalid_target_sizes_are_rejected_before_any_search() {
        assert!(FeatureModel::new(vec![1.0, 2.0, 3.0], 0).is_err());
        assert!(FeatureModel::new(vec![1.0, 2.0, 3.0], 4).is_err());
    }

    #[test]
    fn test_non_monotonic_criterion_is_rejected() {
        let model = model(&[-1.0, 2.0, 3.0], 2);
        let result = BnbSolver::new().solve(&model, &SumCriterion::new(), NoOperationMonitor::new());

        let err = result.unwrap_err();
        assert_eq!(
            err,
            SolveError::NonMonotonicCriterion {
                criterion: "SumCriterion".to_string()
            }
        );
        assert!(err.to_string().contains("SumCriterion"));
    }

    #[test]
    fn test_squared_criterion_accepts_negative_features() {
        let model = model(&[-3.0, -1.0, 2.0], 1);
        let outcome = BnbSolver::new()
            .solve(&model, &SquaredSumCriterion::new(), NoOperationMonitor::new())
            .expect("squared sum is monotonic regardless of sign");

        // Largest magnitude wins under the squared criterion.
        assert_eq!(outcome.selection().unwrap().features(), &[-3.0]);
        assert_eq!(outcome.selection().unwrap().score(), 9.0);
    }

    #[test]
    fn test_exhaustive_tree_has_binomial_distinct_leaves() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let keep = 3;
        let outcome = solve_sum(BnbSolver::without_pruning(), &features, keep);

        let leaf_level = features.len() - keep;
        let mut leaf_subsets: Vec<Vec<u64>> = outcome
            .tree()
            .nodes()
            .filter(|(_, node)| node.level() == leaf_level)
            .map(|(_, node)| node.features().iter().map(|v| v.to_bits()).collect())
            .collect();

        // C(6, 3) = 20 leaves, all of size `keep`, pairwise distinct.
        assert_eq!(leaf_subsets.len(), 20);
        assert_eq!(
            outcome.tree().len() as u64,
            outcome.statistics().nodes_explored
        );
        for subset in &leaf_subsets {
            assert_eq!(subset.len(), keep);
        }
        leaf_subsets.sort();
        leaf_subsets.dedup();
        assert_eq!(leaf_subsets.len(), 20);
    }

    #[test]
    fn test_exhaustive_leaf_count_matches_model_complexity() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0];
        let keep = 2;
        let outcome = solve_sum(BnbSolver::without_pruning(), &features, keep);

        let complexity = model(&features, keep).complexity();
        assert_eq!(outcome.statistics().leaves_evaluated as u128, complexity.leaves());
        assert_eq!(complexity.coverage(outcome.statistics().leaves_evaluated), Some(100.0));
    }

    #[test]
    fn test_pruning_never_changes_the_winner() {
        let instances: Vec<(Vec<f64>, usize)> = vec![
            (vec![1.0, 2.0, 3.0, 4.0, 5.0], 2),
            (vec![0.0, 1.0, 2.0, 3.0], 2),
            (vec![2.0, 3.0, 5.0, 7.0, 11.0, 13.0], 3),
            (vec![10.0, 20.0, 30.0], 1),
        ];

        for (features, keep) in instances {
            let pruned = solve_sum(BnbSolver::new(), &features, keep);
            let exhaustive = solve_sum(BnbSolver::without_pruning(), &features, keep);

            let pruned_selection = pruned.selection().unwrap();
            let exhaustive_selection = exhaustive.selection().unwrap();
            assert_eq!(pruned_selection.score(), exhaustive_selection.score());
            assert_eq!(pruned_selection.features(), exhaustive_selection.features());
        }
    }

    #[test]
    fn test_pruning_soundness_on_random_instances() {
        for seed in 0..20u64 {
            let mut rng = StdRng::seed_from_u64(seed);

            // Strictly increasing positive values: distinct by construction
            // and monotonic under the sum criterion.
            let num_features = rng.random_range(3..=7);
            let mut value = 0.0f64;
            let features: Vec<f64> = (0..num_features)
                .map(|_| {
                    value += rng.random_range(0.1..1.0);
                    value
                })
                .collect();
            let keep = rng.random_range(1..=num_features);

            let pruned = solve_sum(BnbSolver::new(), &features, keep);
            let exhaustive = solve_sum(BnbSolver::without_pruning(), &features, keep);

            assert_eq!(
                pruned.selection().unwrap().score(),
                exhaustive.selection().unwrap().score(),
                "seed {}: pruning changed the winning score",
                seed
            );
            assert!(
                pruned.statistics().nodes_explored <= exhaustive.statistics().nodes_explored,
                "seed {}: pruning explored more nodes than exhaustive search",
                seed
            );
        }
    }

    #[test]
    fn test_pruning_reduces_exploration() {
        let features = [1.0, 2.0, 3.0, 4.0, 5.0];
        let pruned = solve_sum(BnbSolver::new(), &features, 2);
        let exhaustive = solve_sum(BnbSolver::without_pruning(), &features, 2);

        assert!(pruned.statistics().prunings_bound > 0);
        assert_eq!(exhaustive.statistics().prunings_bound, 0);
        assert!(
            pruned.statistics().leaves_evaluated < exhaustive.statistics().leaves_evaluated
        );
    }

    /// Scores every subset identically, so every leaf ties.
    struct ConstantCriterion;

    impl CriterionEvaluator<f64> for ConstantCriterion {
        fn name(&self) -> &str {
            "ConstantCriterion"
        }

        fn evaluate(&self, _features: &[f64]) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_tie_break_first_found_leaf_wins() {
        // With the deterministic ascending branch order, the first leaf
        // reached for {0,1,2,3}, keep 2 is {1, 2}: the root branches on
        // 0, 1, 2; the first child removes 0 and preserves {1, 2}, and its
        // only continuation removes 3.
        let model = model(&[0.0, 1.0, 2.0, 3.0], 2);

        for solver in [BnbSolver::new(), BnbSolver::without_pruning()] {
            let outcome = solver
                .solve(&model, &ConstantCriterion, NoOperationMonitor::new())
                .expect("a constant criterion is monotonic");
            assert_eq!(outcome.selection().unwrap().features(), &[1.0, 2.0]);
        }
    }

    #[test]
    fn test_tree_is_indexed_after_solve() {
        let outcome = solve_sum(BnbSolver::new(), &[1.0, 2.0, 3.0, 4.0, 5.0], 2);

        let root = outcome.tree().root().unwrap();
        assert_eq!(outcome.tree().node(root).index(), Some(0));
        for (_, node) in outcome.tree().nodes() {
            assert!(node.index().is_some());
        }
    }

    #[test]
    fn test_repeated_solves_share_no_state() {
        let solver = BnbSolver::new();
        let first = solve_sum(solver, &[1.0, 2.0, 3.0, 4.0, 5.0], 2);
        let second = solve_sum(solver, &[1.0, 2.0, 3.0, 4.0, 5.0], 2);

        assert_eq!(
            first.selection().unwrap().features(),
            second.selection().unwrap().features()
        );
        assert_eq!(first.statistics().nodes_explored, second.statistics().nodes_explored);
        assert_eq!(first.tree().len(), second.tree().len());
    }

    /// Terminates the search once a node-count threshold is reached.
    struct StopAfterNodes {
        threshold: u64,
    }

    impl TreeSearchMonitor<f64> for StopAfterNodes {
        fn name(&self) -> &str {
            "StopAfterNodes"
        }

        fn on_enter_search(&mut self, _model: &FeatureModel<f64>, _stats: &SearchStatistics) {}

        fn on_exit_search(&mut self, _stats: &SearchStatistics) {}

        fn search_command(&mut self, stats: &SearchStatistics) -> SearchCommand {
            if stats.nodes_explored >= self.threshold {
                SearchCommand::Terminate("node limit".to_string())
            } else {
                SearchCommand::Continue
            }
        }

        fn on_node_visited(&mut self, _node: &crate::tree::TreeNode<f64>, _stats: &SearchStatistics) {}

        fn on_prune(
            &mut self,
            _node: &crate::tree::TreeNode<f64>,
            _reason: PruneReason,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_branches_generated(
            &mut self,
            _node: &crate::tree::TreeNode<f64>,
            _count: usize,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_solution_found(&mut self, _node: &crate::tree::TreeNode<f64>, _stats: &SearchStatistics) {
        }
    }

    #[test]
    fn test_abort_before_first_leaf_yields_unknown() {
        let model = model(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
        let outcome = BnbSolver::new()
            .solve(&model, &SumCriterion::new(), StopAfterNodes { threshold: 0 })
            .unwrap();

        assert!(!outcome.has_solution());
        assert!(matches!(outcome.result(), SearchResult::Unknown));
        assert!(matches!(
            outcome.termination_reason(),
            TerminationReason::Aborted(reason) if reason == "node limit"
        ));
    }

    #[test]
    fn test_abort_after_first_leaf_reports_incumbent_as_feasible() {
        // Visit order for {1..5}, keep 2 is root, then the chain removing
        // 1, 4, 5; the fourth visited node is the first leaf {2, 3}.
        let model = model(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
        let outcome = BnbSolver::new()
            .solve(&model, &SumCriterion::new(), StopAfterNodes { threshold: 4 })
            .unwrap();

        assert!(outcome.has_solution());
        assert!(!outcome.is_optimal());
        let selection = outcome.selection().unwrap();
        assert_eq!(selection.features(), &[2.0, 3.0]);
        assert_eq!(selection.score(), 5.0);
    }

    /// Counts incumbent installations observed through the monitor.
    struct SolutionCounter {
        solutions: u64,
    }

    impl TreeSearchMonitor<f64> for SolutionCounter {
        fn name(&self) -> &str {
            "SolutionCounter"
        }

        fn on_enter_search(&mut self, _model: &FeatureModel<f64>, _stats: &SearchStatistics) {}

        fn on_exit_search(&mut self, stats: &SearchStatistics) {
            assert_eq!(self.solutions, stats.solutions_found);
        }

        fn on_node_visited(&mut self, _node: &crate::tree::TreeNode<f64>, _stats: &SearchStatistics) {}

        fn on_prune(
            &mut self,
            _node: &crate::tree::TreeNode<f64>,
            _reason: PruneReason,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_branches_generated(
            &mut self,
            _node: &crate::tree::TreeNode<f64>,
            _count: usize,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_solution_found(&mut self, _node: &crate::tree::TreeNode<f64>, _stats: &SearchStatistics) {
            self.solutions += 1;
        }
    }

    #[test]
    fn test_monitor_observes_every_incumbent_installation() {
        let model = model(&[1.0, 2.0, 3.0, 4.0, 5.0], 2);
        let outcome = BnbSolver::new()
            .solve(&model, &SumCriterion::new(), SolutionCounter { solutions: 0 })
            .unwrap();

        assert!(outcome.statistics().solutions_found >= 1);
    }
}
