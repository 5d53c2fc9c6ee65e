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

use std::time::Duration;

/// Statistics collected during the execution of the Sift-BnB solver.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    /// Total nodes visited.
    pub nodes_explored: u64,
    /// Total leaf nodes whose score reached the incumbent check.
    pub leaves_evaluated: u64,
    /// Total child nodes generated by branching.
    pub branches_generated: u64,
    /// Subtrees discarded because the node score did not beat the incumbent.
    pub prunings_bound: u64,
    /// Total incumbent installations (first leaf plus every improvement).
    pub solutions_found: u64,
    /// The deepest level reached in the tree.
    pub max_depth: u64,
    /// Total time spent in the solver.
    pub time_total: Duration,
}

impl SearchStatistics {
    #[inline]
    pub fn on_node_explored(&mut self) {
        self.nodes_explored = self.nodes_explored.saturating_add(1);
    }

    #[inline]
    pub fn on_leaf_evaluated(&mut self) {
        self.leaves_evaluated = self.leaves_evaluated.saturating_add(1);
    }

    #[inline]
    pub fn on_branches_generated(&mut self, count: u64) {
        self.branches_generated = self.branches_generated.saturating_add(count);
    }

    #[inline]
    pub fn on_pruning_bound(&mut self) {
        self.prunings_bound = self.prunings_bound.saturating_add(1);
    }

    #[inline]
    pub fn on_solution_found(&mut self) {
        self.solutions_found = self.solutions_found.saturating_add(1);
    }

    #[inline]
    pub fn on_depth_update(&mut self, depth: u64) {
        self.max_depth = self.max_depth.max(depth);
    }

    #[inline]
    pub fn set_total_time(&mut self, duration: Duration) {
        self.time_total = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Sift-BnB Search Statistics:")?;
        writeln!(f, "  Nodes explored:      {}", self.nodes_explored)?;
        writeln!(f, "  Leaves evaluated:    {}", self.leaves_evaluated)?;
        writeln!(f, "  Branches generated:  {}", self.branches_generated)?;
        writeln!(f, "  Prunings (bound):    {}", self.prunings_bound)?;
        writeln!(f, "  Solutions found:     {}", self.solutions_found)?;
        writeln!(f, "  Max depth reached:   {}", self.max_depth)?;
        writeln!(f, "  Total time:          {:.2?}", self.time_total)?;
        Ok(())
    }
}
