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

//! Tree search monitoring interface
//!
//! Declares the `TreeSearchMonitor` trait, `PruneReason`, and
//! `SearchCommand` for observing and controlling the branch-and-bound
//! traversal. Callbacks cover the solver lifecycle; a monitor can stop the
//! search cooperatively via `search_command` (default: Continue), in which
//! case the outcome carries the best incumbent found so far.
//!
//! Lifecycle highlights
//! - enter → {node visited → prune | solution | branches} → exit
//! - `SearchStatistics` is provided to every callback for telemetry.
//!
//! Design notes
//! - Methods take `&mut self`; monitors are assumed single-threaded.
//! - Keep callbacks lightweight; they run inside the traversal loop.

use crate::{stats::SearchStatistics, tree::TreeNode};
use sift_core::num::CriterionValue;
use sift_model::model::FeatureModel;

/// Instruction returned by a monitor to the running search.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum SearchCommand {
    #[default]
    Continue,
    Terminate(String),
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "Continue"),
            SearchCommand::Terminate(reason) => write!(f, "Terminate: {}", reason),
        }
    }
}

/// Reasons for pruning a search node.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum PruneReason {
    /// The subtree is dominated by the incumbent bound.
    BoundDominated,
}

impl std::fmt::Display for PruneReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PruneReason::BoundDominated => write!(f, "BoundDominated"),
        }
    }
}

/// Trait for monitoring and controlling the search process of the solver.
pub trait TreeSearchMonitor<T>
where
    T: CriterionValue,
{
    /// Returns the name of the monitor.
    fn name(&self) -> &str;
    /// Called when the search starts.
    fn on_enter_search(&mut self, model: &FeatureModel<T>, statistics: &SearchStatistics);
    /// Called when the search ends.
    fn on_exit_search(&mut self, statistics: &SearchStatistics);
    /// Called before each node visit to determine the next action.
    fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }
    /// Called when a node is taken from the work stack.
    fn on_node_visited(&mut self, node: &TreeNode<T>, statistics: &SearchStatistics);
    /// Called when a node's subtree is pruned.
    fn on_prune(&mut self, node: &TreeNode<T>, reason: PruneReason, statistics: &SearchStatistics);
    /// Called when children have been generated for a node.
    fn on_branches_generated(
        &mut self,
        node: &TreeNode<T>,
        count: usize,
        statistics: &SearchStatistics,
    );
    /// Called when a leaf is installed as the new incumbent.
    fn on_solution_found(&mut self, node: &TreeNode<T>, statistics: &SearchStatistics);
}

impl<T> std::fmt::Debug for dyn TreeSearchMonitor<T> + '_
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

impl<T> std::fmt::Display for dyn TreeSearchMonitor<T> + '_
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "TreeSearchMonitor({})", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{PruneReason, SearchCommand};

    #[test]
    fn test_search_command_default_is_continue() {
        assert_eq!(SearchCommand::default(), SearchCommand::Continue);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", SearchCommand::Continue), "Continue");
        assert_eq!(
            format!("{}", SearchCommand::Terminate("time limit".to_string())),
            "Terminate: time limit"
        );
        assert_eq!(format!("{}", PruneReason::BoundDominated), "BoundDominated");
    }
}
