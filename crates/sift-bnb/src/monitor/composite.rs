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

//! Monitoring combinators for tree search
//!
//! Provides `CompositeTreeSearchMonitor`, a fan-out monitor that forwards
//! every event to its children. This lets you mix logging, metrics, and
//! early stopping without coupling them to the solver.
//!
//! Behavior
//! - Events are dispatched to child monitors in insertion order.
//! - `search_command` short-circuits on the first non-`Continue` response;
//!   put stricter stop conditions first.
//! - Other callbacks always fan out to all children.

use crate::{
    monitor::search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    stats::SearchStatistics,
    tree::TreeNode,
};
use sift_core::num::CriterionValue;
use sift_model::model::FeatureModel;

/// A tree search monitor that aggregates multiple monitors and forwards
/// events to all of them.
pub struct CompositeTreeSearchMonitor<'a, T>
where
    T: CriterionValue,
{
    monitors: Vec<Box<dyn TreeSearchMonitor<T> + 'a>>,
}

impl<'a, T> Default for CompositeTreeSearchMonitor<'a, T>
where
    T: CriterionValue,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, T> CompositeTreeSearchMonitor<'a, T>
where
    T: CriterionValue,
{
    /// Creates a new empty `CompositeTreeSearchMonitor`.
    #[inline(always)]
    pub fn new() -> Self {
        Self {
            monitors: Vec::new(),
        }
    }

    /// Adds a new monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor<M>(&mut self, monitor: M)
    where
        M: TreeSearchMonitor<T> + 'a,
    {
        self.monitors.push(Box::new(monitor));
    }

    /// Adds a boxed monitor to the composite monitor.
    #[inline(always)]
    pub fn add_monitor_boxed(&mut self, monitor: Box<dyn TreeSearchMonitor<T> + 'a>) {
        self.monitors.push(monitor);
    }

    /// Returns the number of monitors contained in the composite monitor.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.monitors.len()
    }

    /// Returns `true` if the composite monitor contains no monitors.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.monitors.is_empty()
    }
}

impl<'a, T> TreeSearchMonitor<T> for CompositeTreeSearchMonitor<'a, T>
where
    T: CriterionValue,
{
    fn name(&self) -> &str {
        "CompositeTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, model: &FeatureModel<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_enter_search(model, statistics);
        }
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_exit_search(statistics);
        }
    }

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        for monitor in self.monitors.iter_mut() {
            let command = monitor.search_command(statistics);
            if command != SearchCommand::Continue {
                return command;
            }
        }
        SearchCommand::Continue
    }

    fn on_node_visited(&mut self, node: &TreeNode<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_node_visited(node, statistics);
        }
    }

    fn on_prune(&mut self, node: &TreeNode<T>, reason: PruneReason, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_prune(node, reason, statistics);
        }
    }

    fn on_branches_generated(
        &mut self,
        node: &TreeNode<T>,
        count: usize,
        statistics: &SearchStatistics,
    ) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_branches_generated(node, count, statistics);
        }
    }

    fn on_solution_found(&mut self, node: &TreeNode<T>, statistics: &SearchStatistics) {
        for monitor in self.monitors.iter_mut() {
            monitor.on_solution_found(node, statistics);
        }
    }
}

impl<'a, T> FromIterator<Box<dyn TreeSearchMonitor<T> + 'a>> for CompositeTreeSearchMonitor<'a, T>
where
    T: CriterionValue,
{
    #[inline(always)]
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = Box<dyn TreeSearchMonitor<T> + 'a>>,
    {
        Self {
            monitors: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::CompositeTreeSearchMonitor;
    use crate::monitor::search_monitor::{SearchCommand, TreeSearchMonitor};
    use crate::stats::SearchStatistics;
    use crate::tree::TreeNode;
    use sift_model::model::FeatureModel;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Counts callback invocations and optionally terminates.
    struct ProbeMonitor {
        visits: Rc<Cell<usize>>,
        terminate: bool,
    }

    impl TreeSearchMonitor<f64> for ProbeMonitor {
        fn name(&self) -> &str {
            "ProbeMonitor"
        }

        fn on_enter_search(&mut self, _model: &FeatureModel<f64>, _stats: &SearchStatistics) {}

        fn on_exit_search(&mut self, _stats: &SearchStatistics) {}

        fn search_command(&mut self, _stats: &SearchStatistics) -> SearchCommand {
            if self.terminate {
                SearchCommand::Terminate("probe stop".to_string())
            } else {
                SearchCommand::Continue
            }
        }

        fn on_node_visited(&mut self, _node: &TreeNode<f64>, _stats: &SearchStatistics) {
            self.visits.set(self.visits.get() + 1);
        }

        fn on_prune(
            &mut self,
            _node: &TreeNode<f64>,
            _reason: crate::monitor::search_monitor::PruneReason,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_branches_generated(
            &mut self,
            _node: &TreeNode<f64>,
            _count: usize,
            _stats: &SearchStatistics,
        ) {
        }

        fn on_solution_found(&mut self, _node: &TreeNode<f64>, _stats: &SearchStatistics) {}
    }

    #[test]
    fn test_empty_composite_continues() {
        let mut composite: CompositeTreeSearchMonitor<'_, f64> =
            CompositeTreeSearchMonitor::new();
        assert!(composite.is_empty());
        assert_eq!(
            composite.search_command(&SearchStatistics::default()),
            SearchCommand::Continue
        );
    }

    #[test]
    fn test_events_fan_out_to_all_children() {
        let count_a = Rc::new(Cell::new(0));
        let count_b = Rc::new(Cell::new(0));

        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(ProbeMonitor {
            visits: Rc::clone(&count_a),
            terminate: false,
        });
        composite.add_monitor(ProbeMonitor {
            visits: Rc::clone(&count_b),
            terminate: false,
        });
        assert_eq!(composite.len(), 2);

        let mut tree = crate::tree::SearchTree::new();
        let root = tree.push_root(smallvec::smallvec![1.0, 2.0], 3.0);
        let stats = SearchStatistics::default();

        composite.on_node_visited(tree.node(root), &stats);
        composite.on_node_visited(tree.node(root), &stats);

        assert_eq!(count_a.get(), 2);
        assert_eq!(count_b.get(), 2);
    }

    #[test]
    fn test_search_command_short_circuits() {
        let counter = Rc::new(Cell::new(0));

        let mut composite = CompositeTreeSearchMonitor::new();
        composite.add_monitor(ProbeMonitor {
            visits: Rc::clone(&counter),
            terminate: true,
        });
        composite.add_monitor(ProbeMonitor {
            visits: Rc::clone(&counter),
            terminate: false,
        });

        let command = composite.search_command(&SearchStatistics::default());
        assert_eq!(command, SearchCommand::Terminate("probe stop".to_string()));
    }
}
