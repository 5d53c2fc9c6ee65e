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
    monitor::search_monitor::{PruneReason, SearchCommand, TreeSearchMonitor},
    stats::SearchStatistics,
    tree::TreeNode,
};
use sift_core::num::CriterionValue;
use sift_model::model::FeatureModel;
use std::time::{Duration, Instant};

/// A monitor that prints a progress table while the search runs.
///
/// Lines are emitted at most once per `log_interval`; the wall clock is
/// only consulted when the node counter matches `clock_check_mask` to keep
/// the common path cheap.
#[derive(Debug, Clone)]
pub struct LogTreeSearchMonitor<T>
where
    T: CriterionValue,
{
    start_time: Instant,
    last_log_time: Instant,
    log_interval: Duration,
    clock_check_mask: u64,
    best_score: Option<T>,
}

impl<T> LogTreeSearchMonitor<T>
where
    T: CriterionValue,
{
    pub fn new(log_interval: Duration, clock_check_mask: u64) -> Self {
        Self {
            start_time: Instant::now(),
            last_log_time: Instant::now(),
            log_interval,
            clock_check_mask,
            best_score: None,
        }
    }

    #[inline(always)]
    fn print_header(&self) {
        println!(
            "{:<9} | {:<12} | {:<7} | {:<12} | {:<10} | {:<13}",
            "Elapsed", "Nodes", "Level", "Best Score", "Leaves", "Pruned (Bound)"
        );
        println!("{}", "-".repeat(78));
    }

    #[inline(always)]
    fn log_line(&mut self, node: &TreeNode<T>, stats: &SearchStatistics) {
        let now = Instant::now();
        let elapsed = now.duration_since(self.start_time).as_secs_f32();

        let best_score_str = match &self.best_score {
            Some(score) => format!("{}", score),
            None => "-".to_string(),
        };

        println!(
            "{:<9} | {:<12} | {:<7} | {:<12} | {:<10} | {:<13}",
            format!("{:.1}s", elapsed),
            stats.nodes_explored,
            node.level(),
            best_score_str,
            stats.leaves_evaluated,
            stats.prunings_bound
        );

        self.last_log_time = now;
    }
}

impl<T> Default for LogTreeSearchMonitor<T>
where
    T: CriterionValue,
{
    fn default() -> Self {
        Self::new(Duration::from_secs(1), 1023)
    }
}

impl<T> std::fmt::Display for LogTreeSearchMonitor<T>
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "LogTreeSearchMonitor(log_interval: {}s, clock_check_mask: {})",
            self.log_interval.as_secs(),
            self.clock_check_mask
        )
    }
}

impl<T> TreeSearchMonitor<T> for LogTreeSearchMonitor<T>
where
    T: CriterionValue,
{
    fn name(&self) -> &str {
        "LogTreeSearchMonitor"
    }

    fn on_enter_search(&mut self, model: &FeatureModel<T>, _statistics: &SearchStatistics) {
        self.start_time = Instant::now();
        self.last_log_time = self.start_time;
        self.best_score = None;
        println!(
            "Searching the best {}-sized subset of {} features ({})",
            model.target_size(),
            model.num_features(),
            model.complexity()
        );
        self.print_header();
    }

    fn on_exit_search(&mut self, _statistics: &SearchStatistics) {
        println!("{}", "-".repeat(78));
        println!("Search finished.");
    }

    fn search_command(&mut self, _statistics: &SearchStatistics) -> SearchCommand {
        SearchCommand::Continue
    }

    fn on_node_visited(&mut self, node: &TreeNode<T>, statistics: &SearchStatistics) {
        if (statistics.nodes_explored & self.clock_check_mask) == 0
            && self.last_log_time.elapsed() >= self.log_interval
        {
            self.log_line(node, statistics);
        }
    }

    fn on_prune(
        &mut self,
        _node: &TreeNode<T>,
        _reason: PruneReason,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_branches_generated(
        &mut self,
        _node: &TreeNode<T>,
        _count: usize,
        _statistics: &SearchStatistics,
    ) {
    }

    fn on_solution_found(&mut self, node: &TreeNode<T>, _statistics: &SearchStatistics) {
        self.best_score = Some(node.score());
    }
}
