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

//! Sift-BnB: branch-and-bound for feature subset selection
//!
//! Selects the `d`-sized subset of `D` features that maximizes a monotonic
//! criterion function. The solver separates criterion evaluation,
//! monotonicity validation, monitoring, and incumbent handling so each can
//! be exercised and swapped without touching the search logic.
//!
//! Core flow
//! - Provide a validated `sift_model::model::FeatureModel<T>`.
//! - Choose an `eval::evaluator::CriterionEvaluator` (subset scoring).
//! - Optionally attach `monitor` implementations for observability or
//!   cooperative abort.
//! - Run `bnb::BnbSolver::solve`; the outcome carries the winning
//!   `Selection`, statistics, and the fully retained, breadth-first-indexed
//!   search tree for rendering.
//!
//! Assumptions and guarantees
//! - The criterion must be monotonically non-decreasing under set
//!   inclusion; the solver proves this exhaustively before searching and
//!   refuses to run otherwise, because bound pruning is only sound under
//!   that property.
//! - Deterministic: branch values are chosen in ascending order, so the
//!   tree shape and the winner of tied scores are reproducible.
//!
//! Module map
//! - `bnb`: the solver engine and session orchestration.
//! - `eval`: criterion interface, built-in criteria, monotonicity
//!   validation.
//! - `incumbent`: the session-owned best-leaf record.
//! - `monitor`: tree-search monitors (no-op, composite, log).
//! - `result`: search outcomes with termination reasons.
//! - `stats`: lightweight counters/timing.
//! - `tree`: the retained arena search tree and breadth-first indexing.

pub mod bnb;
pub mod eval;
pub mod incumbent;
pub mod monitor;
pub mod result;
pub mod stats;
pub mod tree;
