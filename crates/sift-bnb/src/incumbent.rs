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

//! # Incumbent (Best Leaf Holder)
//!
//! The record of the best candidate solution seen so far during one search.
//! Owned exclusively by a single search session and threaded through the
//! traversal; repeated or interleaved searches each get a fresh instance,
//! so no state leaks between runs.
//!
//! Installation policy (load-bearing for reproducibility):
//! - the first leaf always installs, regardless of score;
//! - later leaves install only on a strictly greater score, so the
//!   first-found leaf wins ties.
//!
//! `dominates` is the pruning test: a node whose score does not exceed the
//! incumbent cannot lead to a better leaf under a monotonic criterion.

use crate::tree::NodeId;
use sift_core::num::CriterionValue;

/// The best (incumbent) leaf found so far in one search session.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Incumbent<T> {
    best: Option<(NodeId, T)>,
}

impl<T> Incumbent<T>
where
    T: CriterionValue,
{
    /// Creates an incumbent with no leaf installed yet.
    #[inline]
    pub fn new() -> Self {
        Self { best: None }
    }

    /// Returns `true` if a leaf has been installed.
    #[inline]
    pub fn has_solution(&self) -> bool {
        self.best.is_some()
    }

    /// Returns the score of the incumbent leaf, if any.
    #[inline]
    pub fn best_score(&self) -> Option<T> {
        self.best.map(|(_, score)| score)
    }

    /// Returns the node id of the incumbent leaf, if any.
    #[inline]
    pub fn best_node(&self) -> Option<NodeId> {
        self.best.map(|(node, _)| node)
    }

    /// Returns `true` if the given score cannot beat the incumbent
    /// (i.e., an incumbent exists and `score` does not exceed it).
    /// Always `false` before the first leaf has been seen.
    #[inline]
    pub fn dominates(&self, score: T) -> bool {
        match self.best {
            Some((_, best_score)) => score <= best_score,
            None => false,
        }
    }

    /// Attempts to install the given leaf as the new incumbent.
    /// Returns `true` if it was installed.
    #[inline]
    pub fn try_install(&mut self, node: NodeId, score: T) -> bool {
        match self.best {
            None => {
                self.best = Some((node, score));
                true
            }
            Some((_, best_score)) if score > best_score => {
                self.best = Some((node, score));
                true
            }
            Some(_) => false,
        }
    }
}

impl<T> std::fmt::Display for Incumbent<T>
where
    T: CriterionValue,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.best {
            Some((node, score)) => write!(f, "Incumbent(node: {}, score: {})", node, score),
            None => write!(f, "Incumbent(none)"),
        }
    }
}
