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

//! Graphviz DOT rendering of a finished search tree.
//!
//! Walks the retained tree node by node and emits one DOT node per search
//! node (labeled with its feature subset, criterion value, and preserved
//! set) and one edge per parent-child link (labeled with the branch value).
//! Purely presentational; nothing here feeds back into the search.

use sift_core::{num::CriterionValue, utils::fmt::join_values};
use sift_bnb::tree::SearchTree;
use std::io::Write;

/// Writes the tree as a Graphviz `digraph`.
///
/// The tree must already be breadth-first indexed; `BnbSolver::solve`
/// always returns it that way.
pub fn write_dot<T, W>(tree: &SearchTree<T>, out: &mut W) -> std::io::Result<()>
where
    T: CriterionValue,
    W: Write,
{
    writeln!(out, "digraph selection_tree {{")?;
    writeln!(out, "  node [shape=box];")?;

    for (_, node) in tree.nodes() {
        let index = node
            .index()
            .expect("expected a breadth-first indexed tree for rendering");

        writeln!(
            out,
            "  n{} [label=\"Features = {}\\nJ = {}\\nPreserved = {}\"];",
            index,
            join_values(node.features()),
            node.score(),
            join_values(node.preserved_features()),
        )?;

        if let Some(parent) = node.parent() {
            let parent_index = tree
                .node(parent)
                .index()
                .expect("expected a breadth-first indexed tree for rendering");
            let branch_value = node
                .branch_value()
                .expect("expected a branch value on a non-root node");
            writeln!(
                out,
                "  n{} -> n{} [label=\"{}\"];",
                parent_index, index, branch_value
            )?;
        }
    }

    writeln!(out, "}}")?;
    Ok(())
}
