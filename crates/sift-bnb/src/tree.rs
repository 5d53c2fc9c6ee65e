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

//! The retained search tree.
//!
//! Nodes live in a flat arena (`Vec<TreeNode>`) addressed by typed
//! `NodeId`s; parents own their children as ordered id lists. The tree is
//! never pruned physically: a bound-dominated node simply stays childless,
//! and the whole structure is kept after the search so a renderer can walk
//! it node by node.
//!
//! `assign_breadth_first_indices` gives every node a unique number in
//! breadth-first order (root = 0, children in insertion order). The index
//! exists purely for external identification of nodes and edges; search
//! correctness never reads it.

use sift_core::{
    num::CriterionValue,
    utils::index::{TypedIndex, TypedIndexTag},
};
use smallvec::SmallVec;
use std::collections::VecDeque;

/// A tag type for search tree node ids.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct NodeIdTag;

impl TypedIndexTag for NodeIdTag {
    const NAME: &'static str = "NodeId";
}

/// A typed index into the tree arena.
pub type NodeId = TypedIndex<NodeIdTag>;

/// Inline storage for per-node feature lists. Most instances keep `D` small;
/// eight inline slots cover them without heap traffic.
pub type FeatureVec<T> = SmallVec<[T; 8]>;

/// One state of the search: a partial removal decision.
///
/// - `branch_value` is the feature removed to reach this node from its
///   parent (`None` for the root).
/// - `features` is the subset still under consideration here.
/// - `preserved` are the values this branch has committed to keep; they are
///   never offered as branch values in this subtree.
/// - `level` is the depth from the root; `features.len() == D - level`.
#[derive(Debug, Clone, PartialEq)]
pub struct TreeNode<T> {
    branch_value: Option<T>,
    features: FeatureVec<T>,
    preserved: FeatureVec<T>,
    level: usize,
    score: T,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    index: Option<usize>,
}

impl<T> TreeNode<T>
where
    T: CriterionValue,
{
    /// Returns the feature removed to create this node, or `None` for the root.
    #[inline]
    pub fn branch_value(&self) -> Option<T> {
        self.branch_value
    }

    /// Returns the feature subset under consideration at this node.
    #[inline]
    pub fn features(&self) -> &[T] {
        &self.features
    }

    /// Returns the features this branch has committed not to remove.
    #[inline]
    pub fn preserved_features(&self) -> &[T] {
        &self.preserved
    }

    /// Returns the depth from the root (root = 0).
    #[inline]
    pub fn level(&self) -> usize {
        self.level
    }

    /// Returns the criterion score of this node's feature subset.
    #[inline]
    pub fn score(&self) -> T {
        self.score
    }

    /// Returns the parent node id, or `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Returns the children in insertion (ascending branch value) order.
    #[inline]
    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    /// Returns the breadth-first index, if it has been assigned.
    #[inline]
    pub fn index(&self) -> Option<usize> {
        self.index
    }
}

/// The arena holding every node created during one search.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchTree<T> {
    nodes: Vec<TreeNode<T>>,
}

impl<T> SearchTree<T>
where
    T: CriterionValue,
{
    /// Creates an empty tree.
    #[inline]
    pub fn new() -> Self {
        Self { nodes: Vec::new() }
    }

    /// Creates an empty tree with preallocated node storage.
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of nodes in the tree.
    #[inline]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns `true` if the tree holds no nodes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the root node id, if the tree is non-empty.
    #[inline]
    pub fn root(&self) -> Option<NodeId> {
        if self.nodes.is_empty() {
            None
        } else {
            Some(NodeId::new(0))
        }
    }

    /// Returns a reference to the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this tree.
    #[inline]
    pub fn node(&self, id: NodeId) -> &TreeNode<T> {
        &self.nodes[id.get()]
    }

    /// Iterates over all nodes in creation order.
    #[inline]
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &TreeNode<T>)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, node)| (NodeId::new(i), node))
    }

    /// Inserts the root node.
    ///
    /// # Panics
    ///
    /// In debug builds, panics if the tree already has a root.
    pub fn push_root(&mut self, features: FeatureVec<T>, score: T) -> NodeId {
        debug_assert!(
            self.nodes.is_empty(),
            "called `SearchTree::push_root` on a tree that already has {} nodes",
            self.nodes.len()
        );

        self.nodes.push(TreeNode {
            branch_value: None,
            features,
            preserved: FeatureVec::new(),
            level: 0,
            score,
            parent: None,
            children: Vec::new(),
            index: None,
        });
        NodeId::new(0)
    }

    /// Inserts a child of `parent` created by removing `branch_value`, and
    /// registers it in the parent's ordered child list.
    ///
    /// # Panics
    ///
    /// Panics if `parent` does not belong to this tree.
    pub fn push_child(
        &mut self,
        parent: NodeId,
        branch_value: T,
        features: FeatureVec<T>,
        preserved: FeatureVec<T>,
        score: T,
    ) -> NodeId {
        let level = self.nodes[parent.get()].level + 1;
        let id = NodeId::new(self.nodes.len());

        debug_assert_eq!(
            features.len(),
            self.nodes[parent.get()].features.len() - 1,
            "called `SearchTree::push_child` with a feature subset that does not shrink by one"
        );

        self.nodes.push(TreeNode {
            branch_value: Some(branch_value),
            features,
            preserved,
            level,
            score,
            parent: Some(parent),
            children: Vec::new(),
            index: None,
        });
        self.nodes[parent.get()].children.push(id);
        id
    }

    /// Assigns every node a unique breadth-first index, starting at 0 for
    /// the root. Within a level the order follows child insertion order.
    /// Visits each node reachable from the root exactly once.
    pub fn assign_breadth_first_indices(&mut self) {
        let Some(root) = self.root() else {
            return;
        };

        let mut queue: VecDeque<NodeId> = VecDeque::new();
        queue.push_back(root);
        let mut next_index = 0usize;

        while let Some(id) = queue.pop_front() {
            self.nodes[id.get()].index = Some(next_index);
            next_index += 1;
            queue.extend(self.nodes[id.get()].children.iter().copied());
        }
    }
}
