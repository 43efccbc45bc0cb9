// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph store - the undirected adjacency relation
//!
//! Invariant: symmetry. If b is listed as a neighbor of a, then a is listed
//! as a neighbor of b. Every mutation goes through [`SocialGraph::append_link`],
//! which applies both directions together.

use crate::types::NodeId;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Undirected graph as a node-to-neighbors adjacency map
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialGraph {
    /// Neighbor sets keyed by node
    adjacency: HashMap<NodeId, HashSet<NodeId>>,
}

impl SocialGraph {
    /// Create a new empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True iff `a` and `b` are both present and each lists the other
    #[must_use]
    pub fn contains_link(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(&a).is_some_and(|n| n.contains(&b))
            && self.adjacency.get(&b).is_some_and(|n| n.contains(&a))
    }

    /// Connect `a` and `b`, creating either node if absent
    ///
    /// Both directions are applied together, so no caller can observe a
    /// half-linked state. Idempotent when the link already exists.
    /// `append_link(a, a)` is a no-op: self-loops are not modeled.
    pub fn append_link(&mut self, a: NodeId, b: NodeId) {
        if a == b {
            return;
        }
        self.adjacency.entry(a).or_default().insert(b);
        self.adjacency.entry(b).or_default().insert(a);
    }

    /// Neighbors of `node`, empty if the node is unknown
    #[must_use]
    pub fn neighbors(&self, node: NodeId) -> Option<&HashSet<NodeId>> {
        self.adjacency.get(&node)
    }

    /// True iff `a` and `b` share an edge
    #[must_use]
    pub fn are_neighbors(&self, a: NodeId, b: NodeId) -> bool {
        self.adjacency.get(&a).is_some_and(|n| n.contains(&b))
    }

    /// All nodes present as keys, in ascending id order
    ///
    /// Sorted so that pairwise enumeration and rendered output are
    /// deterministic regardless of map iteration order.
    #[must_use]
    pub fn nodes(&self) -> Vec<NodeId> {
        let mut nodes: Vec<NodeId> = self.adjacency.keys().copied().collect();
        nodes.sort_unstable();
        nodes
    }

    /// Number of nodes present as keys
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected edges
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(HashSet::len).sum::<usize>() / 2
    }

    /// Check if the graph has no nodes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.adjacency.is_empty()
    }
}
