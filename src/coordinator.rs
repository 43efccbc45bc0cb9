// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Metrics coordinator - the single owner of graph-and-metrics state
//!
//! All mutation goes through the coordinator, which rebuilds the derived
//! sets inside its critical section and commits graph, distances, closeness,
//! and the fraudulent sequence together. Readers always get one complete
//! generation; there is no state where the metrics are stale relative to
//! the graph.

use crate::closeness::compute_closeness;
use crate::decay::apply_decay;
use crate::distance::compute_distances;
use crate::graph::SocialGraph;
use crate::types::{ClosenessSet, DistanceSet, NodeId};
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::debug;

/// One atomically-consistent snapshot of graph and derived metrics
#[derive(Debug, Clone)]
pub struct Generation {
    /// The graph this generation was derived from
    pub graph: SocialGraph,
    /// Shortest-path hop-counts for the graph
    pub distances: DistanceSet,
    /// Closeness scores, already reflecting every marked node
    pub closeness: ClosenessSet,
    /// Nodes marked fraudulent, in marking order
    pub fraudulent: Vec<NodeId>,
    /// When this generation was committed
    pub committed_at: DateTime<Utc>,
}

impl Generation {
    /// Build a generation from a graph and an ordered fraudulent sequence
    ///
    /// Distances and closeness are recomputed from scratch, then the decay
    /// is folded over the fraudulent sequence in order.
    #[must_use]
    pub fn rebuild(graph: SocialGraph, fraudulent: Vec<NodeId>) -> Self {
        let distances = compute_distances(&graph);
        let closeness = compute_closeness(&distances);
        let closeness = apply_decay(&fraudulent, closeness, &distances, &graph);

        Self {
            graph,
            distances,
            closeness,
            fraudulent,
            committed_at: Utc::now(),
        }
    }
}

impl Default for Generation {
    fn default() -> Self {
        Self::rebuild(SocialGraph::new(), Vec::new())
    }
}

/// Transactional owner of the current [`Generation`]
///
/// Cloning shares the underlying state, so concurrent callers can each hold
/// a handle. Mutations serialize on a write lock and swap in a freshly built
/// generation; reads clone the current `Arc` under the read lock and can
/// never observe a partial commit.
#[derive(Clone, Default)]
pub struct MetricsCoordinator {
    current: Arc<RwLock<Arc<Generation>>>,
}

impl MetricsCoordinator {
    /// Create a coordinator over an empty graph
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a coordinator seeded with an initial graph
    #[must_use]
    pub fn with_graph(graph: SocialGraph) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(Generation::rebuild(
                graph,
                Vec::new(),
            )))),
        }
    }

    /// The most recently committed generation
    #[must_use]
    pub fn snapshot(&self) -> Arc<Generation> {
        Arc::clone(&self.current.read())
    }

    /// The most recently committed closeness set
    #[must_use]
    pub fn current_closeness(&self) -> ClosenessSet {
        self.snapshot().closeness.clone()
    }

    /// Connect two nodes and refresh the metrics
    ///
    /// When the link already exists this is a no-op that returns the current
    /// snapshot without recomputing anything. Otherwise the distance set,
    /// closeness set, and decay fold are rebuilt from the new graph and
    /// committed together.
    pub fn append_link(&self, a: NodeId, b: NodeId) -> ClosenessSet {
        let mut current = self.current.write();
        if current.graph.contains_link(a, b) {
            debug!("link {a}-{b} already present, skipping recompute");
            return current.closeness.clone();
        }

        let mut graph = current.graph.clone();
        graph.append_link(a, b);
        let next = Generation::rebuild(graph, current.fraudulent.clone());
        debug!(
            "committed link {a}-{b}: {} nodes, {} scored",
            next.graph.node_count(),
            next.closeness.len()
        );
        *current = Arc::new(next);
        current.closeness.clone()
    }

    /// Mark a node fraudulent and refresh the closeness set
    ///
    /// The fraudulent sequence gains the node once, but closeness is always
    /// re-derived from the current distances and the full decay fold, so the
    /// committed scores reflect every marked node. The graph and distance
    /// set are unchanged by this operation.
    pub fn mark_fraudulent(&self, node: NodeId) -> ClosenessSet {
        let mut current = self.current.write();

        let mut fraudulent = current.fraudulent.clone();
        if !fraudulent.contains(&node) {
            fraudulent.push(node);
        }

        let closeness = compute_closeness(&current.distances);
        let closeness = apply_decay(&fraudulent, closeness, &current.distances, &current.graph);
        debug!("marked {node} fraudulent, {} marks total", fraudulent.len());

        let next = Generation {
            graph: current.graph.clone(),
            distances: current.distances.clone(),
            closeness,
            fraudulent,
            committed_at: Utc::now(),
        };
        *current = Arc::new(next);
        current.closeness.clone()
    }

    /// Replace the graph wholesale and refresh the metrics
    ///
    /// A reset with an identical graph is a no-op. Fraudulent markings are
    /// not cleared: they persist across topology resets and are re-applied
    /// to the new closeness set.
    pub fn reset_to_graph(&self, graph: SocialGraph) -> ClosenessSet {
        let mut current = self.current.write();
        if current.graph == graph {
            debug!("reset graph identical to current, skipping recompute");
            return current.closeness.clone();
        }

        let next = Generation::rebuild(graph, current.fraudulent.clone());
        debug!(
            "reset committed: {} nodes, {} marks re-applied",
            next.graph.node_count(),
            next.fraudulent.len()
        );
        *current = Arc::new(next);
        current.closeness.clone()
    }
}
