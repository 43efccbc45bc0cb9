// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Distance engine - all-pairs shortest-path hop-counts
//!
//! Every unordered pair of distinct nodes is resolved independently by
//! breadth-first frontier expansion. Full pairwise enumeration (rather than
//! one multi-target traversal per source) is a deliberate trade of speed for
//! simplicity; every mutation recomputes the whole set from scratch.

use crate::graph::SocialGraph;
use crate::types::{DistanceSet, NodeId, NodePair};
use std::collections::HashSet;

/// Compute the shortest-path hop-count between every connected pair
///
/// Unreachable pairs are omitted; no sentinel value is stored. A node with
/// zero recorded neighbors contributes no entries. Pure: the same graph
/// always yields the same set.
#[must_use]
pub fn compute_distances(graph: &SocialGraph) -> DistanceSet {
    let nodes = graph.nodes();
    let mut distances = DistanceSet::new();

    for (i, &source) in nodes.iter().enumerate() {
        for &target in &nodes[i + 1..] {
            if let Some(hops) = shortest_hops(graph, source, target) {
                distances.insert(NodePair::new(source, target), hops);
            }
        }
    }

    distances
}

/// Hop-count of the shortest path from `source` to `target`, if any
///
/// The frontier starts at the source's immediate neighbors (hop 1) and each
/// round expands to the not-yet-visited neighbors of the current frontier,
/// until the target appears or the frontier is exhausted.
fn shortest_hops(graph: &SocialGraph, source: NodeId, target: NodeId) -> Option<u32> {
    let mut visited: HashSet<NodeId> = HashSet::new();
    visited.insert(source);

    let mut frontier: HashSet<NodeId> = graph.neighbors(source)?.clone();
    let mut hops = 1;

    while !frontier.is_empty() {
        if frontier.contains(&target) {
            return Some(hops);
        }
        visited.extend(frontier.iter().copied());

        let next: HashSet<NodeId> = frontier
            .iter()
            .filter_map(|&node| graph.neighbors(node))
            .flatten()
            .copied()
            .filter(|node| !visited.contains(node))
            .collect();
        frontier = next;
        hops += 1;
    }

    None
}
