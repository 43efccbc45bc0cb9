// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Distrust decay - suppressing the influence of fraudulent nodes
//!
//! A fraudulent node loses its closeness entirely; its neighborhood is
//! attenuated by path distance. Applying the decay for several fraudulent
//! nodes is a left fold in marking order, each application consuming the
//! previous output. When marked nodes are mutually reachable the result is
//! order-dependent; this compounding is intentional.

use crate::graph::SocialGraph;
use crate::types::{ClosenessSet, DistanceSet, NodeId, NodePair};

/// Re-weight a closeness set around one fraudulent node
///
/// For each scored node `n`:
/// - `n` is the fraudulent node itself: score becomes exactly 0
/// - `n` is a direct neighbor: score is halved
/// - otherwise: score is multiplied by `1 - (1/2)^d` where `d` is the stored
///   hop-count between the two; the factor approaches 1 as `d` grows
/// - no stored distance (unreachable): score passes through unchanged
///
/// The output is a full replacement map: every node of the input is present.
#[must_use]
pub fn decay_closeness(
    fraudulent: NodeId,
    closeness: &ClosenessSet,
    distances: &DistanceSet,
    graph: &SocialGraph,
) -> ClosenessSet {
    closeness
        .iter()
        .map(|(&node, &score)| {
            let decayed = if node == fraudulent {
                0.0
            } else if graph.are_neighbors(node, fraudulent) {
                score / 2.0
            } else {
                match distances.get(&NodePair::new(node, fraudulent)) {
                    Some(&hops) => score * suppression_factor(hops),
                    None => score,
                }
            };
            (node, decayed)
        })
        .collect()
}

/// Fold the decay over every marked node, left to right in marking order
#[must_use]
pub fn apply_decay(
    fraudulent: &[NodeId],
    closeness: ClosenessSet,
    distances: &DistanceSet,
    graph: &SocialGraph,
) -> ClosenessSet {
    fraudulent.iter().fold(closeness, |acc, &node| {
        decay_closeness(node, &acc, distances, graph)
    })
}

/// `1 - (1/2)^d`, the survival fraction at hop-count `d`
fn suppression_factor(hops: u32) -> f64 {
    1.0 - 0.5_f64.powf(f64::from(hops))
}
