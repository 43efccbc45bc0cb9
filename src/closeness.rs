// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Closeness aggregator - per-node scores derived from the distance set

use crate::types::{ClosenessSet, DistanceSet, NodeId};
use std::collections::HashMap;

/// Derive closeness scores from a distance set
///
/// Farness of a node is the sum of hop-counts over every pair containing it;
/// each pair is visited once and credited to both endpoints. Closeness is
/// `1 / farness`. A node that appears in no pair (isolated, or unreachable
/// from everything) has no farness to invert and is excluded from the
/// result rather than divided.
#[must_use]
pub fn compute_closeness(distances: &DistanceSet) -> ClosenessSet {
    let farness = accumulate_farness(distances);

    farness
        .into_iter()
        .map(|(node, total)| (node, 1.0 / f64::from(total)))
        .collect()
}

/// Sum hop-counts per endpoint across all pairs
fn accumulate_farness(distances: &DistanceSet) -> HashMap<NodeId, u32> {
    let mut farness: HashMap<NodeId, u32> = HashMap::new();

    for (pair, &hops) in distances {
        *farness.entry(pair.lo).or_insert(0) += hops;
        *farness.entry(pair.hi).or_insert(0) += hops;
    }

    farness
}
