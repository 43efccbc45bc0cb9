// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Closerank library - closeness centrality over a live social graph
//!
//! This crate maintains an in-memory undirected graph together with derived
//! closeness-centrality scores that stay transactionally consistent with the
//! graph as it is mutated, and that reflect fraud markings through a
//! distance-based distrust decay.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod closeness;
pub mod commands;
pub mod coordinator;
pub mod decay;
pub mod distance;
pub mod graph;
pub mod loader;

/// Core data types for nodes, distances, and scores
pub mod types {
    use serde::{Deserialize, Serialize};
    use std::collections::HashMap;
    use std::fmt;

    // =========================================================================
    // Node
    // =========================================================================

    /// Opaque graph vertex identifier
    ///
    /// Equality and hashing are all the graph needs; `Ord` exists only so
    /// enumeration and rendered output are deterministic.
    #[derive(
        Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
    )]
    #[serde(transparent)]
    pub struct NodeId(pub u64);

    impl fmt::Display for NodeId {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            write!(f, "{}", self.0)
        }
    }

    impl From<u64> for NodeId {
        fn from(raw: u64) -> Self {
            Self(raw)
        }
    }

    // =========================================================================
    // Node Pair
    // =========================================================================

    /// Unordered pair of two distinct nodes
    ///
    /// Normalized on construction: `NodePair::new(a, b)` and
    /// `NodePair::new(b, a)` are the same key.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
    pub struct NodePair {
        /// Smaller endpoint
        pub lo: NodeId,
        /// Larger endpoint
        pub hi: NodeId,
    }

    impl NodePair {
        /// Build a normalized pair from two endpoints in either order
        #[must_use]
        pub fn new(a: NodeId, b: NodeId) -> Self {
            if a <= b {
                Self { lo: a, hi: b }
            } else {
                Self { lo: b, hi: a }
            }
        }

        /// True iff `node` is one of the two endpoints
        #[must_use]
        pub fn contains(&self, node: NodeId) -> bool {
            self.lo == node || self.hi == node
        }

        /// The endpoint that is not `node`, if `node` is an endpoint
        #[must_use]
        pub fn other(&self, node: NodeId) -> Option<NodeId> {
            if self.lo == node {
                Some(self.hi)
            } else if self.hi == node {
                Some(self.lo)
            } else {
                None
            }
        }
    }

    // =========================================================================
    // Derived Sets
    // =========================================================================

    /// Shortest-path hop-counts, keyed by unordered pair
    ///
    /// A pair is present iff a path exists between its endpoints in the graph
    /// the set was derived from; unreachable pairs are simply absent.
    pub type DistanceSet = HashMap<NodePair, u32>;

    /// Closeness score per node (reciprocal of farness)
    ///
    /// Defined only for nodes with at least one reachable counterpart.
    pub type ClosenessSet = HashMap<NodeId, f64>;

}

/// Prelude for common imports
pub mod prelude {
    pub use crate::types::{ClosenessSet, DistanceSet, NodeId, NodePair};
    pub use anyhow::{Context, Result};
}
