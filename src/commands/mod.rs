// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Command implementations

pub mod completions;
pub mod link;
pub mod rank;

use crate::coordinator::MetricsCoordinator;
use crate::loader::parse_graph;
use crate::prelude::*;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::path::Path;
use tracing::info;

/// One rendered ranking row
#[derive(Debug, Serialize)]
pub struct RankedNode {
    /// Node identifier
    pub node: NodeId,
    /// Closeness score
    pub score: f64,
    /// Whether this node is in the fraudulent sequence
    pub fraudulent: bool,
}

/// Load an edge-list file and seed a coordinator with it
pub fn coordinator_from_file(path: &Path) -> Result<MetricsCoordinator> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    let graph = parse_graph(&content)
        .with_context(|| format!("Failed to parse {}", path.display()))?;
    info!(
        "loaded {} nodes, {} links from {}",
        graph.node_count(),
        graph.edge_count(),
        path.display()
    );
    Ok(MetricsCoordinator::with_graph(graph))
}

/// Order a closeness set for display: descending score, ties by node id
///
/// Fraud labeling comes from the snapshot's fraudulent sequence, not from
/// the score value itself.
#[must_use]
pub fn rank_nodes(closeness: &ClosenessSet, fraudulent: &[NodeId]) -> Vec<RankedNode> {
    let mut ranked: Vec<RankedNode> = closeness
        .iter()
        .map(|(&node, &score)| RankedNode {
            node,
            score,
            fraudulent: fraudulent.contains(&node),
        })
        .collect();
    ranked.sort_by(|a, b| {
        b.score
            .partial_cmp(&a.score)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then(a.node.cmp(&b.node))
    });
    ranked
}

/// Print a ranking, either as a colored table or as JSON
pub fn render_ranking(ranked: &[RankedNode], top: Option<usize>, json: bool) -> Result<()> {
    let shown = match top {
        Some(limit) => &ranked[..limit.min(ranked.len())],
        None => ranked,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(shown)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No scored nodes (graph has no connected pairs)");
        return Ok(());
    }

    println!("{:>8}  {}", "node".bold(), "closeness".bold());
    for entry in shown {
        if entry.fraudulent {
            println!("{:>8}  {:.6}  {}", entry.node, entry.score, "fraudulent".red());
        } else {
            println!("{:>8}  {:.6}", entry.node, entry.score);
        }
    }
    Ok(())
}
