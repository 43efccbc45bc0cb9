// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Rank command - load a graph, apply fraud markings, print the ranking

use super::{coordinator_from_file, rank_nodes, render_ranking};
use crate::prelude::*;
use crate::types::NodeId;
use std::path::PathBuf;
use tracing::info;

/// Run the rank command
pub fn run(graph: PathBuf, fraud: Vec<u64>, top: Option<usize>, json: bool) -> Result<()> {
    let coordinator = coordinator_from_file(&graph)?;

    // Marking order matters: the decay fold is applied left to right
    for node in fraud {
        info!("marking node {node} fraudulent");
        coordinator.mark_fraudulent(NodeId(node));
    }

    let snapshot = coordinator.snapshot();
    render_ranking(
        &rank_nodes(&snapshot.closeness, &snapshot.fraudulent),
        top,
        json,
    )
}
