// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Link command - load a graph, append one link, print the refreshed ranking

use super::{coordinator_from_file, rank_nodes, render_ranking};
use crate::prelude::*;
use crate::types::NodeId;
use std::path::PathBuf;
use tracing::info;

/// Run the link command
pub fn run(graph: PathBuf, a: u64, b: u64, json: bool) -> Result<()> {
    let coordinator = coordinator_from_file(&graph)?;

    if coordinator.snapshot().graph.contains_link(NodeId(a), NodeId(b)) {
        info!("link {a}-{b} already present");
    }
    coordinator.append_link(NodeId(a), NodeId(b));

    let snapshot = coordinator.snapshot();
    render_ranking(&rank_nodes(&snapshot.closeness, &snapshot.fraudulent), None, json)
}
