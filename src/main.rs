// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Closerank CLI - closeness centrality over a live social graph

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use closerank::commands;

#[derive(Parser)]
#[command(name = "closerank")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rank nodes by closeness, optionally marking nodes fraudulent
    Rank {
        /// Edge-list file (two node ids per line)
        #[arg(short, long, env = "CLOSERANK_GRAPH")]
        graph: std::path::PathBuf,

        /// Nodes to mark fraudulent, applied in the given order
        #[arg(long)]
        fraud: Vec<u64>,

        /// Show only the first K nodes
        #[arg(long)]
        top: Option<usize>,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Append one link to a graph and show the refreshed ranking
    Link {
        /// Edge-list file (two node ids per line)
        #[arg(short, long, env = "CLOSERANK_GRAPH")]
        graph: std::path::PathBuf,

        /// First endpoint
        a: u64,

        /// Second endpoint
        b: u64,

        /// Output in JSON format
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => tracing::Level::INFO,
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .init();

    // Execute command
    match cli.command {
        Commands::Rank { graph, fraud, top, json } => {
            commands::rank::run(graph, fraud, top, json)
        }
        Commands::Link { graph, a, b, json } => {
            commands::link::run(graph, a, b, json)
        }
        Commands::Completions { shell } => {
            commands::completions::run(shell, &mut Cli::command())
        }
    }
}
