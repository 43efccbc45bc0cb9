// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//! Graph loader - builds a graph from whitespace-separated edge lines
//!
//! Each non-blank line names one undirected link as two integer node ids.
//! The graph is fully built before it is returned, so a parse failure never
//! leaves partial state anywhere.

use crate::graph::SocialGraph;
use crate::types::NodeId;
use thiserror::Error;

/// Failure while parsing edge lines
#[derive(Debug, Error)]
pub enum GraphParseError {
    /// A line did not contain exactly two tokens
    #[error("line {line}: expected two node ids, found {found} token(s)")]
    WrongTokenCount {
        /// 1-based line number
        line: usize,
        /// Number of tokens on the line
        found: usize,
    },
    /// A token was not a valid integer node id
    #[error("line {line}: invalid node id {token:?}")]
    InvalidNodeId {
        /// 1-based line number
        line: usize,
        /// The offending token
        token: String,
    },
}

/// Fold edge lines into a graph via repeated `append_link`
///
/// Blank lines are skipped. Any other line must hold exactly two
/// whitespace-separated integer node ids.
pub fn parse_graph_from_lines<'a, I>(lines: I) -> Result<SocialGraph, GraphParseError>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut graph = SocialGraph::new();

    for (index, line) in lines.into_iter().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }
        if tokens.len() != 2 {
            return Err(GraphParseError::WrongTokenCount {
                line: index + 1,
                found: tokens.len(),
            });
        }

        let a = parse_node(tokens[0], index + 1)?;
        let b = parse_node(tokens[1], index + 1)?;
        graph.append_link(a, b);
    }

    Ok(graph)
}

/// Parse a whole edge-list document
pub fn parse_graph(input: &str) -> Result<SocialGraph, GraphParseError> {
    parse_graph_from_lines(input.lines())
}

fn parse_node(token: &str, line: usize) -> Result<NodeId, GraphParseError> {
    token
        .parse::<u64>()
        .map(NodeId)
        .map_err(|_| GraphParseError::InvalidNodeId {
            line,
            token: token.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_edge_lines() {
        let graph = parse_graph("0 1\n1 2\n").unwrap();

        assert!(graph.contains_link(NodeId(0), NodeId(1)));
        assert!(graph.contains_link(NodeId(1), NodeId(2)));
        assert_eq!(graph.node_count(), 3);
    }

    #[test]
    fn test_skips_blank_lines() {
        let graph = parse_graph("0 1\n\n   \n1 2\n").unwrap();
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_tolerates_extra_whitespace() {
        let graph = parse_graph("  0\t1 \n").unwrap();
        assert!(graph.contains_link(NodeId(0), NodeId(1)));
    }

    #[test]
    fn test_rejects_non_numeric_token() {
        let err = parse_graph("0 x\n").unwrap_err();
        assert!(matches!(
            err,
            GraphParseError::InvalidNodeId { line: 1, .. }
        ));
    }

    #[test]
    fn test_rejects_missing_token() {
        let err = parse_graph("0 1\n2\n").unwrap_err();
        assert!(matches!(
            err,
            GraphParseError::WrongTokenCount { line: 2, found: 1 }
        ));
    }

    #[test]
    fn test_rejects_excess_tokens() {
        let err = parse_graph("0 1 2\n").unwrap_err();
        assert!(matches!(
            err,
            GraphParseError::WrongTokenCount { line: 1, found: 3 }
        ));
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_graph("").unwrap().is_empty());
    }
}
