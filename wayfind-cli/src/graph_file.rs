//! JSON graph file loading.
//!
//! The file format is one adjacency list per node, indexed by node id:
//!
//! ```json
//! [
//!     [{"to": 1, "weight": 4.0}, {"to": 2, "weight": 1.0}],
//!     [{"to": 3, "weight": 1.0}],
//!     [{"to": 1, "weight": 2.0}, {"to": 3, "weight": 5.0}],
//!     []
//! ]
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Error};

use wayfind_graph::{Edge, Graph};

/// Read and validate a graph file.
pub(crate) fn load(path: &Path) -> Result<Graph<f64>, Error> {
    let text = fs::read_to_string(path).with_context(|| format!("Can't read graph file {}", path.display()))?;
    parse(&text).with_context(|| format!("Bad graph file {}", path.display()))
}

fn parse(text: &str) -> Result<Graph<f64>, Error> {
    let adjacency: Vec<Vec<Edge<f64>>> = serde_json::from_str(text).context("Malformed adjacency lists")?;
    let graph = Graph::new(adjacency)?;
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let g = parse(r#"[[{"to": 1, "weight": 4.0}, {"to": 2, "weight": 1.0}], [], []]"#).expect("parse failed");
        assert_eq!(g.node_count(), 3);
        assert_eq!(g.neighbors(0), &[Edge::new(1, 4.0), Edge::new(2, 1.0)]);
    }

    #[test]
    fn test_malformed_json_rejected() {
        assert!(parse(r#"{"nodes": 3}"#).is_err());
        assert!(parse("").is_err());
    }

    #[test]
    fn test_invalid_graph_rejected() {
        // Valid JSON, but edge target out of range.
        assert!(parse(r#"[[{"to": 5, "weight": 1.0}]]"#).is_err());
        // Negative weight.
        assert!(parse(r#"[[{"to": 0, "weight": -1.0}]]"#).is_err());
    }
}
