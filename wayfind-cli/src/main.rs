//! Shortest path queries over JSON graph files.

use std::path::PathBuf;

use anyhow::Error;
use clap::{Args, Parser, Subcommand};
use log::debug;

use wayfind_graph::NodeId;
use wayfind_search::{
    heuristics, shortest_distance_bidirectional, shortest_distances, shortest_path, shortest_path_astar,
};

mod graph_file;

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

/// Shortest path queries over weighted directed graphs.
#[derive(Parser)]
#[clap(version = "0.1.0", author = "The CJDNS development team")]
struct Opts {
    /// Graph file: a JSON array of adjacency lists, one per node
    #[clap(long = "graph")]
    graph: PathBuf,

    #[clap(subcommand)]
    query: Query,
}

#[derive(Subcommand)]
enum Query {
    /// Distances from one node to every node
    Distances(Distances),
    /// Shortest path between two nodes
    Path(PathQuery),
    /// Point-to-point distance via bidirectional search
    Bidirectional(Bidirectional),
}

#[derive(Args)]
struct Distances {
    /// Start node
    #[clap(long = "from")]
    from: NodeId,
}

#[derive(Args)]
struct PathQuery {
    /// Start node
    #[clap(long = "from")]
    from: NodeId,

    /// Target node
    #[clap(long = "to")]
    to: NodeId,

    /// Guide the search with a Manhattan heuristic for a grid of this
    /// width (node ids numbered row by row)
    #[clap(long = "grid-width")]
    grid_width: Option<usize>,
}

#[derive(Args)]
struct Bidirectional {
    /// Start node
    #[clap(long = "from")]
    from: NodeId,

    /// Target node
    #[clap(long = "to")]
    to: NodeId,
}

fn run() -> Result<(), Error> {
    let opts: Opts = Opts::parse();
    let graph = graph_file::load(&opts.graph)?;
    debug!("loaded graph with {} nodes", graph.node_count());

    match opts.query {
        Query::Distances(query) => {
            let dist = shortest_distances(&graph, query.from)?;
            println!("{}", serde_json::to_string(&dist)?);
        }
        Query::Path(query) => {
            let found = match query.grid_width {
                Some(width) => {
                    debug!("using grid heuristic of width {}", width);
                    shortest_path_astar(&graph, query.from, query.to, heuristics::grid_manhattan(width))?
                }
                None => shortest_path(&graph, query.from, query.to)?,
            };
            match found {
                Some((path, distance)) => {
                    println!("{}", serde_json::json!({ "path": path, "distance": distance }));
                }
                None => println!("{}", serde_json::json!({ "path": null, "distance": null })),
            }
        }
        Query::Bidirectional(query) => {
            let distance = shortest_distance_bidirectional(&graph, query.from, query.to)?;
            println!("{}", serde_json::to_string(&distance)?);
        }
    }

    Ok(())
}
