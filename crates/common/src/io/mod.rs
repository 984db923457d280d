mod dot;
mod edge_list;
mod grl;

use clap::ValueEnum;
use petgraph::graph::UnGraph;
use std::path::Path;
use thiserror::Error;
pub use dot::{write_dot, WriteDotError};
pub use edge_list::{parse_edge_list, read_edge_list, ReadEdgeListError};
pub use grl::{parse_grl, read_grl, write_grl, ReadGrlError, WriteGrlError};

#[derive(Debug, Clone, Eq, PartialEq, ValueEnum)]
pub enum GraphFileType {
    /// Any number of graphs, separated by `---` lines.
    Grl,
    /// A single graph with one edge per line.
    EdgeList,
}

#[derive(Error, Debug)]
pub enum ReadGraphsError {
    #[error(transparent)]
    Grl(#[from] ReadGrlError),
    #[error(transparent)]
    EdgeList(#[from] ReadEdgeListError),
}

/// Reads all graphs of a file. An edge list file holds exactly one graph.
pub fn read_graphs<P>(path: P, file_type: &GraphFileType) -> Result<Vec<UnGraph<(), ()>>, ReadGraphsError>
where
    P: AsRef<Path>,
{
    Ok(match file_type {
        GraphFileType::Grl => read_grl(path)?,
        GraphFileType::EdgeList => vec![read_edge_list(path)?],
    })
}
