use petgraph::graph::UnGraph;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadEdgeListError {
    #[error("invalid line {line} (got {content})")]
    InvalidLine { line: usize, content: String },
    #[error("found self loop on vertex {vertex} on line {line}")]
    SelfLoop { line: usize, vertex: u32 },
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads a single graph from an edge list file. See [parse_edge_list].
pub fn read_edge_list<P>(path: P) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_edge_list(BufReader::new(file))
}

/// Parses one edge `u v` per line, lines starting with `#` are comments.
///
/// The number of vertices is one more than the largest index, so vertices
/// without edges after the last used index cannot be represented.
pub fn parse_edge_list<R>(reader: R) -> Result<UnGraph<(), ()>, ReadEdgeListError>
where
    R: BufRead,
{
    let mut n = 0;
    let mut edges = vec![];
    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }
        let invalid = || ReadEdgeListError::InvalidLine { line: i + 1, content: line.clone() };
        let mut tokens = line.split_ascii_whitespace();
        let (Some(a), Some(b), None) = (tokens.next(), tokens.next(), tokens.next()) else {
            return Err(invalid());
        };

        let u: u32 = a.parse()?;
        let v: u32 = b.parse()?;
        if u == v {
            return Err(ReadEdgeListError::SelfLoop { line: i + 1, vertex: u });
        }
        edges.push((u, v));
        n = n.max(u + 1).max(v + 1);
    }

    let mut graph = UnGraph::with_capacity(n as usize, edges.len());
    graph.extend_with_edges(edges);
    Ok(graph)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn path() {
        let graph = parse_edge_list("# path\n0 1\n1 2\n\n2 3\n".as_bytes()).unwrap();
        assert_eq!((graph.node_count(), graph.edge_count()), (4, 3));
    }

    #[test]
    fn errors() {
        let err = parse_edge_list("0 1 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadEdgeListError::InvalidLine { line: 1, .. }));
        let err = parse_edge_list("0 1\n3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadEdgeListError::InvalidLine { line: 2, .. }));
        let err = parse_edge_list("2 2\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadEdgeListError::SelfLoop { line: 1, vertex: 2 }));
        let err = parse_edge_list("a b\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadEdgeListError::ParseInt(_)));
    }
}
