use petgraph::graph::{NodeIndex, UnGraph};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::num::ParseIntError;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReadGrlError {
    #[error("invalid line {line} (got {content})")]
    InvalidLine { line: usize, content: String },
    #[error("expected the number of vertices on line {line} (got {content})")]
    MissingVertexCount { line: usize, content: String },
    #[error("vertex {vertex} on line {line} is out of range (graph has {n} vertices)")]
    VertexOutOfRange { line: usize, vertex: usize, n: usize },
    #[error("found self loop on vertex {vertex} on line {line}")]
    SelfLoop { line: usize, vertex: usize },
    #[error("parse int error")]
    ParseInt(#[from] ParseIntError),
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Reads all graphs of a graph list file. See [parse_grl].
pub fn read_grl<P>(path: P) -> Result<Vec<UnGraph<(), ()>>, ReadGrlError>
where
    P: AsRef<Path>,
{
    let file = File::open(path)?;
    parse_grl(BufReader::new(file))
}

/// Implements the graph list format.
///
/// A file contains any number of undirected, unweighted, loop-less graphs.
///
/// + lines starting with `#` are comments, empty lines are ignored
/// + the first line of a graph is its number of vertices `n`
/// + every following line is an edge `u,v` with `0 <= u, v < n`, optionally
///   followed by `:label`, labels are ignored
/// + a line starting with `---` ends the current graph
pub fn parse_grl<R>(reader: R) -> Result<Vec<UnGraph<(), ()>>, ReadGrlError>
where
    R: BufRead,
{
    let mut graphs = vec![];
    let mut current: Option<UnGraph<(), ()>> = None;

    for (i, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = i + 1;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if trimmed.starts_with("---") {
            graphs.extend(current.take());
            continue;
        }
        let Some(graph) = current.as_mut() else {
            if trimmed.contains(',') {
                return Err(ReadGrlError::MissingVertexCount { line: line_number, content: line });
            }
            let n: usize = trimmed.parse()?;
            let mut graph = UnGraph::with_capacity(n, n);
            for _ in 0..n {
                graph.add_node(());
            }
            current = Some(graph);
            continue;
        };

        let edge = trimmed.split_once(':').map_or(trimmed, |(edge, _label)| edge);
        let Some((a, b)) = edge.split_once(',') else {
            return Err(ReadGrlError::InvalidLine { line: line_number, content: line });
        };
        let u: usize = a.trim().parse()?;
        let v: usize = b.trim().parse()?;
        let n = graph.node_count();
        for vertex in [u, v] {
            if vertex >= n {
                return Err(ReadGrlError::VertexOutOfRange { line: line_number, vertex, n });
            }
        }
        if u == v {
            return Err(ReadGrlError::SelfLoop { line: line_number, vertex: u });
        }
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graphs.extend(current);
    Ok(graphs)
}

#[derive(Error, Debug)]
pub enum WriteGrlError {
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

/// Writes `graphs` in the format read by [parse_grl].
pub fn write_grl<W>(mut writer: W, graphs: &[UnGraph<(), ()>]) -> Result<(), WriteGrlError>
where
    W: Write,
{
    for (i, graph) in graphs.iter().enumerate() {
        if i != 0 {
            writeln!(writer, "---")?;
        }
        writeln!(writer, "# Number of vertices:")?;
        writeln!(writer, "{}", graph.node_count())?;
        writeln!(writer, "# Edge list:")?;
        for edge in graph.raw_edges() {
            writeln!(writer, "{},{}", edge.source().index(), edge.target().index())?;
        }
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;

    const TWO_GRAPHS: &str = "\
# Number of vertices:
3
# Edge list:
0,1
1,2
2,0
--- Next graph:
# Number of vertices:
4
# Edge list:
0,1:7
1,2
2,3
";

    #[test]
    fn two_graphs() {
        let graphs = parse_grl(TWO_GRAPHS.as_bytes()).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!((graphs[0].node_count(), graphs[0].edge_count()), (3, 3));
        assert_eq!((graphs[1].node_count(), graphs[1].edge_count()), (4, 3));
        assert!(graphs[1].contains_edge(NodeIndex::new(0), NodeIndex::new(1)));
        assert!(!graphs[1].contains_edge(NodeIndex::new(0), NodeIndex::new(3)));
    }

    #[test]
    fn write_and_read_back() {
        let graphs = parse_grl(TWO_GRAPHS.as_bytes()).unwrap();
        let mut out = vec![];
        write_grl(&mut out, &graphs).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("# Number of vertices:\n3\n# Edge list:\n0,1\n"));
        assert_eq!(text.matches("---").count(), 1);

        let again = parse_grl(text.as_bytes()).unwrap();
        assert_eq!(again.len(), 2);
        assert_eq!(again[1].edge_count(), 3);
    }

    #[test]
    fn isolated_vertices() {
        let graphs = parse_grl("5\n---\n0\n".as_bytes()).unwrap();
        assert_eq!(graphs.len(), 2);
        assert_eq!((graphs[0].node_count(), graphs[0].edge_count()), (5, 0));
        assert_eq!(graphs[1].node_count(), 0);
    }

    #[test]
    fn empty_file() {
        assert!(parse_grl("# nothing\n".as_bytes()).unwrap().is_empty());
    }

    #[test]
    fn errors() {
        let err = parse_grl("3\n0 1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadGrlError::InvalidLine { line: 2, .. }));

        let err = parse_grl("3\n0,3\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadGrlError::VertexOutOfRange { line: 2, vertex: 3, n: 3 }));

        let err = parse_grl("3\n1,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadGrlError::SelfLoop { line: 2, vertex: 1 }));

        let err = parse_grl("3\n0,1\n---\n0,1\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadGrlError::MissingVertexCount { line: 4, .. }));

        let err = parse_grl("three\n".as_bytes()).unwrap_err();
        assert!(matches!(err, ReadGrlError::ParseInt(_)));

        assert_eq!(
            format!("{}", parse_grl("2\n0,5\n".as_bytes()).unwrap_err()),
            "vertex 5 on line 2 is out of range (graph has 2 vertices)"
        );
    }
}
