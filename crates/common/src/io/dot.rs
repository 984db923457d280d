use petgraph::graph::UnGraph;
use std::io::Write;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum WriteDotError {
    #[error("expected {expected} colors (got {actual})")]
    WrongNumberOfColors { expected: usize, actual: usize },
    #[error("io error")]
    IoError(#[from] std::io::Error),
}

const PALETTE: [&str; 12] = [
    "red", "blue", "green", "orange", "purple", "cyan", "magenta", "gold", "brown", "gray", "pink", "navy",
];

/// Writes `graph` in the graphviz format.
///
/// If `colors` is given, vertex `u` is filled with a color derived from
/// `colors[u]`. Colors are taken from a fixed palette and repeat after it is
/// exhausted, the color id is kept in the label.
pub fn write_dot<W>(mut writer: W, graph: &UnGraph<(), ()>, colors: Option<&[usize]>) -> Result<(), WriteDotError>
where
    W: Write,
{
    if let Some(colors) = colors {
        if colors.len() != graph.node_count() {
            return Err(WriteDotError::WrongNumberOfColors { expected: graph.node_count(), actual: colors.len() });
        }
    }

    writeln!(writer, "graph G {{")?;
    for u in graph.node_indices() {
        match colors {
            Some(colors) => {
                let c = colors[u.index()];
                let fill = PALETTE[c % PALETTE.len()];
                writeln!(writer, "    {} [label=\"{}:{}\", style=filled, fillcolor={}];", u.index(), u.index(), c, fill)?;
            }
            None => writeln!(writer, "    {};", u.index())?,
        }
    }
    for edge in graph.raw_edges() {
        writeln!(writer, "    {} -- {};", edge.source().index(), edge.target().index())?;
    }
    writeln!(writer, "}}")?;
    writer.flush()?;
    Ok(())
}
