use clap::Parser;
use common::io::{read_graphs, write_grl, GraphFileType};
use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

/// Collect the graphs of several files into one graph list file.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long)]
    input_type: GraphFileType,
    #[arg(long, num_args = 1..)]
    input: Vec<PathBuf>,
    #[arg(long)]
    output: PathBuf,
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    let mut graphs = vec![];
    for path in &cli.input {
        graphs.extend(read_graphs(path, &cli.input_type)?);
    }
    println!("read {} graphs from {} files", graphs.len(), cli.input.len());

    let out = BufWriter::new(File::create(&cli.output)?);
    write_grl(out, &graphs)?;
    Ok(())
}
