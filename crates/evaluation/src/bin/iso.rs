use clap::{Parser, ValueEnum};
use color_refinement::{color_refinement, count, decide, Strategy, VertexPool};
use common::io::{read_graphs, write_dot, GraphFileType};
use petgraph::graph::UnGraph;
use std::error::Error;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{info, Level};
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::FmtSubscriber;

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum Mode {
    Decide,
    Count,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
enum StrategyArg {
    SplitFromFirst,
    GroupBySignature,
}

impl From<StrategyArg> for Strategy {
    fn from(value: StrategyArg) -> Self {
        match value {
            StrategyArg::SplitFromFirst => Strategy::SplitFromFirst,
            StrategyArg::GroupBySignature => Strategy::GroupBySignature,
        }
    }
}

/// Compare all pairs of graphs of a file.
#[derive(Debug, Parser)]
struct Cli {
    #[arg(long, value_enum, default_value = "grl")]
    input_type: GraphFileType,
    #[arg(long)]
    input: PathBuf,
    #[arg(long, value_enum, default_value = "count")]
    mode: Mode,
    #[arg(long, value_enum, default_value = "split-from-first")]
    strategy: StrategyArg,
    /// Count the branches of the search in parallel.
    #[arg(long)]
    parallel: bool,
    /// Directory to write the refined graphs to, as `graph{i}.dot`.
    #[arg(long)]
    dot: Option<PathBuf>,
    #[arg(long)]
    stats: Option<PathBuf>,
    #[arg(long)]
    log_level: Option<Level>,
}

fn write_stats(stats: &Option<PathBuf>, input: &Path, mode: Mode, time: Option<Duration>, status: &str) -> Result<(), Box<dyn Error>> {
    let Some(stats) = stats else { return Ok(()); };
    let mut out = BufWriter::new(File::create(stats)?);
    let input = input.file_name().map(|name| name.to_string_lossy()).unwrap_or_default();
    let mode = mode.to_possible_value().map(|v| v.get_name().to_string()).unwrap_or_default();
    let time = time.map(|t| t.as_secs_f64()).unwrap_or(f64::NAN);
    writeln!(out, "{{\"input\": \"{input}\", \"mode\": \"{mode}\", \"time\": {time}, \"status\": \"{status}\"}}")?;
    Ok(())
}

fn write_colored(dir: &Path, graphs: &[UnGraph<(), ()>]) -> Result<(), Box<dyn Error>> {
    std::fs::create_dir_all(dir)?;
    for (i, graph) in graphs.iter().enumerate() {
        let colors = color_refinement(graph);
        let out = BufWriter::new(File::create(dir.join(format!("graph{i}.dot")))?);
        write_dot(out, graph, Some(colors.as_slice()))?;
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    write_stats(&cli.stats, &cli.input, cli.mode, None, "unfinished")?;
    let graphs = read_graphs(&cli.input, &cli.input_type)?;

    if let Some(level) = cli.log_level {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_span_events(FmtSpan::CLOSE)
            .finish();

        subscriber.init();
    };

    let strategy = Strategy::from(cli.strategy);
    let start = Instant::now();
    for i in 0..graphs.len() {
        for j in i + 1..graphs.len() {
            let pool = VertexPool::from_pair(&graphs[i], &graphs[j]);
            match cli.mode {
                Mode::Decide => {
                    if decide::decide(&pool, strategy) {
                        println!("graph {i} vs {j}: isomorphic");
                    }
                }
                Mode::Count => {
                    let n = if cli.parallel { count::par_count(&pool, strategy) } else { count::count(&pool, strategy) };
                    if n != 0 {
                        println!("graph {i} vs {j}: {n} isomorphisms");
                    }
                }
            }
        }
    }
    let t = start.elapsed();
    info!(graphs = graphs.len(), time = ?t);
    println!("took {:.3} s", t.as_secs_f64());

    if let Some(dir) = &cli.dot {
        write_colored(dir, &graphs)?;
    }
    write_stats(&cli.stats, &cli.input, cli.mode, Some(t), "finished")?;
    Ok(())
}
