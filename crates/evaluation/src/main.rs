use color_refinement::{count, decide, Strategy, VertexPool};
use std::error::Error;
use std::ffi::OsStr;
use std::time::{Duration, Instant};
use std::{env, fs};

/// Runs every pairwise comparison of a file with `f` and returns the results
/// in pair order together with the time taken.
fn run<T>(graphs: &[petgraph::graph::UnGraph<(), ()>], f: impl Fn(&VertexPool) -> T) -> (Vec<T>, Duration) {
    let start = Instant::now();
    let mut results = vec![];
    for i in 0..graphs.len() {
        for j in i + 1..graphs.len() {
            results.push(f(&VertexPool::from_pair(&graphs[i], &graphs[j])));
        }
    }
    (results, start.elapsed())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<_> = env::args().collect();
    let dir = args.get(1).ok_or("usage: evaluation [dir]")?;

    let mut paths = vec![];
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension() == Some(OsStr::new("grl")) {
            paths.push((fs::metadata(&path)?.len(), path));
        }
    }
    paths.sort();

    for (i, (_, path)) in paths.iter().enumerate() {
        let start = Instant::now();
        let graphs = common::io::read_grl(path)?;
        let t_read = start.elapsed();

        let (decided, t0) = run(&graphs, |pool| decide::decide(pool, Strategy::SplitFromFirst));
        let (counted, t1) = run(&graphs, |pool| count::count(pool, Strategy::SplitFromFirst));
        let (grouped, t2) = run(&graphs, |pool| count::count(pool, Strategy::GroupBySignature));
        let (parallel, t3) = run(&graphs, |pool| count::par_count(pool, Strategy::SplitFromFirst));

        assert_eq!(counted, grouped);
        assert_eq!(counted, parallel);
        assert!(decided.iter().zip(&counted).all(|(&d, &c)| d == (c != 0)));

        let isomorphic = decided.iter().filter(|&&d| d).count();
        let fastest_time = [t0, t1, t2, t3].iter().map(|t| t.as_nanos()).min().unwrap_or(1).max(1) as f64;
        let name = path.file_name().and_then(OsStr::to_str).unwrap_or_default();

        println!("{i:4.} {:<30.30} {:4} graphs {:5} isomorphic  read {:9} μs  decide {:9} μs {:6.2}  count {:9} μs {:6.2}  grouped {:9} μs {:6.2}  parallel {:9} μs {:6.2}",
                 name, graphs.len(), isomorphic,
                 t_read.as_micros(),
                 t0.as_micros(), (t0.as_nanos() as f64 / fastest_time),
                 t1.as_micros(), (t1.as_nanos() as f64 / fastest_time),
                 t2.as_micros(), (t2.as_nanos() as f64 / fastest_time),
                 t3.as_micros(), (t3.as_nanos() as f64 / fastest_time),
        );
    }
    Ok(())
}
