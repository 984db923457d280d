use color_refinement::{count, refine, Strategy, VertexPool};
use common::instances::{cycle_graph, grid_graph, petersen_graph};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn criterion_benchmark(c: &mut Criterion) {
    let cycle = cycle_graph(64);
    let grid = grid_graph(20, 20);
    let petersen = petersen_graph();

    let pool = VertexPool::from_graph(&grid);
    c.bench_function("refine grid", |b| b.iter(|| black_box(refine(black_box(&pool), None))));

    for strategy in [Strategy::SplitFromFirst, Strategy::GroupBySignature] {
        let pool = VertexPool::from_pair(&grid, &grid);
        c.bench_function(&format!("count grid {strategy:?}"), |b| {
            b.iter(|| black_box(count::count(black_box(&pool), strategy)))
        });
    }

    let pool = VertexPool::from_pair(&cycle, &cycle);
    c.bench_function("count cycle", |b| b.iter(|| black_box(count::count(black_box(&pool), Strategy::default()))));
    c.bench_function("par_count cycle", |b| {
        b.iter(|| black_box(count::par_count(black_box(&pool), Strategy::default())))
    });

    let pool = VertexPool::from_pair(&petersen, &petersen);
    c.bench_function("count petersen", |b| {
        b.iter(|| black_box(count::count(black_box(&pool), Strategy::default())))
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
