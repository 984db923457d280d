use crate::index::{ColorIndex, VertexIndex};
use crate::partition::ColorPartition;
use crate::pool::{Origin, VertexPool};
use crate::refine::{refine_with, Strategy};
use rayon::prelude::*;
use tracing::{debug, instrument, trace};

/// Count the isomorphisms between the two graphs of `pool`.
#[instrument(skip_all, fields(n = pool.len()))]
pub fn count(pool: &VertexPool, strategy: Strategy) -> u64 {
    if !pool.sizes_match() {
        debug!("vertex or edge counts differ");
        return 0;
    }
    count_below(pool, None, strategy)
}

/// Count the isomorphisms between the two graphs of `pool`, evaluating
/// branches on the rayon thread pool.
///
/// Every branch works on its own copy of the partition and only shares the
/// immutable pool, so the result equals [count].
#[instrument(skip_all, fields(n = pool.len()))]
pub fn par_count(pool: &VertexPool, strategy: Strategy) -> u64 {
    if !pool.sizes_match() {
        debug!("vertex or edge counts differ");
        return 0;
    }
    par_count_below(pool, None, strategy)
}

/// The result of refining the partition of one node of the search tree.
enum Step {
    /// Some class is odd or has more vertices of one graph than of the other.
    Unbalanced,
    /// Every class pairs one vertex of each graph.
    Bijection,
    /// Every isomorphism maps `x` to one of `candidates`.
    Branch { partition: ColorPartition, x: VertexIndex, candidates: Vec<VertexIndex> },
}

fn step(pool: &VertexPool, seed: Option<ColorPartition>, strategy: Strategy) -> Step {
    let mut partition = refine_with(pool, seed, strategy);
    if !partition.is_balanced(pool) {
        return Step::Unbalanced;
    }
    if partition.is_bijection(pool) {
        return Step::Bijection;
    }
    let color = partition
        .first_ambiguous_class()
        .expect("balanced partitions that are not bijections have a class with at least four vertices");
    let changed = partition.resync_colors();
    debug_assert_eq!(changed, 0);
    let (x, candidates) = split_class(pool, &partition, color);
    trace!(%color, %x, candidates = candidates.len(), "branch");
    Step::Branch { partition, x, candidates }
}

/// Choose a vertex `x` of the first graph in the class `color` and return it
/// together with the vertices of the second graph in that class.
fn split_class(pool: &VertexPool, partition: &ColorPartition, color: ColorIndex) -> (VertexIndex, Vec<VertexIndex>) {
    let members = partition.class(color);
    let k = partition.first_graph_members(pool, color);
    let x = members[k - 1];
    debug_assert_eq!(pool.origin(x), Origin::First);
    (x, members[k..].to_vec())
}

fn branch(partition: &ColorPartition, x: VertexIndex, y: VertexIndex) -> ColorPartition {
    let mut branch = partition.clone();
    branch.pair_off(x, y);
    branch
}

fn count_below(pool: &VertexPool, seed: Option<ColorPartition>, strategy: Strategy) -> u64 {
    match step(pool, seed, strategy) {
        Step::Unbalanced => 0,
        Step::Bijection => 1,
        Step::Branch { partition, x, candidates } => candidates
            .iter()
            .map(|&y| count_below(pool, Some(branch(&partition, x, y)), strategy))
            .sum(),
    }
}

fn par_count_below(pool: &VertexPool, seed: Option<ColorPartition>, strategy: Strategy) -> u64 {
    match step(pool, seed, strategy) {
        Step::Unbalanced => 0,
        Step::Bijection => 1,
        Step::Branch { partition, x, candidates } => candidates
            .par_iter()
            .map(|&y| par_count_below(pool, Some(branch(&partition, x, y)), strategy))
            .sum(),
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use common::instances::{
        complete_bipartite_graph, complete_graph, cycle_graph, disjoint_union, empty_graph, path_graph,
        petersen_graph, star_graph,
    };
    use petgraph::graph::UnGraph;

    fn automorphisms(graph: &UnGraph<(), ()>) -> u64 {
        count(&VertexPool::from_pair(graph, graph), Strategy::default())
    }

    #[test]
    fn automorphism_group_sizes() {
        assert_eq!(automorphisms(&empty_graph(0)), 1);
        assert_eq!(automorphisms(&empty_graph(1)), 1);
        assert_eq!(automorphisms(&empty_graph(3)), 6);
        assert_eq!(automorphisms(&path_graph(4)), 2);
        assert_eq!(automorphisms(&path_graph(5)), 2);
        assert_eq!(automorphisms(&cycle_graph(3)), 6);
        assert_eq!(automorphisms(&cycle_graph(4)), 8);
        assert_eq!(automorphisms(&cycle_graph(6)), 12);
        assert_eq!(automorphisms(&complete_graph(4)), 24);
        assert_eq!(automorphisms(&star_graph(3)), 6);
        assert_eq!(automorphisms(&complete_bipartite_graph(2, 3)), 12);
    }

    #[test]
    fn three_disjoint_edges() {
        let graph = disjoint_union(&disjoint_union(&path_graph(2), &path_graph(2)), &path_graph(2));
        assert_eq!(automorphisms(&graph), 48);
    }

    #[test]
    fn petersen() {
        assert_eq!(automorphisms(&petersen_graph()), 120);
    }

    #[test]
    fn non_isomorphic_pairs() {
        let triangles = disjoint_union(&cycle_graph(3), &cycle_graph(3));
        let pool = VertexPool::from_pair(&cycle_graph(6), &triangles);
        assert_eq!(count(&pool, Strategy::default()), 0);
        let pool = VertexPool::from_pair(&path_graph(4), &star_graph(3));
        assert_eq!(count(&pool, Strategy::default()), 0);
        let pool = VertexPool::from_pair(&cycle_graph(4), &path_graph(4));
        assert_eq!(count(&pool, Strategy::default()), 0);
    }

    #[test]
    fn strategies_count_the_same() {
        let graph = disjoint_union(&cycle_graph(4), &star_graph(2));
        let pool = VertexPool::from_pair(&graph, &graph);
        assert_eq!(count(&pool, Strategy::SplitFromFirst), 16);
        assert_eq!(count(&pool, Strategy::GroupBySignature), 16);
    }

    #[test]
    fn parallel_count() {
        for graph in [cycle_graph(6), petersen_graph(), complete_bipartite_graph(3, 3)] {
            let pool = VertexPool::from_pair(&graph, &graph);
            assert_eq!(par_count(&pool, Strategy::default()), count(&pool, Strategy::default()));
        }
        let pool = VertexPool::from_pair(&cycle_graph(4), &path_graph(4));
        assert_eq!(par_count(&pool, Strategy::default()), 0);
    }
}
