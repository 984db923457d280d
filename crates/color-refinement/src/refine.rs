use crate::index::{ColorIndex, VertexIndex};
use crate::partition::ColorPartition;
use crate::pool::VertexPool;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// How a class is split during a refinement pass.
///
/// Both strategies reach the same stable partition. They differ in the
/// number of passes and in the colors assigned to the resulting classes.
#[derive(Copy, Clone, Debug, Default, Hash, Eq, PartialEq)]
pub enum Strategy {
    /// Compare every member with the first member of its class. All members
    /// with a different signature move to one new class. Classes with three or
    /// more distinct signatures are separated over several passes.
    #[default]
    SplitFromFirst,
    /// Give every distinct signature in a class its own class in one step.
    GroupBySignature,
}

/// Stabilize a partition of the vertices of `pool` with the default
/// [Strategy].
///
/// Starts from `seed` if given, otherwise from [ColorPartition::by_degree].
pub fn refine(pool: &VertexPool, seed: Option<ColorPartition>) -> ColorPartition {
    refine_with(pool, seed, Strategy::default())
}

/// Stabilize a partition of the vertices of `pool`.
///
/// The result is stable: two vertices of the same class have the same number
/// of neighbors of each color. Classes are only ever split, never merged, so
/// vertices that start with different colors end with different colors.
///
/// Panics if `seed` does not have exactly one color per vertex of `pool`.
#[instrument(level = "trace", skip_all)]
pub fn refine_with(pool: &VertexPool, seed: Option<ColorPartition>, strategy: Strategy) -> ColorPartition {
    let mut partition = seed.unwrap_or_else(|| ColorPartition::by_degree(pool));
    assert_eq!(partition.len(), pool.len(), "partition does not match the vertex pool");
    let passes = stabilize(pool, &mut partition, strategy);
    debug!(passes, colors = partition.num_colors(), classes = partition.num_classes());
    partition
}

/// Repeat refinement passes until a pass does not split any class. Returns
/// the number of passes, including the final one.
fn stabilize(pool: &VertexPool, partition: &mut ColorPartition, strategy: Strategy) -> usize {
    let mut scratch = Scratch::default();
    let mut passes = 0;
    loop {
        passes += 1;
        let mut changed = false;
        // Classes created during this pass are visited in this pass as well.
        let mut i = 0;
        while i < partition.num_colors() {
            let color = ColorIndex::new(i);
            changed |= match strategy {
                Strategy::SplitFromFirst => split_from_first(pool, partition, color, &mut scratch),
                Strategy::GroupBySignature => group_by_signature(pool, partition, color, &mut scratch),
            };
            i += 1;
        }
        if !changed {
            return passes;
        }
    }
}

#[derive(Default)]
struct Scratch {
    reference: Vec<ColorIndex>,
    candidate: Vec<ColorIndex>,
    pending: Vec<(VertexIndex, ColorIndex)>,
}

/// Write the signature of `v` into `out`: the sorted colors of its neighbors.
///
/// Two signatures are equal exactly if the vertices have the same number of
/// neighbors of each color.
fn signature(pool: &VertexPool, colors: &[ColorIndex], v: VertexIndex, out: &mut Vec<ColorIndex>) {
    out.clear();
    out.extend(pool.neighbors(v).iter().map(|w| colors[w.index()]));
    out.sort_unstable();
}

fn split_from_first(pool: &VertexPool, partition: &mut ColorPartition, color: ColorIndex, s: &mut Scratch) -> bool {
    let members = partition.class(color);
    if members.len() < 2 {
        return false;
    }
    let pending_color = partition.next_unused_color();
    let colors = partition.colors();
    signature(pool, colors, members[0], &mut s.reference);
    s.pending.clear();
    for &u in &members[1..] {
        signature(pool, colors, u, &mut s.candidate);
        if s.candidate != s.reference {
            s.pending.push((u, pending_color));
        }
    }
    if s.pending.is_empty() {
        return false;
    }
    let allocated = partition.allocate();
    debug_assert_eq!(allocated, pending_color);
    partition.commit(color, &s.pending);
    true
}

fn group_by_signature(pool: &VertexPool, partition: &mut ColorPartition, color: ColorIndex, s: &mut Scratch) -> bool {
    let members = partition.class(color);
    if members.len() < 2 {
        return false;
    }
    let first_new = partition.next_unused_color().index();
    let colors = partition.colors();
    // Groups are numbered in order of first appearance. The group of the
    // first member keeps the current color.
    let mut groups: HashMap<Vec<ColorIndex>, usize> = HashMap::new();
    s.pending.clear();
    for &u in members {
        signature(pool, colors, u, &mut s.candidate);
        let next = groups.len();
        let group = *groups.entry(s.candidate.clone()).or_insert(next);
        if group != 0 {
            s.pending.push((u, ColorIndex::new(first_new + group - 1)));
        }
    }
    if groups.len() == 1 {
        return false;
    }
    for _ in 1..groups.len() {
        partition.allocate();
    }
    partition.commit(color, &s.pending);
    true
}

#[cfg(test)]
mod test {
    use super::*;
    use common::instances::{
        complete_graph, cycle_graph, disjoint_union, empty_graph, path_graph, petersen_graph, star_graph,
    };

    fn colors_of(partition: &ColorPartition) -> Vec<usize> {
        partition.colors().iter().map(|c| c.index()).collect()
    }

    #[test]
    fn path_is_split_by_distance_to_the_end() {
        let graph = path_graph(5);
        let pool = VertexPool::from_graph(&graph);
        let partition = refine(&pool, None);
        assert_eq!(partition.canonical(), [vec![0, 4], vec![1, 3], vec![2]]);
    }

    #[test]
    fn regular_graphs_are_not_split() {
        for graph in [cycle_graph(7), complete_graph(5), petersen_graph()] {
            let pool = VertexPool::from_graph(&graph);
            let partition = refine(&pool, None);
            assert_eq!(partition.num_classes(), 1);
        }
    }

    #[test]
    fn three_signatures_in_one_class() {
        // The degree one vertices are leaves of a star, ends of a path and the
        // ends of a single edge.
        let graph = disjoint_union(&disjoint_union(&star_graph(3), &path_graph(5)), &path_graph(2));
        let pool = VertexPool::from_graph(&graph);
        for strategy in [Strategy::SplitFromFirst, Strategy::GroupBySignature] {
            let partition = refine_with(&pool, None, strategy);
            assert_eq!(partition.canonical(), [vec![0], vec![1, 2, 3], vec![4, 8], vec![5, 7], vec![6], vec![9, 10]]);
        }
    }

    #[test]
    fn strategies_reach_the_same_partition() {
        let graphs = [
            disjoint_union(&star_graph(3), &path_graph(5)),
            disjoint_union(&path_graph(7), &cycle_graph(4)),
            path_graph(12),
            petersen_graph(),
        ];
        for graph in graphs {
            let pool = VertexPool::from_graph(&graph);
            let a = refine_with(&pool, None, Strategy::SplitFromFirst);
            let b = refine_with(&pool, None, Strategy::GroupBySignature);
            assert_eq!(a.canonical(), b.canonical());
        }
    }

    #[test]
    fn group_by_signature_splits_in_one_step() {
        let graph = disjoint_union(&path_graph(3), &empty_graph(1));
        let pool = VertexPool::from_graph(&graph);
        // With a single color, the ends of the path, its middle and the
        // isolated vertex have three different signatures.
        let seed = ColorPartition::from_colors([0, 0, 0, 0]);
        let mut scratch = Scratch::default();

        let mut partition = seed.clone();
        assert!(group_by_signature(&pool, &mut partition, ColorIndex::new(0), &mut scratch));
        assert_eq!(colors_of(&partition), [0, 1, 0, 2]);

        let mut partition = seed;
        assert!(split_from_first(&pool, &mut partition, ColorIndex::new(0), &mut scratch));
        assert_eq!(colors_of(&partition), [0, 1, 0, 1]);
        assert!(split_from_first(&pool, &mut partition, ColorIndex::new(1), &mut scratch));
        assert_eq!(colors_of(&partition), [0, 1, 0, 2]);
    }

    #[test]
    fn refinement_is_idempotent() {
        let graph = disjoint_union(&path_graph(6), &star_graph(4));
        let pool = VertexPool::from_graph(&graph);
        let partition = refine(&pool, None);
        let again = refine(&pool, Some(partition.clone()));
        assert_eq!(partition, again);
    }

    #[test]
    fn same_color_implies_same_degree() {
        let graph = disjoint_union(&disjoint_union(&path_graph(6), &star_graph(4)), &cycle_graph(5));
        let pool = VertexPool::from_graph(&graph);
        let partition = refine(&pool, None);
        for (_, members) in partition.classes() {
            assert!(members.iter().all(|v| pool.degree(*v) == pool.degree(members[0])));
        }
    }

    #[test]
    fn seed_is_refined_further() {
        let graph = cycle_graph(6);
        let pool = VertexPool::from_graph(&graph);
        let mut seed = ColorPartition::by_degree(&pool);
        seed.individualize(VertexIndex::new(0));
        let partition = refine(&pool, Some(seed));
        assert_eq!(partition.canonical(), [vec![0], vec![1, 5], vec![2, 4], vec![3]]);
    }

    #[test]
    #[should_panic]
    fn seed_must_match_pool() {
        let graph = cycle_graph(4);
        let pool = VertexPool::from_graph(&graph);
        refine(&pool, Some(ColorPartition::from_colors([0, 0])));
    }
}
