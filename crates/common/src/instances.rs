//! Small graph families with known structure, and random graphs.
//!
//! All graphs are built by adding `n` nodes first, so the node with index `i`
//! is the `i`-th vertex mentioned in the description of each family.

use petgraph::graph::{NodeIndex, UnGraph};
use rand::seq::SliceRandom;
use rand::Rng;

fn with_edges(n: usize, edges: impl IntoIterator<Item = (usize, usize)>) -> UnGraph<(), ()> {
    let edges: Vec<_> = edges.into_iter().collect();
    let mut graph = UnGraph::with_capacity(n, edges.len());
    for _ in 0..n {
        graph.add_node(());
    }
    for (u, v) in edges {
        graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
    }
    graph
}

pub fn empty_graph(n: usize) -> UnGraph<(), ()> {
    with_edges(n, [])
}

pub fn path_graph(n: usize) -> UnGraph<(), ()> {
    with_edges(n, (1..n).map(|i| (i - 1, i)))
}

/// A cycle on `n` vertices. For `n < 3` this is a path.
pub fn cycle_graph(n: usize) -> UnGraph<(), ()> {
    let closing = (n >= 3).then(|| (n - 1, 0));
    with_edges(n, (1..n).map(|i| (i - 1, i)).chain(closing))
}

pub fn complete_graph(n: usize) -> UnGraph<(), ()> {
    with_edges(n, (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))))
}

/// The center is vertex `0`, the leaves are `1..=leaves`.
pub fn star_graph(leaves: usize) -> UnGraph<(), ()> {
    with_edges(leaves + 1, (1..=leaves).map(|i| (0, i)))
}

/// The sides are `0..a` and `a..a + b`.
pub fn complete_bipartite_graph(a: usize, b: usize) -> UnGraph<(), ()> {
    with_edges(a + b, (0..a).flat_map(|u| (a..a + b).map(move |v| (u, v))))
}

/// The outer cycle is `0..5`, the inner pentagram is `5..10` and `i` is
/// adjacent to `i + 5`.
pub fn petersen_graph() -> UnGraph<(), ()> {
    let outer = (0..5).map(|i| (i, (i + 1) % 5));
    let spokes = (0..5).map(|i| (i, i + 5));
    let inner = (0..5).map(|i| (5 + i, 5 + (i + 2) % 5));
    with_edges(10, outer.chain(spokes).chain(inner))
}

/// A `width` times `height` grid, the vertex in column `x` and row `y` is
/// `y * width + x`.
pub fn grid_graph(width: usize, height: usize) -> UnGraph<(), ()> {
    let index = move |x: usize, y: usize| y * width + x;
    let horizontal = (0..height).flat_map(move |y| (1..width).map(move |x| (index(x - 1, y), index(x, y))));
    let vertical = (1..height).flat_map(move |y| (0..width).map(move |x| (index(x, y - 1), index(x, y))));
    with_edges(width * height, horizontal.chain(vertical))
}

/// The vertices of `b` follow the vertices of `a`.
pub fn disjoint_union(a: &UnGraph<(), ()>, b: &UnGraph<(), ()>) -> UnGraph<(), ()> {
    let offset = a.node_count();
    let edges = a
        .raw_edges()
        .iter()
        .map(|e| (e.source().index(), e.target().index()))
        .chain(b.raw_edges().iter().map(|e| (offset + e.source().index(), offset + e.target().index())));
    with_edges(offset + b.node_count(), edges)
}

/// Vertex `i` of `graph` becomes vertex `permutation[i]`.
pub fn relabel(graph: &UnGraph<(), ()>, permutation: &[usize]) -> UnGraph<(), ()> {
    assert_eq!(permutation.len(), graph.node_count());
    let edges = graph
        .raw_edges()
        .iter()
        .map(|e| (permutation[e.source().index()], permutation[e.target().index()]));
    with_edges(graph.node_count(), edges)
}

/// A graph on `n` vertices where every edge exists with probability `p`.
pub fn random_graph<R: Rng + ?Sized>(n: usize, p: f64, rng: &mut R) -> UnGraph<(), ()> {
    let edges: Vec<_> = (0..n).flat_map(|u| (u + 1..n).map(move |v| (u, v))).filter(|_| rng.gen_bool(p)).collect();
    with_edges(n, edges)
}

pub fn random_permutation<R: Rng + ?Sized>(n: usize, rng: &mut R) -> Vec<usize> {
    let mut permutation: Vec<usize> = (0..n).collect();
    permutation.shuffle(rng);
    permutation
}
