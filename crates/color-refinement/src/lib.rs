//! This is a library to decide whether two simple, undirected graphs are
//! [isomorphic](https://en.wikipedia.org/wiki/Graph_isomorphism) and to count the isomorphisms
//! between them.
//!
//! The vertices of both graphs are colored jointly by *color refinement*, also known as the
//! 1-dimensional [Weisfeiler-Leman algorithm](https://en.wikipedia.org/wiki/Weisfeiler_Leman_graph_isomorphism_test).
//! Starting from the degrees, a color class is split as long as its vertices differ in the
//! number of neighbors of some color. If the stable coloring does not already pair every vertex
//! of the first graph with a vertex of the second graph, a vertex of the first graph is paired
//! with each candidate of the second graph in turn (*individualization*) and the search
//! continues below the refined coloring.
//!
//! # Examples
//!
//! A path on four vertices has two automorphisms.
//! ```rust
//! use petgraph::graph::UnGraph;
//! use color_refinement::{count_isomorphisms, is_isomorphic};
//!
//! let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let relabelled = UnGraph::<(), ()>::from_edges([(2, 0), (0, 3), (3, 1)]);
//!
//! assert!(is_isomorphic(&path, &relabelled));
//! assert_eq!(count_isomorphisms(&path, &path), 2);
//! ```
//!
//! A path and a star with four vertices have the same number of edges, but refinement
//! separates them by their degrees.
//! ```rust
//! use petgraph::graph::UnGraph;
//! use color_refinement::{count_isomorphisms, is_isomorphic};
//!
//! let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3)]);
//! let star = UnGraph::<(), ()>::from_edges([(0, 1), (0, 2), (0, 3)]);
//!
//! assert!(!is_isomorphic(&path, &star));
//! assert_eq!(count_isomorphisms(&path, &star), 0);
//! ```
//!
//! # Generics
//!
//! The algorithms are implemented for structs that implement the `petgraph`
//! traits `NodeCompactIndexable`, `IntoNeighbors`, and `GraphProp<EdgeType =
//! Undirected>`. The two graphs of a pair do not need to have the same type.
//!
//! Lower level access is provided by [VertexPool], [ColorPartition] and [refine].
//!
//! # References
//! + \[GKMS17\]: Martin Grohe, Kristian Kersting, Martin Mladenov, and Pascal Schweitzer. “Color
//!   Refinement and its Applications”. <https://doi.org/10.1017/9781108635127.014>.

#![forbid(unsafe_code)]
#![doc(test(attr(deny(warnings, rust_2018_idioms), allow(dead_code))))]
#![warn(missing_docs, missing_debug_implementations, rust_2018_idioms, unreachable_pub)]

/// Counting isomorphisms.
pub mod count;
/// Deciding isomorphism.
pub mod decide;
mod index;
mod partition;
mod pool;
mod refine;

pub use index::{ColorIndex, VertexIndex};
pub use partition::ColorPartition;
pub use pool::{Origin, VertexPool};
pub use refine::{refine, refine_with, Strategy};

use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;
use tracing::{info, instrument};

/// Returns `true` if the graphs are isomorphic.
///
/// Graphs with different numbers of vertices or edges are rejected without
/// refinement.
#[instrument(skip_all)]
pub fn is_isomorphic<G, H>(first: G, second: H) -> bool
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let pool = VertexPool::from_pair(first, second);
    let result = decide::decide(&pool, Strategy::default());
    info!(n = pool.vertex_count(Origin::First), m = pool.edge_count(Origin::First), result);
    result
}

/// Returns an isomorphism from `first` to `second` if there is one.
///
/// The isomorphism maps the node index `i` of `first` to the node index
/// `map[i]` of `second`.
#[instrument(skip_all)]
pub fn find_isomorphism<G, H>(first: G, second: H) -> Option<Vec<usize>>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let pool = VertexPool::from_pair(first, second);
    decide::find(&pool, Strategy::default())
}

/// Returns the number of isomorphisms from `first` to `second`.
///
/// For `first == second` this is the size of the automorphism group.
#[instrument(skip_all)]
pub fn count_isomorphisms<G, H>(first: G, second: H) -> u64
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let pool = VertexPool::from_pair(first, second);
    let result = count::count(&pool, Strategy::default());
    info!(n = pool.vertex_count(Origin::First), m = pool.edge_count(Origin::First), result);
    result
}

/// Like [count_isomorphisms], but evaluates the branches of the search in
/// parallel.
#[instrument(skip_all)]
pub fn par_count_isomorphisms<G, H>(first: G, second: H) -> u64
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let pool = VertexPool::from_pair(first, second);
    let result = count::par_count(&pool, Strategy::default());
    info!(n = pool.vertex_count(Origin::First), m = pool.edge_count(Origin::First), result);
    result
}

/// Like [is_isomorphic], but a missing graph is not isomorphic to anything.
pub fn is_isomorphic_optional<G, H>(first: Option<G>, second: Option<H>) -> bool
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    match (first, second) {
        (Some(first), Some(second)) => is_isomorphic(first, second),
        _ => false,
    }
}

/// Like [count_isomorphisms], but there are no isomorphisms from or to a
/// missing graph.
pub fn count_isomorphisms_optional<G, H>(first: Option<G>, second: Option<H>) -> u64
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    match (first, second) {
        (Some(first), Some(second)) => count_isomorphisms(first, second),
        _ => 0,
    }
}

/// Returns the stable coloring of a single graph, indexed by node index.
///
/// Nodes with different colors cannot be mapped onto each other by an
/// automorphism.
///
/// ```rust
/// use petgraph::graph::UnGraph;
/// use color_refinement::color_refinement;
///
/// let path = UnGraph::<(), ()>::from_edges([(0, 1), (1, 2), (2, 3), (3, 4)]);
/// let colors = color_refinement(&path);
///
/// assert_eq!(colors[0], colors[4]);
/// assert_eq!(colors[1], colors[3]);
/// assert_ne!(colors[0], colors[2]);
/// ```
#[instrument(skip_all)]
pub fn color_refinement<G>(graph: G) -> Vec<usize>
where
    G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
{
    let pool = VertexPool::from_graph(graph);
    let partition = refine(&pool, None);
    info!(n = pool.len(), classes = partition.num_classes());
    partition.colors().iter().map(|c| c.index()).collect()
}
