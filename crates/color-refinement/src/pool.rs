use crate::index::VertexIndex;
use petgraph::visit::{GraphProp, IntoNeighbors, NodeCompactIndexable};
use petgraph::Undirected;

/// The graph a vertex of a [VertexPool] was taken from.
#[derive(Copy, Clone, Debug, Hash, Eq, PartialEq, Ord, PartialOrd)]
pub enum Origin {
    /// The first graph of the pair, or the only graph.
    First,
    /// The second graph of the pair.
    Second,
}

/// The vertices of one or two graphs, stored in a single arena.
///
/// The vertices of the first graph are numbered `0..n1`, followed by the
/// vertices of the second graph. Adjacency is stored in compressed form and
/// does not change after construction. Colors are not stored here, they belong
/// to a [ColorPartition](crate::ColorPartition), so that one pool can be shared
/// by any number of partitions.
#[derive(Clone, Debug)]
pub struct VertexPool {
    offsets: Vec<u32>,
    adjacency: Vec<VertexIndex>,
    split: usize,
    edge_counts: [usize; 2],
}

impl VertexPool {
    /// Create a pool with the vertices of a single graph.
    pub fn from_graph<G>(graph: G) -> Self
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let mut pool = Self::with_capacity(graph.node_bound());
        pool.edge_counts[0] = pool.append(graph);
        pool.split = pool.len();
        pool
    }

    /// Create a pool with the vertices of `first` followed by the vertices of
    /// `second`.
    pub fn from_pair<G, H>(first: G, second: H) -> Self
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
        H: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let mut pool = Self::with_capacity(first.node_bound() + second.node_bound());
        pool.edge_counts[0] = pool.append(first);
        pool.split = pool.len();
        pool.edge_counts[1] = pool.append(second);
        pool
    }

    fn with_capacity(n: usize) -> Self {
        let mut offsets = Vec::with_capacity(n + 1);
        offsets.push(0);
        Self { offsets, adjacency: vec![], split: 0, edge_counts: [0, 0] }
    }

    /// Append the vertices of `graph` and return its number of edges.
    fn append<G>(&mut self, graph: G) -> usize
    where
        G: NodeCompactIndexable + IntoNeighbors + GraphProp<EdgeType = Undirected>,
    {
        let base = self.len();
        let start = self.adjacency.len();
        for i in 0..graph.node_bound() {
            let u = graph.from_index(i);
            self.adjacency.extend(graph.neighbors(u).map(|v| VertexIndex::new(base + graph.to_index(v))));
            self.offsets.push(self.adjacency.len() as u32);
        }
        // Every undirected edge is seen from both of its end points.
        (self.adjacency.len() - start) / 2
    }

    /// Return the total number of vertices.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.offsets.len() - 1
    }

    /// Return `true` if the pool does not contain any vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Return an iterator over all vertices in ascending order.
    pub fn vertices(&self) -> impl DoubleEndedIterator<Item = VertexIndex> + ExactSizeIterator {
        VertexIndex::range(self.len())
    }

    /// Return the neighbors of `v`.
    #[inline]
    pub fn neighbors(&self, v: VertexIndex) -> &[VertexIndex] {
        let start = self.offsets[v.index()] as usize;
        let end = self.offsets[v.index() + 1] as usize;
        &self.adjacency[start..end]
    }

    /// Return the number of neighbors of `v`.
    #[inline]
    pub fn degree(&self, v: VertexIndex) -> usize {
        (self.offsets[v.index() + 1] - self.offsets[v.index()]) as usize
    }

    /// Return the graph `v` was taken from.
    #[inline(always)]
    pub fn origin(&self, v: VertexIndex) -> Origin {
        if v.index() < self.split {
            Origin::First
        } else {
            Origin::Second
        }
    }

    /// Return the index `v` had in the graph it was taken from.
    #[inline]
    pub fn local_index(&self, v: VertexIndex) -> usize {
        match self.origin(v) {
            Origin::First => v.index(),
            Origin::Second => v.index() - self.split,
        }
    }

    /// Return the number of vertices taken from one of the graphs.
    pub fn vertex_count(&self, origin: Origin) -> usize {
        match origin {
            Origin::First => self.split,
            Origin::Second => self.len() - self.split,
        }
    }

    /// Return the number of edges of one of the graphs.
    pub fn edge_count(&self, origin: Origin) -> usize {
        match origin {
            Origin::First => self.edge_counts[0],
            Origin::Second => self.edge_counts[1],
        }
    }

    /// Return `true` if both graphs have the same number of vertices and the
    /// same number of edges. Graphs failing this check cannot be isomorphic.
    pub fn sizes_match(&self) -> bool {
        self.vertex_count(Origin::First) == self.vertex_count(Origin::Second)
            && self.edge_count(Origin::First) == self.edge_count(Origin::Second)
    }

    /// Return `true` if the two graphs are equal as labelled graphs, i.e. the
    /// identity map is an isomorphism.
    pub fn sides_identical(&self) -> bool {
        if !self.sizes_match() {
            return false;
        }
        let (mut a, mut b) = (vec![], vec![]);
        (0..self.split).all(|i| {
            let u = VertexIndex::new(i);
            let v = VertexIndex::new(i + self.split);
            if self.degree(u) != self.degree(v) {
                return false;
            }
            a.clear();
            a.extend(self.neighbors(u).iter().map(|w| w.index()));
            a.sort_unstable();
            b.clear();
            b.extend(self.neighbors(v).iter().map(|w| w.index() - self.split));
            b.sort_unstable();
            a == b
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use common::instances::{cycle_graph, path_graph, star_graph};

    #[test]
    fn single_graph() {
        let graph = path_graph(4);
        let pool = VertexPool::from_graph(&graph);
        assert_eq!(pool.len(), 4);
        assert_eq!(pool.vertex_count(Origin::First), 4);
        assert_eq!(pool.vertex_count(Origin::Second), 0);
        assert_eq!(pool.edge_count(Origin::First), 3);
        assert_eq!(pool.edge_count(Origin::Second), 0);
        let degrees: Vec<_> = pool.vertices().map(|v| pool.degree(v)).collect();
        assert_eq!(degrees, [1, 2, 2, 1]);
        assert!(pool.vertices().all(|v| pool.origin(v) == Origin::First));
    }

    #[test]
    fn pair_offsets_second_graph() {
        let first = path_graph(3);
        let second = star_graph(3);
        let pool = VertexPool::from_pair(&first, &second);
        assert_eq!(pool.len(), 7);
        assert_eq!(pool.vertex_count(Origin::First), 3);
        assert_eq!(pool.vertex_count(Origin::Second), 4);
        assert_eq!(pool.edge_count(Origin::First), 2);
        assert_eq!(pool.edge_count(Origin::Second), 3);
        assert!(!pool.sizes_match());

        let center = VertexIndex::new(3);
        assert_eq!(pool.origin(center), Origin::Second);
        assert_eq!(pool.local_index(center), 0);
        assert_eq!(pool.degree(center), 3);
        let mut neighbors: Vec<_> = pool.neighbors(center).iter().map(|v| v.index()).collect();
        neighbors.sort();
        assert_eq!(neighbors, [4, 5, 6]);
    }

    #[test]
    fn adjacency_is_symmetric() {
        let graph = cycle_graph(5);
        let pool = VertexPool::from_pair(&graph, &graph);
        for u in pool.vertices() {
            for &v in pool.neighbors(u) {
                assert!(pool.neighbors(v).contains(&u));
                assert_eq!(pool.origin(u), pool.origin(v));
            }
        }
    }

    #[test]
    fn identical_sides() {
        let graph = cycle_graph(6);
        assert!(VertexPool::from_pair(&graph, &graph).sides_identical());
        let other = path_graph(6);
        assert!(!VertexPool::from_pair(&graph, &other).sides_identical());
        let empty = path_graph(0);
        assert!(VertexPool::from_pair(&empty, &empty).sides_identical());
    }
}
