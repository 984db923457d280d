use crate::index::{ColorIndex, VertexIndex};
use crate::pool::{Origin, VertexPool};

/// A partition of the vertices of a [VertexPool] into color classes.
///
/// Classes are indexed by [ColorIndex]. A class can be empty, its color is
/// then unused but is never handed out again. The partition maintains
///
/// + every vertex is in exactly one class,
/// + the color of a vertex is the index of its class,
/// + the members of a class are sorted by vertex index.
///
/// As the vertices of the first graph of a pool precede the vertices of the
/// second graph, the members of the first graph form a prefix of every class.
///
/// Cloning a partition copies every class, so that clones can be refined
/// independently of each other.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ColorPartition {
    classes: Vec<Vec<VertexIndex>>,
    colors: Vec<ColorIndex>,
}

impl ColorPartition {
    /// Color every vertex by its degree.
    ///
    /// The color of a vertex with degree `d` is `d`. Colors of degrees that do
    /// not occur stay unused.
    pub fn by_degree(pool: &VertexPool) -> Self {
        Self::from_colors(pool.vertices().map(|v| pool.degree(v)))
    }

    /// Create a partition from a color for each vertex.
    ///
    /// The number of classes is one more than the largest color, the classes
    /// of colors that are not used are empty.
    pub fn from_colors<I>(colors: I) -> Self
    where
        I: IntoIterator<Item = usize>,
    {
        let colors: Vec<ColorIndex> = colors.into_iter().map(ColorIndex::new).collect();
        let num_colors = colors.iter().map(|c| c.index() + 1).max().unwrap_or(1);
        let mut classes = vec![vec![]; num_colors];
        for (v, c) in colors.iter().enumerate() {
            classes[c.index()].push(VertexIndex::new(v));
        }
        let partition = Self { classes, colors };
        partition.check_consistent();
        partition
    }

    /// Return the number of vertices.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Return `true` if the partition does not contain any vertices.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Return the number of colors handed out so far, including colors of
    /// empty classes.
    #[inline(always)]
    pub fn num_colors(&self) -> usize {
        self.classes.len()
    }

    /// Return the number of non-empty classes.
    pub fn num_classes(&self) -> usize {
        self.classes.iter().filter(|c| !c.is_empty()).count()
    }

    /// Return the color the next split will use.
    #[inline(always)]
    pub fn next_unused_color(&self) -> ColorIndex {
        ColorIndex::new(self.classes.len())
    }

    pub(crate) fn allocate(&mut self) -> ColorIndex {
        let color = self.next_unused_color();
        self.classes.push(vec![]);
        color
    }

    /// Return the color of `v`.
    #[inline(always)]
    pub fn color(&self, v: VertexIndex) -> ColorIndex {
        self.colors[v.index()]
    }

    /// Return the colors of all vertices, indexed by vertex.
    #[inline(always)]
    pub fn colors(&self) -> &[ColorIndex] {
        &self.colors
    }

    /// Return the members of the class `color`.
    ///
    /// Panics if the color has not been handed out.
    #[inline]
    pub fn class(&self, color: ColorIndex) -> &[VertexIndex] {
        &self.classes[color.index()]
    }

    /// Return an iterator over the non-empty classes and their colors.
    pub fn classes(&self) -> impl Iterator<Item = (ColorIndex, &[VertexIndex])> + '_ {
        ColorIndex::range(self.classes.len())
            .zip(self.classes.iter())
            .filter(|(_, members)| !members.is_empty())
            .map(|(c, members)| (c, members.as_slice()))
    }

    /// Return `true` if every class has at most one member.
    pub fn is_discrete(&self) -> bool {
        self.classes.iter().all(|c| c.len() <= 1)
    }

    /// Move `v` to the class `to`.
    pub fn move_vertex(&mut self, v: VertexIndex, to: ColorIndex) {
        let from = self.colors[v.index()];
        if from == to {
            return;
        }
        let source = &mut self.classes[from.index()];
        let pos = source.binary_search(&v).expect("vertex is a member of the class of its color");
        source.remove(pos);
        let target = &mut self.classes[to.index()];
        let pos = target.binary_search(&v).unwrap_or_else(|pos| pos);
        target.insert(pos, v);
        self.colors[v.index()] = to;
    }

    /// Give `v` a new color of its own and return that color.
    pub fn individualize(&mut self, v: VertexIndex) -> ColorIndex {
        let color = self.allocate();
        self.move_vertex(v, color);
        color
    }

    /// Move `x` and `y` together to a new class and return its color.
    pub fn pair_off(&mut self, x: VertexIndex, y: VertexIndex) -> ColorIndex {
        let color = self.allocate();
        self.move_vertex(x, color);
        self.move_vertex(y, color);
        color
    }

    /// Apply the pending colors of one refinement step.
    ///
    /// Every vertex in `pending` currently has the color `from` and is moved to
    /// the class of its pending color. The pending colors must have been
    /// allocated and their classes must be empty.
    pub(crate) fn commit(&mut self, from: ColorIndex, pending: &[(VertexIndex, ColorIndex)]) {
        for &(v, to) in pending {
            debug_assert_eq!(self.colors[v.index()], from);
            debug_assert_ne!(to, from);
            self.colors[v.index()] = to;
            self.classes[to.index()].push(v);
        }
        let colors = &self.colors;
        self.classes[from.index()].retain(|v| colors[v.index()] == from);
        self.check_consistent();
    }

    /// Set the color of every vertex to the index of the class containing it.
    ///
    /// The classes are the source of truth. Returns the number of vertices
    /// whose color had to be changed, which is zero unless the partition was
    /// corrupted.
    pub fn resync_colors(&mut self) -> usize {
        let mut changed = 0;
        for (i, members) in self.classes.iter().enumerate() {
            let color = ColorIndex::new(i);
            for v in members {
                if self.colors[v.index()] != color {
                    self.colors[v.index()] = color;
                    changed += 1;
                }
            }
        }
        changed
    }

    /// Return the number of members of a class that belong to the first graph.
    #[inline]
    pub fn first_graph_members(&self, pool: &VertexPool, color: ColorIndex) -> usize {
        self.classes[color.index()].partition_point(|v| pool.origin(*v) == Origin::First)
    }

    /// Return `true` if every class has as many members from the first graph
    /// as from the second graph.
    pub fn is_balanced(&self, pool: &VertexPool) -> bool {
        ColorIndex::range(self.classes.len()).all(|c| {
            let len = self.classes[c.index()].len();
            len % 2 == 0 && 2 * self.first_graph_members(pool, c) == len
        })
    }

    /// Return `true` if every class is either empty or contains exactly one
    /// vertex from each graph.
    pub fn is_bijection(&self, pool: &VertexPool) -> bool {
        self.classes.iter().all(|members| match members.as_slice() {
            [] => true,
            [x, y] => pool.origin(*x) != pool.origin(*y),
            _ => false,
        })
    }

    /// If the partition is a bijection, return the map from the vertices of the
    /// first graph to the vertices of the second graph, indexed by the vertex
    /// indices of the first graph.
    pub fn bijection(&self, pool: &VertexPool) -> Option<Vec<usize>> {
        if !self.is_bijection(pool) {
            return None;
        }
        let mut map = vec![usize::MAX; pool.vertex_count(Origin::First)];
        for (_, members) in self.classes() {
            map[pool.local_index(members[0])] = pool.local_index(members[1]);
        }
        Some(map)
    }

    /// Return the color of the first class with at least four members.
    pub fn first_ambiguous_class(&self) -> Option<ColorIndex> {
        self.classes.iter().position(|c| c.len() >= 4).map(ColorIndex::new)
    }

    /// Return the classes as sorted lists of vertex indices, ignoring colors.
    ///
    /// Two partitions with the same classes but different colors have the same
    /// canonical form.
    pub fn canonical(&self) -> Vec<Vec<usize>> {
        let mut classes: Vec<Vec<usize>> =
            self.classes().map(|(_, members)| members.iter().map(|v| v.index()).collect()).collect();
        classes.sort_unstable();
        classes
    }

    /// Panic if the data structure does not correspond to a partition.
    pub(crate) fn check_consistent(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        let mut seen = vec![false; self.colors.len()];
        for (i, members) in self.classes.iter().enumerate() {
            assert!(members.windows(2).all(|w| w[0] < w[1]), "class {i} is not sorted");
            for v in members {
                assert!(!seen[v.index()], "vertex {v} is in more than one class");
                seen[v.index()] = true;
                assert_eq!(self.colors[v.index()].index(), i, "color of vertex {v} does not match its class");
            }
        }
        assert!(seen.iter().all(|s| *s), "some vertex is not in any class");
    }
}
