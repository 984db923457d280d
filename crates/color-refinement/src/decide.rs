use crate::partition::ColorPartition;
use crate::pool::{Origin, VertexPool};
use crate::refine::{refine_with, Strategy};
use tracing::{debug, instrument, trace};

/// Decide whether the two graphs of `pool` are isomorphic.
#[instrument(skip_all, fields(n = pool.len()))]
pub fn decide(pool: &VertexPool, strategy: Strategy) -> bool {
    find(pool, strategy).is_some()
}

/// Find an isomorphism between the two graphs of `pool`.
///
/// The isomorphism is returned as a map from the vertex indices of the first
/// graph to the vertex indices of the second graph.
#[instrument(skip_all, fields(n = pool.len()))]
pub fn find(pool: &VertexPool, strategy: Strategy) -> Option<Vec<usize>> {
    if !pool.sizes_match() {
        debug!("vertex or edge counts differ");
        return None;
    }
    if pool.sides_identical() {
        debug!("graphs are identical");
        return Some((0..pool.vertex_count(Origin::First)).collect());
    }
    let partition = refine_with(pool, None, strategy);
    let leaf = search(pool, partition, strategy)?;
    let map = leaf.bijection(pool);
    debug_assert!(map.is_some());
    map
}

/// Search for a bijection partition that refines `partition`.
///
/// Only the first ambiguous class is branched on. Any isomorphism compatible
/// with `partition` maps the first member `x` of that class to one of its
/// members from the second graph, so trying all of them is exhaustive.
fn search(pool: &VertexPool, mut partition: ColorPartition, strategy: Strategy) -> Option<ColorPartition> {
    if !partition.is_balanced(pool) {
        return None;
    }
    let Some(color) = partition.first_ambiguous_class() else {
        // Balanced with classes of size at most two.
        return Some(partition);
    };

    // Classes are sorted and balanced: the first half are vertices of the
    // first graph, the second half are vertices of the second graph.
    let members = partition.class(color);
    let half = members.len() / 2;
    let x = members[0];
    let candidates = members[half..].to_vec();
    debug_assert!(candidates.iter().all(|y| pool.origin(*y) == Origin::Second));

    let singleton = partition.individualize(x);
    trace!(%color, %x, candidates = candidates.len(), "branch");
    candidates.into_iter().find_map(|y| {
        let mut branch = partition.clone();
        branch.move_vertex(y, singleton);
        let branch = refine_with(pool, Some(branch), strategy);
        search(pool, branch, strategy)
    })
}
