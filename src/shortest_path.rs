//! Single-source shortest paths (Dijkstra), driven by `IndexPriorityQueue`.
//!
//! Each vertex is queued at most once. When a shorter path to a queued vertex is found, its
//! entry is re-keyed in place with `change_key` instead of pushing a duplicate.

use crate::error::Error;
use crate::index_pq::IndexPriorityQueue;
use log::{debug, trace};

// vertex type; an index into a vertex list
pub type V = u32;

// sum of edge weights along a path
pub type Weight = u64;

const NO_VERT: V = !0u32;

/// The result of `dijkstra`: a shortest-path tree rooted at the source vertex.
#[derive(Clone, Debug)]
pub struct ShortestPaths {
    source: V,
    distance: Vec<Option<Weight>>,
    /// prev[v] is the vertex before v on the shortest path to v, or NO_VERT.
    prev: Vec<V>,
}

impl ShortestPaths {
    pub fn source(&self) -> V {
        self.source
    }

    /// Length of the shortest path from the source to `v`, or `None` if `v` is unreachable.
    pub fn distance(&self, v: V) -> Option<Weight> {
        self.distance.get(v as usize).cloned().flatten()
    }

    /// The vertices of a shortest path from the source to `to`, both ends included.
    pub fn path_to(&self, to: V) -> Option<Vec<V>> {
        self.distance(to)?;
        let mut path_verts = vec![to];
        let mut v = to;
        while v != self.source {
            v = self.prev[v as usize];
            assert_ne!(v, NO_VERT);
            path_verts.push(v);
        }
        path_verts.reverse();
        Some(path_verts)
    }
}

/// Finds the shortest paths from `source` to every vertex in `0..num_verts`.
///
/// `edges(v)` yields the forward edges of `v` as `(to, weight)`. Fails if `source`, or the
/// target of any edge that is reached, is not below `num_verts`.
pub fn dijkstra<Edges, EdgeIterator>(
    num_verts: usize,
    source: V,
    edges: Edges,
) -> Result<ShortestPaths, Error>
where
    Edges: Fn(V) -> EdgeIterator,
    EdgeIterator: Iterator<Item = (V, Weight)>,
{
    let mut pq: IndexPriorityQueue<Weight> = IndexPriorityQueue::with_capacity(num_verts);
    let mut distance: Vec<Option<Weight>> = vec![None; num_verts];
    let mut prev: Vec<V> = vec![NO_VERT; num_verts];

    // Verts that have been popped. Their distance is final.
    let mut settled = vec![false; num_verts];
    let mut num_settled: usize = 0;

    pq.push(0, source as usize)?;
    distance[source as usize] = Some(0);

    while let Some((current_weight, current)) = pq.pop() {
        trace!("settled v{} at distance {}", current, current_weight);
        settled[current] = true;
        num_settled += 1;

        for (to, edge_weight) in edges(current as V) {
            let to_index = to as usize;
            if to_index >= num_verts {
                return Err(Error::IndexOutOfRange {
                    index: to_index,
                    capacity: num_verts,
                });
            }
            if settled[to_index] {
                continue;
            }
            let next_weight = current_weight.saturating_add(edge_weight);
            if distance[to_index].map_or(true, |best| next_weight < best) {
                distance[to_index] = Some(next_weight);
                prev[to_index] = current as V;
                pq.change_key(next_weight, to_index)?;
            }
        }
    }

    debug!(
        "dijkstra from v{}: {} of {} verts reachable",
        source, num_settled, num_verts
    );

    Ok(ShortestPaths {
        source,
        distance,
        prev,
    })
}
