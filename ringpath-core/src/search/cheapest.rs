//! Cost-aware search.

use std::{
    cmp::Reverse,
    collections::{BinaryHeap, HashSet},
};

use tracing::{debug, instrument};

use super::check_endpoints;
use crate::{
    error::Result,
    graph::Graph,
    path::{CostedPath, Path},
    vertex::Vertex,
};

/// Frontier entry ordered by total cost, then hops, then vertex sequence.
type Candidate = Reverse<(u64, usize, Vec<Vertex>)>;

/// Finds the cheapest path from `start` to `end`.
///
/// Runs Dijkstra's algorithm over the positive edge costs. Among paths of
/// equal total cost the one with fewer hops wins, and among those the
/// lexicographically smaller vertex sequence wins, so the result is fully
/// determined by the graph. With unit costs the total cost equals the hop
/// count found by [`super::breadth_first_search`].
///
/// Returns `[start]` with cost zero when `start == end`, and `Ok(None)` when
/// `end` is unreachable.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidVertex`] when either endpoint is not
/// part of `graph`.
///
/// # Examples
/// ```
/// use ringpath_core::{Alphabet, Cost, GraphBuilder, Vertex, cheapest_path};
///
/// let [a, b, c] = ['A', 'B', 'C'].map(Vertex::new);
/// let graph = GraphBuilder::new(&Alphabet::from_symbols("ABC")?)
///     .add_edge(a, c, Cost::new(5)?)?
///     .add_edge(a, b, Cost::new(1)?)?
///     .add_edge(b, c, Cost::new(2)?)?
///     .build();
/// let found = cheapest_path(&graph, a, c)?.expect("C is reachable");
/// assert_eq!(found.path.vertices(), &[b, c]);
/// assert_eq!(found.total_cost, 3);
/// # Ok::<(), ringpath_core::GraphError>(())
/// ```
#[instrument(name = "core.search.cheapest", level = "debug", err, skip(graph))]
pub fn cheapest_path(graph: &Graph, start: Vertex, end: Vertex) -> Result<Option<CostedPath>> {
    check_endpoints(graph, start, end)?;
    if start == end {
        return Ok(Some(CostedPath {
            path: Path::from(vec![start]),
            total_cost: 0,
        }));
    }

    let mut settled = HashSet::new();
    let mut frontier: BinaryHeap<Candidate> = BinaryHeap::from([Reverse((0, 0, Vec::new()))]);
    while let Some(Reverse((cost, hops, partial))) = frontier.pop() {
        let current = partial.last().copied().unwrap_or(start);
        if !settled.insert(current) {
            continue;
        }
        if current == end {
            debug!(total_cost = cost, hops, settled = settled.len(), "path found");
            return Ok(Some(CostedPath {
                path: Path::from(partial),
                total_cost: cost,
            }));
        }
        let Some(edges) = graph.edges_from(current) else {
            continue;
        };
        for edge in edges.iter().filter(|edge| !settled.contains(&edge.to)) {
            let mut extended = partial.clone();
            extended.push(edge.to);
            frontier.push(Reverse((cost + u64::from(edge.cost.get()), hops + 1, extended)));
        }
    }

    debug!(settled = settled.len(), "end vertex unreachable");
    Ok(None)
}
