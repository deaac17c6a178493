//! Hop-minimal breadth-first search.

use std::collections::{HashSet, VecDeque};

use tracing::{debug, instrument};

use super::check_endpoints;
use crate::{error::Result, graph::Graph, path::Path, vertex::Vertex};

/// Finds a path from `start` to `end` with the fewest hops.
///
/// The frontier is a FIFO queue of partial paths. Each vertex's edges are
/// expanded in `(destination, cost)` order and a destination is marked seen
/// the first time it is enqueued, so equal-length ties go to the branch that
/// reaches the end first in that order. The search returns as soon as `end` is
/// enqueued. Costs are ignored entirely; see [`super::cheapest_path`].
///
/// Returns `Ok(Some([start]))` when `start == end` even without a self link,
/// and `Ok(None)` when `end` is unreachable.
///
/// # Errors
/// Returns [`crate::GraphError::InvalidVertex`] when either endpoint is not
/// part of `graph`.
///
/// # Examples
/// ```
/// use ringpath_core::{Alphabet, Cost, GraphBuilder, Vertex, breadth_first_search};
///
/// let [a, b, c] = ['A', 'B', 'C'].map(Vertex::new);
/// let graph = GraphBuilder::new(&Alphabet::from_symbols("ABC")?)
///     .add_edge(a, b, Cost::UNIT)?
///     .add_edge(b, c, Cost::UNIT)?
///     .build();
/// let path = breadth_first_search(&graph, a, c)?.expect("C is reachable");
/// assert_eq!(path.vertices(), &[b, c]);
/// assert_eq!(breadth_first_search(&graph, c, a)?, None);
/// # Ok::<(), ringpath_core::GraphError>(())
/// ```
#[instrument(name = "core.search.bfs", level = "debug", err, skip(graph))]
pub fn breadth_first_search(graph: &Graph, start: Vertex, end: Vertex) -> Result<Option<Path>> {
    check_endpoints(graph, start, end)?;
    if start == end {
        return Ok(Some(Path::from(vec![start])));
    }

    let mut seen = HashSet::from([start]);
    // Partial paths exclude the start vertex.
    let mut frontier = VecDeque::from([Vec::new()]);
    while let Some(partial) = frontier.pop_front() {
        let current = partial.last().copied().unwrap_or(start);
        let Some(edges) = graph.edges_from(current) else {
            continue;
        };
        for edge in edges {
            if !seen.insert(edge.to) {
                continue;
            }
            let mut extended = partial.clone();
            extended.push(edge.to);
            if edge.to == end {
                debug!(hops = extended.len(), visited = seen.len(), "path found");
                return Ok(Some(Path::from(extended)));
            }
            frontier.push_back(extended);
        }
    }

    debug!(visited = seen.len(), "end vertex unreachable");
    Ok(None)
}
