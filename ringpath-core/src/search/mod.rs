//! Path searches over generated graphs.
//!
//! Two searches share one argument contract: both endpoints must belong to the
//! graph, `start == end` yields `[start]` without consulting any edge, and an
//! unreachable end is reported as `None` rather than an error.
//!
//! - [`breadth_first_search`] minimises hop count and ignores edge costs.
//! - [`cheapest_path`] minimises total cost, then hop count, then the vertex
//!   sequence.

mod breadth_first;
mod cheapest;

pub use breadth_first::breadth_first_search;
pub use cheapest::cheapest_path;

use crate::{
    error::{GraphError, Result, VertexRole},
    graph::Graph,
    vertex::Vertex,
};

/// Rejects endpoints outside the vertex set, checking `start` first.
fn check_endpoints(graph: &Graph, start: Vertex, end: Vertex) -> Result<()> {
    for (vertex, role) in [(start, VertexRole::Start), (end, VertexRole::End)] {
        if !graph.contains(vertex) {
            return Err(GraphError::InvalidVertex { vertex, role });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
