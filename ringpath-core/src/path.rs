//! Search results.

use std::fmt;

use crate::{graph::Graph, vertex::Vertex};

/// The vertices visited after leaving the start vertex, ending at the target.
///
/// Searches never include the start vertex, except for the `start == end`
/// policy where the path is the single vertex `[start]`.
///
/// # Examples
/// ```
/// use ringpath_core::{Path, Vertex};
///
/// let path = Path::from(vec![Vertex::new('B'), Vertex::new('C')]);
/// assert_eq!(path.hops(), 2);
/// assert_eq!(path.last(), Some(Vertex::new('C')));
/// assert_eq!(path.to_string(), "B -> C");
/// ```
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Path {
    vertices: Vec<Vertex>,
}

impl Path {
    /// Vertices in traversal order.
    #[must_use]
    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates the vertices in traversal order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Number of vertices in the path, which is the number of edges walked
    /// from the start.
    #[must_use]
    pub fn hops(&self) -> usize {
        self.vertices.len()
    }

    /// Final vertex of the path.
    #[must_use]
    pub fn last(&self) -> Option<Vertex> {
        self.vertices.last().copied()
    }

    /// Returns `true` when `vertex` appears in the path.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Returns `true` when no vertex appears twice.
    #[must_use]
    pub fn is_simple(&self) -> bool {
        let mut sorted = self.vertices.clone();
        sorted.sort_unstable();
        sorted.windows(2).all(|pair| pair[0] != pair[1])
    }

    /// Sum of the cheapest edge costs walking `start, v1, .., vk`, or `None`
    /// when some step is not an edge of `graph`.
    ///
    /// The single-vertex `[start]` policy path costs nothing.
    #[must_use]
    pub fn total_cost(&self, graph: &Graph, start: Vertex) -> Option<u64> {
        if self.vertices.as_slice() == [start] {
            return Some(0);
        }
        let mut from = start;
        let mut total = 0_u64;
        for &to in &self.vertices {
            total += u64::from(graph.edge_cost(from, to)?.get());
            from = to;
        }
        Some(total)
    }

    /// Consumes the path, returning its vertices.
    #[must_use]
    pub fn into_vertices(self) -> Vec<Vertex> {
        self.vertices
    }
}

impl From<Vec<Vertex>> for Path {
    fn from(vertices: Vec<Vertex>) -> Self {
        Self { vertices }
    }
}

impl fmt::Display for Path {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, vertex) in self.vertices.iter().enumerate() {
            if index > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{vertex}")?;
        }
        Ok(())
    }
}

/// A path paired with the total cost of walking it from the start vertex.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CostedPath {
    /// Vertices visited after the start.
    pub path: Path,
    /// Sum of edge costs along the path.
    pub total_cost: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::{Alphabet, Cost, GraphBuilder};

    fn path(symbols: &str) -> Path {
        Path::from(symbols.chars().map(Vertex::new).collect::<Vec<_>>())
    }

    #[test]
    fn repeated_vertices_are_not_simple() {
        assert!(path("BCD").is_simple());
        assert!(!path("BCB").is_simple());
    }

    #[test]
    fn total_cost_follows_the_cheapest_edges() {
        let alphabet = Alphabet::from_symbols("ABC").expect("alphabet");
        let [a, b, c] = ['A', 'B', 'C'].map(Vertex::new);
        let graph = GraphBuilder::new(&alphabet)
            .add_edge(a, b, Cost::new(3).expect("cost"))
            .and_then(|builder| builder.add_edge(a, b, Cost::new(2).expect("cost")))
            .and_then(|builder| builder.add_edge(b, c, Cost::UNIT))
            .expect("edges")
            .build();
        assert_eq!(path("BC").total_cost(&graph, Vertex::new('A')), Some(3));
        assert_eq!(path("C").total_cost(&graph, Vertex::new('A')), None);
        assert_eq!(path("A").total_cost(&graph, Vertex::new('A')), Some(0));
    }

    #[test]
    fn display_joins_with_arrows() {
        assert_eq!(path("A").to_string(), "A");
        assert_eq!(path("").to_string(), "");
        assert_eq!(path("XYZ").to_string(), "X -> Y -> Z");
    }
}
