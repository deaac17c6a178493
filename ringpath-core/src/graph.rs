//! Immutable adjacency-set graphs over a fixed vertex set.
//!
//! A [`Graph`] maps every vertex to the set of its outgoing `(destination,
//! cost)` edges. Edge sets are ordered, so iterating a vertex's edges always
//! visits destinations in ascending order, then ascending cost. Graphs are
//! frozen once built; derive modified graphs with [`Graph::to_builder`].

use std::{
    collections::{BTreeMap, BTreeSet},
    fmt,
    num::NonZeroU32,
};

use crate::{
    error::{GraphError, Result, VertexRole},
    vertex::{Alphabet, Vertex},
};

/// A positive integer edge cost.
///
/// # Examples
/// ```
/// use ringpath_core::Cost;
///
/// assert_eq!(Cost::UNIT.get(), 1);
/// assert!(Cost::new(0).is_err());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Cost(NonZeroU32);

impl Cost {
    /// The default cost of one.
    pub const UNIT: Self = Self(NonZeroU32::MIN);

    /// Wraps `value` as a cost.
    ///
    /// # Errors
    /// Returns [`GraphError::ZeroCost`] when `value` is zero.
    pub fn new(value: u32) -> Result<Self> {
        NonZeroU32::new(value).map(Self).ok_or(GraphError::ZeroCost)
    }

    /// Returns the cost as a plain integer.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0.get()
    }
}

impl Default for Cost {
    fn default() -> Self {
        Self::UNIT
    }
}

impl fmt::Display for Cost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An outgoing edge as stored against its source vertex.
///
/// Orders by destination, then cost.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Edge {
    /// Vertex the edge leads to.
    pub to: Vertex,
    /// Cost of traversing the edge.
    pub cost: Cost,
}

impl Edge {
    /// Creates an edge to `to` with the given cost.
    #[must_use]
    pub const fn new(to: Vertex, cost: Cost) -> Self {
        Self { to, cost }
    }

    /// Creates a unit-cost edge to `to`.
    #[must_use]
    pub const fn unit(to: Vertex) -> Self {
        Self::new(to, Cost::UNIT)
    }
}

/// An immutable directed graph whose vertex set is fixed at construction.
///
/// # Examples
/// ```
/// use ringpath_core::{Alphabet, Cost, GraphBuilder, Vertex};
///
/// let alphabet = Alphabet::from_symbols("ABC")?;
/// let graph = GraphBuilder::new(&alphabet)
///     .add_edge(Vertex::new('A'), Vertex::new('B'), Cost::UNIT)?
///     .build();
/// assert!(graph.has_edge(Vertex::new('A'), Vertex::new('B')));
/// assert!(!graph.has_edge(Vertex::new('B'), Vertex::new('A')));
/// assert_eq!(graph.vertex_count(), 3);
/// # Ok::<(), ringpath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Graph {
    adjacency: BTreeMap<Vertex, BTreeSet<Edge>>,
}

impl Graph {
    /// Starts a builder seeded with this graph's vertices and edges.
    #[must_use]
    pub fn to_builder(&self) -> GraphBuilder {
        GraphBuilder {
            adjacency: self.adjacency.clone(),
        }
    }

    /// Iterates the vertex set in ascending order.
    pub fn vertices(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.adjacency.keys().copied()
    }

    /// Number of vertices, including isolated ones.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Total number of stored edges.
    #[must_use]
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(BTreeSet::len).sum()
    }

    /// Returns `true` when `vertex` is part of the vertex set.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.adjacency.contains_key(&vertex)
    }

    /// Outgoing edges of `vertex` in `(destination, cost)` order, or `None`
    /// when the vertex is unknown.
    #[must_use]
    pub fn edges_from(&self, vertex: Vertex) -> Option<&BTreeSet<Edge>> {
        self.adjacency.get(&vertex)
    }

    /// Returns `true` when at least one `from -> to` edge exists.
    #[must_use]
    pub fn has_edge(&self, from: Vertex, to: Vertex) -> bool {
        self.edge_cost(from, to).is_some()
    }

    /// Cheapest cost among the `from -> to` edges.
    #[must_use]
    pub fn edge_cost(&self, from: Vertex, to: Vertex) -> Option<Cost> {
        // Edges sort by destination first, so the first match is the cheapest.
        self.adjacency
            .get(&from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.cost)
    }

    /// Returns `true` when every edge `u -> v` has some reverse edge `v -> u`.
    #[must_use]
    pub fn is_symmetric(&self) -> bool {
        self.adjacency
            .iter()
            .all(|(&from, edges)| edges.iter().all(|edge| self.has_edge(edge.to, from)))
    }
}

impl fmt::Display for Graph {
    /// One line per vertex: `A: B(1) C(4)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            write!(f, "{vertex}:")?;
            for edge in edges {
                write!(f, " {}({})", edge.to, edge.cost)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Assembles a [`Graph`].
///
/// Every vertex of the seeding alphabet is present from the start, so the
/// built graph keeps isolated vertices as keys with empty edge sets.
#[derive(Clone, Debug, Default)]
pub struct GraphBuilder {
    adjacency: BTreeMap<Vertex, BTreeSet<Edge>>,
}

impl GraphBuilder {
    /// Creates a builder containing every vertex of `alphabet` and no edges.
    #[must_use]
    pub fn new(alphabet: &Alphabet) -> Self {
        Self {
            adjacency: alphabet.iter().map(|v| (v, BTreeSet::new())).collect(),
        }
    }

    /// Adds `vertex` with no edges; a no-op when it already exists.
    #[must_use]
    pub fn add_vertex(mut self, vertex: Vertex) -> Self {
        self.adjacency.entry(vertex).or_default();
        self
    }

    /// Adds the edge `from -> to` with `cost`.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint has not been
    /// added to the builder.
    pub fn add_edge(mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<Self> {
        self.insert_edge(from, to, cost)?;
        Ok(self)
    }

    /// In-place variant of [`GraphBuilder::add_edge`].
    ///
    /// Returns `true` when the edge was not already present.
    ///
    /// # Errors
    /// Returns [`GraphError::InvalidVertex`] when either endpoint is unknown.
    pub fn insert_edge(&mut self, from: Vertex, to: Vertex, cost: Cost) -> Result<bool> {
        if !self.adjacency.contains_key(&to) {
            return Err(GraphError::InvalidVertex {
                vertex: to,
                role: VertexRole::Destination,
            });
        }
        let edges = self
            .adjacency
            .get_mut(&from)
            .ok_or(GraphError::InvalidVertex {
                vertex: from,
                role: VertexRole::Source,
            })?;
        Ok(edges.insert(Edge::new(to, cost)))
    }

    /// Freezes the builder into an immutable graph.
    #[must_use]
    pub fn build(self) -> Graph {
        Graph {
            adjacency: self.adjacency,
        }
    }
}
