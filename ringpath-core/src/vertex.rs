//! Vertex identifiers and the ordered alphabets they are drawn from.

use std::{collections::BTreeSet, fmt};

use crate::error::{GraphError, Result};

/// A vertex identified by a single symbol.
///
/// # Examples
/// ```
/// use ringpath_core::Vertex;
///
/// let a = Vertex::new('A');
/// assert_eq!(a.symbol(), 'A');
/// assert!(a < Vertex::new('B'));
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Vertex(char);

impl Vertex {
    /// Wraps `symbol` as a vertex.
    #[must_use]
    pub const fn new(symbol: char) -> Self {
        Self(symbol)
    }

    /// Returns the underlying symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        self.0
    }
}

impl From<char> for Vertex {
    fn from(symbol: char) -> Self {
        Self(symbol)
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered, non-empty sequence of distinct vertices.
///
/// The order matters: forced paths link each vertex to its predecessor.
///
/// # Examples
/// ```
/// use ringpath_core::{Alphabet, Vertex};
///
/// let alphabet = Alphabet::from_symbols("ABC")?;
/// assert_eq!(alphabet.len(), 3);
/// assert_eq!(alphabet.predecessor(Vertex::new('A')), Some(Vertex::new('C')));
/// # Ok::<(), ringpath_core::GraphError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Alphabet {
    vertices: Vec<Vertex>,
}

impl Alphabet {
    /// Builds an alphabet from `vertices`, preserving their order.
    ///
    /// # Errors
    /// Returns [`GraphError::EmptyAlphabet`] for an empty input and
    /// [`GraphError::DuplicateVertex`] when a vertex repeats.
    pub fn new(vertices: impl IntoIterator<Item = Vertex>) -> Result<Self> {
        let mut seen = BTreeSet::new();
        let mut ordered = Vec::new();
        for vertex in vertices {
            if !seen.insert(vertex) {
                return Err(GraphError::DuplicateVertex { vertex });
            }
            ordered.push(vertex);
        }
        if ordered.is_empty() {
            return Err(GraphError::EmptyAlphabet);
        }
        Ok(Self { vertices: ordered })
    }

    /// Builds an alphabet with one vertex per character of `symbols`.
    ///
    /// # Errors
    /// Propagates the validation failures of [`Alphabet::new`].
    pub fn from_symbols(symbols: &str) -> Result<Self> {
        Self::new(symbols.chars().map(Vertex::new))
    }

    /// The 26 uppercase ASCII letters `A..=Z`.
    #[must_use]
    pub fn ascii_uppercase() -> Self {
        Self {
            vertices: ('A'..='Z').map(Vertex::new).collect(),
        }
    }

    /// Number of vertices in the alphabet.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always `false`; alphabets are non-empty by construction.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Vertices in alphabet order.
    #[must_use]
    pub fn as_slice(&self) -> &[Vertex] {
        &self.vertices
    }

    /// Iterates the vertices in alphabet order.
    pub fn iter(&self) -> impl Iterator<Item = Vertex> + '_ {
        self.vertices.iter().copied()
    }

    /// Returns `true` when `vertex` belongs to the alphabet.
    #[must_use]
    pub fn contains(&self, vertex: Vertex) -> bool {
        self.vertices.contains(&vertex)
    }

    /// Position of `vertex` in alphabet order.
    #[must_use]
    pub fn position(&self, vertex: Vertex) -> Option<usize> {
        self.vertices.iter().position(|&v| v == vertex)
    }

    /// The vertex preceding `vertex`, wrapping from the first to the last.
    #[must_use]
    pub fn predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let index = self.position(vertex)?;
        let previous = index.checked_sub(1).unwrap_or(self.vertices.len() - 1);
        self.vertices.get(previous).copied()
    }
}
