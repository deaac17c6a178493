//! Error types for the ringpath core library.
//!
//! Defines the error enum exposed by the public API and a convenient result
//! alias. "No path" is never an error; searches report it as `None`.

use std::fmt;

use thiserror::Error;

use crate::vertex::Vertex;

macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this error code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Identifies which argument carried an unknown vertex.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum VertexRole {
    /// Start vertex of a search.
    Start,
    /// End vertex of a search.
    End,
    /// Source endpoint of an edge being added.
    Source,
    /// Destination endpoint of an edge being added.
    Destination,
}

impl fmt::Display for VertexRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Start => "start",
            Self::End => "end",
            Self::Source => "source",
            Self::Destination => "destination",
        })
    }
}

/// Error type produced when building graphs or running searches.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum GraphError {
    /// A vertex was not a member of the graph's vertex set.
    #[error("{role} vertex `{vertex}` is not part of the graph")]
    InvalidVertex {
        /// The offending vertex.
        vertex: Vertex,
        /// Which argument carried it.
        role: VertexRole,
    },
    /// Edge costs must be positive.
    #[error("edge cost must be at least 1")]
    ZeroCost,
    /// An alphabet needs at least one symbol.
    #[error("alphabet must contain at least one vertex")]
    EmptyAlphabet,
    /// An alphabet listed the same symbol twice.
    #[error("alphabet lists vertex `{vertex}` more than once")]
    DuplicateVertex {
        /// The repeated vertex.
        vertex: Vertex,
    },
}

define_error_codes! {
    /// Stable codes describing [`GraphError`] variants.
    enum GraphErrorCode for GraphError {
        /// A vertex was not a member of the graph's vertex set.
        InvalidVertex => InvalidVertex { .. } => "GRAPH_INVALID_VERTEX",
        /// Edge costs must be positive.
        ZeroCost => ZeroCost => "GRAPH_ZERO_COST",
        /// An alphabet needs at least one symbol.
        EmptyAlphabet => EmptyAlphabet => "GRAPH_EMPTY_ALPHABET",
        /// An alphabet listed the same symbol twice.
        DuplicateVertex => DuplicateVertex { .. } => "GRAPH_DUPLICATE_VERTEX",
    }
}

/// Convenient result alias for graph operations.
pub type Result<T, E = GraphError> = std::result::Result<T, E>;
