//! Ringpath core library.
//!
//! Generates small random graphs over a fixed vertex alphabet and searches
//! them for paths.
//!
//! # Determinism
//!
//! Every random choice flows through the `rand::Rng` handed to
//! [`generate_graph`], and edge sets iterate in `(destination, cost)` order.
//! A seed therefore identifies a graph exactly, and both searches return the
//! same path for the same inputs on every call.
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod generator;
mod graph;
mod path;
mod search;
#[cfg(test)]
mod test_utils;
mod vertex;

pub use crate::{
    error::{GraphError, GraphErrorCode, Result, VertexRole},
    generator::{
        GeneratorConfig, MAX_EDGE_COST, MAX_NEIGHBOURS, MIN_NEIGHBOURS, generate_graph,
        generate_graph_from_seed,
    },
    graph::{Cost, Edge, Graph, GraphBuilder},
    path::{CostedPath, Path},
    search::{breadth_first_search, cheapest_path},
    vertex::{Alphabet, Vertex},
};
