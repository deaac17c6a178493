//! Seeded random graph generation.
//!
//! [`generate_graph`] draws every vertex's neighbours from an injected random
//! source and returns one fully formed [`Graph`]. The same alphabet,
//! configuration and seed always produce the same graph, which is what lets
//! property suites shrink a failing case down to a single `u64` seed.

use rand::{Rng, SeedableRng, rngs::SmallRng, seq::index};
use tracing::{debug, instrument, warn};

use crate::{
    graph::{Cost, Graph, GraphBuilder},
    vertex::{Alphabet, Vertex},
};

/// Fewest neighbours drawn per vertex.
pub const MIN_NEIGHBOURS: usize = 1;
/// Most neighbours drawn per vertex, before mirroring and ring links.
pub const MAX_NEIGHBOURS: usize = 4;
/// Highest edge cost drawn when [`GeneratorConfig::edge_cost`] is enabled.
pub const MAX_EDGE_COST: u32 = 10;

/// Flags controlling the shape of generated graphs.
///
/// # Examples
/// ```
/// use ringpath_core::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_directed(false).with_edge_cost(true);
/// assert!(config.allow_self_links);
/// assert!(!config.directed);
/// assert!(config.force_path);
/// assert!(config.edge_cost);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(test, derive(test_strategy::Arbitrary))]
pub struct GeneratorConfig {
    /// Whether a vertex may draw itself as a neighbour.
    pub allow_self_links: bool,
    /// When `false`, every drawn edge `u -> v` is mirrored as `v -> u`.
    pub directed: bool,
    /// Links each vertex to its alphabet predecessor, forming a ring.
    pub force_path: bool,
    /// Draws costs from `1..=10` instead of using unit costs.
    pub edge_cost: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            allow_self_links: true,
            directed: true,
            force_path: true,
            edge_cost: false,
        }
    }
}

impl GeneratorConfig {
    /// Sets [`GeneratorConfig::allow_self_links`].
    #[must_use]
    pub const fn with_self_links(mut self, allow: bool) -> Self {
        self.allow_self_links = allow;
        self
    }

    /// Sets [`GeneratorConfig::directed`].
    #[must_use]
    pub const fn with_directed(mut self, directed: bool) -> Self {
        self.directed = directed;
        self
    }

    /// Sets [`GeneratorConfig::force_path`].
    #[must_use]
    pub const fn with_force_path(mut self, force_path: bool) -> Self {
        self.force_path = force_path;
        self
    }

    /// Sets [`GeneratorConfig::edge_cost`].
    #[must_use]
    pub const fn with_edge_cost(mut self, edge_cost: bool) -> Self {
        self.edge_cost = edge_cost;
        self
    }

    const fn cost_levels(&self) -> u32 {
        if self.edge_cost { MAX_EDGE_COST } else { 1 }
    }
}

/// Generates a graph over `alphabet` using `rng` for every random choice.
///
/// Each vertex draws between [`MIN_NEIGHBOURS`] and [`MAX_NEIGHBOURS`]
/// distinct `(destination, cost)` pairs. Undirected mirroring and forced ring
/// links are added on top with unit cost. Generation cannot fail: when a
/// vertex has no admissible neighbour (a one-vertex alphabet without self
/// links) it simply gets no drawn edges.
///
/// # Examples
/// ```
/// use rand::{SeedableRng, rngs::SmallRng};
/// use ringpath_core::{Alphabet, GeneratorConfig, Vertex, generate_graph};
///
/// let alphabet = Alphabet::from_symbols("ABCDEF")?;
/// let mut rng = SmallRng::seed_from_u64(7);
/// let graph = generate_graph(&alphabet, &GeneratorConfig::default(), &mut rng);
/// assert_eq!(graph.vertex_count(), 6);
/// assert!(graph.has_edge(Vertex::new('B'), Vertex::new('A')));
/// # Ok::<(), ringpath_core::GraphError>(())
/// ```
#[instrument(
    name = "core.generate_graph",
    level = "debug",
    skip(alphabet, config, rng),
    fields(
        vertices = alphabet.len(),
        allow_self_links = config.allow_self_links,
        directed = config.directed,
        force_path = config.force_path,
        edge_cost = config.edge_cost,
    ),
)]
pub fn generate_graph<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    config: &GeneratorConfig,
    rng: &mut R,
) -> Graph {
    let mut builder = GraphBuilder::new(alphabet);
    for vertex in alphabet.iter() {
        for (to, cost) in draw_neighbours(alphabet, config, vertex, rng) {
            link(&mut builder, vertex, to, cost);
            if !config.directed {
                link(&mut builder, to, vertex, Cost::UNIT);
            }
        }
        if config.force_path {
            // A one-vertex ring is a self link; skip it when those are banned.
            if let Some(previous) = alphabet
                .predecessor(vertex)
                .filter(|&previous| config.allow_self_links || previous != vertex)
            {
                link(&mut builder, vertex, previous, Cost::UNIT);
                if !config.directed {
                    link(&mut builder, previous, vertex, Cost::UNIT);
                }
            }
        }
    }
    let graph = builder.build();
    debug!(edges = graph.edge_count(), "graph generated");
    graph
}

/// Seeds a [`SmallRng`] with `seed` and calls [`generate_graph`].
#[must_use]
pub fn generate_graph_from_seed(
    alphabet: &Alphabet,
    config: &GeneratorConfig,
    seed: u64,
) -> Graph {
    let mut rng = SmallRng::seed_from_u64(seed);
    generate_graph(alphabet, config, &mut rng)
}

fn draw_neighbours<R: Rng + ?Sized>(
    alphabet: &Alphabet,
    config: &GeneratorConfig,
    vertex: Vertex,
    rng: &mut R,
) -> Vec<(Vertex, Cost)> {
    let candidates: Vec<Vertex> = alphabet
        .iter()
        .filter(|&candidate| config.allow_self_links || candidate != vertex)
        .collect();
    let levels = config.cost_levels();
    let pool = candidates.len() * levels as usize;
    if pool == 0 {
        warn!(%vertex, "vertex has no admissible neighbours");
        return Vec::new();
    }

    let wanted = rng.gen_range(MIN_NEIGHBOURS..=MAX_NEIGHBOURS).min(pool);
    index::sample(rng, pool, wanted)
        .into_iter()
        .filter_map(|slot| pair_for_slot(&candidates, levels, slot))
        .collect()
}

/// Maps a flat pool slot onto its `(destination, cost)` pair.
fn pair_for_slot(candidates: &[Vertex], levels: u32, slot: usize) -> Option<(Vertex, Cost)> {
    let width = levels as usize;
    let to = candidates.get(slot / width).copied()?;
    let cost = u32::try_from(slot % width + 1).ok()?;
    Cost::new(cost).ok().map(|cost| (to, cost))
}

fn link(builder: &mut GraphBuilder, from: Vertex, to: Vertex, cost: Cost) {
    // Both endpoints come from the seeding alphabet.
    if let Err(err) = builder.insert_edge(from, to, cost) {
        warn!(error = %err, "dropping generated edge");
    }
}
