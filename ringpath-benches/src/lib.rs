//! Shared fixtures for ringpath benchmarks.
//!
//! Benchmarks search many seeded graphs rather than one, so a lucky seed with
//! a direct edge between the endpoints does not dominate the measurement.

use std::fmt;

use ringpath_core::{Alphabet, GeneratorConfig, Graph, generate_graph_from_seed};

/// Seed of the first fixture graph; fixtures use consecutive seeds after it.
pub const BASE_SEED: u64 = 42;

/// Named generator configuration measured by the benchmarks.
#[derive(Clone, Copy, Debug)]
pub struct ConfigCase {
    /// Label used as the Criterion benchmark id.
    pub label: &'static str,
    /// Generator flags.
    pub config: GeneratorConfig,
}

impl fmt::Display for ConfigCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label)
    }
}

/// Configurations covered by every benchmark group.
#[must_use]
pub fn config_cases() -> [ConfigCase; 4] {
    let base = GeneratorConfig::default();
    [
        ConfigCase {
            label: "directed_ring",
            config: base,
        },
        ConfigCase {
            label: "undirected_ring",
            config: base.with_directed(false),
        },
        ConfigCase {
            label: "directed_sparse",
            config: base.with_force_path(false).with_self_links(false),
        },
        ConfigCase {
            label: "weighted_ring",
            config: base.with_edge_cost(true),
        },
    ]
}

/// Generates `count` graphs over `A..=Z` with consecutive seeds.
#[must_use]
pub fn fixture_graphs(config: &GeneratorConfig, count: u64) -> Vec<Graph> {
    let alphabet = Alphabet::ascii_uppercase();
    (BASE_SEED..BASE_SEED + count)
        .map(|seed| generate_graph_from_seed(&alphabet, config, seed))
        .collect()
}
