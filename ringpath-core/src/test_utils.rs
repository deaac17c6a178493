//! Shared test utilities for `ringpath-core`.

use proptest::{
    prelude::*,
    test_runner::{Config as ProptestConfig, TestCaseError},
};
use ringpath_test_support::ci::property_test_profile::ProptestRunProfile;

use crate::{
    Alphabet, GeneratorConfig, Graph, Path, Vertex, breadth_first_search, generate_graph_from_seed,
};

/// Builds a standard proptest configuration from the shared CI profile.
///
/// This keeps property suites aligned on the same `RINGPATH_PBT_CASES` and
/// `RINGPATH_PBT_FORK` interpretation.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = ProptestRunProfile::load(default_cases, false);
    ProptestConfig {
        cases: profile.cases(),
        fork: profile.fork(),
        ..ProptestConfig::default()
    }
}

/// Shorthand for [`Vertex::new`].
pub(crate) const fn v(symbol: char) -> Vertex {
    Vertex::new(symbol)
}

/// The first `len` uppercase letters as an alphabet.
pub(crate) fn prefix_alphabet(len: usize) -> Alphabet {
    Alphabet::new(('A'..='Z').take(len).map(Vertex::new))
        .unwrap_or_else(|err| panic!("alphabet of {len} letters is invalid: {err}"))
}

/// Alphabets of one to twenty-six letters.
pub(crate) fn alphabet_strategy() -> impl Strategy<Value = Alphabet> {
    (1_usize..=26).prop_map(prefix_alphabet)
}

/// A generated graph alongside the inputs that produced it.
#[derive(Clone, Debug)]
pub(crate) struct GraphCase {
    pub(crate) alphabet: Alphabet,
    pub(crate) config: GeneratorConfig,
    pub(crate) seed: u64,
    pub(crate) graph: Graph,
}

/// Graphs over the full `A..=Z` alphabet generated with `config`.
pub(crate) fn uppercase_graphs(config: GeneratorConfig) -> impl Strategy<Value = GraphCase> {
    any::<u64>().prop_map(move |seed| {
        let alphabet = Alphabet::ascii_uppercase();
        let graph = generate_graph_from_seed(&alphabet, &config, seed);
        GraphCase {
            alphabet,
            config,
            seed,
            graph,
        }
    })
}

/// Graphs over arbitrary alphabets and arbitrary generator flags.
pub(crate) fn any_graph_case() -> impl Strategy<Value = GraphCase> {
    (alphabet_strategy(), any::<GeneratorConfig>(), any::<u64>()).prop_map(
        |(alphabet, config, seed)| {
            let graph = generate_graph_from_seed(&alphabet, &config, seed);
            GraphCase {
                alphabet,
                config,
                seed,
                graph,
            }
        },
    )
}

/// Checks that `path` walks real edges from `start` to `end` without
/// revisiting a vertex, describing the first violation found.
pub(crate) fn validate_path(
    graph: &Graph,
    start: Vertex,
    end: Vertex,
    path: &Path,
) -> Result<(), String> {
    if start == end {
        return if path.vertices() == [start] {
            Ok(())
        } else {
            Err(format!("path={path} must be exactly [{start}]"))
        };
    }
    if path.last() != Some(end) {
        return Err(format!("path={path} does not end at {end}"));
    }
    if path.contains(start) {
        return Err(format!("path={path} revisits start {start}"));
    }
    if !path.is_simple() {
        return Err(format!("path={path} has loops"));
    }
    let mut from = start;
    for to in path.iter() {
        if !graph.has_edge(from, to) {
            return Err(format!("path={path} uses missing edge {from} -> {to}"));
        }
        from = to;
    }
    Ok(())
}

/// Hop distance from `start` to `end` per [`breadth_first_search`], counting
/// `start == end` as zero hops.
pub(crate) fn hop_distance(
    graph: &Graph,
    start: Vertex,
    end: Vertex,
) -> Result<Option<usize>, TestCaseError> {
    if start == end {
        return Ok(Some(0));
    }
    breadth_first_search(graph, start, end)
        .map(|found| found.map(|path| path.hops()))
        .map_err(|err| TestCaseError::fail(format!("search failed: {err}")))
}
