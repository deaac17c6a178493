//! Tests for the path searches.


use rstest::{fixture, rstest};

use super::*;
use crate::{
    Alphabet, Cost, CostedPath, GraphBuilder, Path,
    test_utils::{prefix_alphabet, v, validate_path},
};

fn path(symbols: &str) -> Path {
    Path::from(symbols.chars().map(Vertex::new).collect::<Vec<_>>())
}

fn build(alphabet: &Alphabet, edges: &[(char, char, u32)]) -> Graph {
    edges
        .iter()
        .try_fold(GraphBuilder::new(alphabet), |builder, &(from, to, cost)| {
            builder.add_edge(v(from), v(to), Cost::new(cost)?)
        })
        .unwrap_or_else(|err| panic!("fixture edges must be valid: {err}"))
        .build()
}

/// ```text
/// A --- B --- C
/// |     |
/// D --- E     F
/// ```
#[fixture]
fn workshop_graph() -> Graph {
    let links = [('A', 'B'), ('B', 'C'), ('A', 'D'), ('D', 'E'), ('B', 'E')];
    let edges: Vec<(char, char, u32)> = links
        .into_iter()
        .flat_map(|(a, b)| [(a, b, 1), (b, a, 1)])
        .collect();
    build(&prefix_alphabet(6), &edges)
}

#[rstest]
#[case::neighbour_of_neighbour('A', 'C', "BC")]
#[case::first_branch_wins_ties('A', 'E', "BE")]
#[case::single_hop('D', 'A', "A")]
#[case::across_the_square('C', 'D', "BAD")]
fn bfs_finds_minimal_paths(
    workshop_graph: Graph,
    #[case] start: char,
    #[case] end: char,
    #[case] expected: &str,
) {
    let found = breadth_first_search(&workshop_graph, v(start), v(end))
        .expect("endpoints are vertices")
        .expect("end is reachable");
    assert_eq!(found, path(expected));
}

#[rstest]
fn bfs_start_equals_end_without_self_link(workshop_graph: Graph) {
    assert!(!workshop_graph.has_edge(v('C'), v('C')));
    let found = breadth_first_search(&workshop_graph, v('C'), v('C')).expect("valid endpoints");
    assert_eq!(found, Some(path("C")));
}

#[rstest]
fn bfs_reports_isolated_vertex_as_absent(workshop_graph: Graph) {
    let found = breadth_first_search(&workshop_graph, v('A'), v('F')).expect("valid endpoints");
    assert_eq!(found, None);
}

#[rstest]
#[case::unknown_start('Z', 'A', VertexRole::Start)]
#[case::unknown_end('A', 'Z', VertexRole::End)]
#[case::start_checked_first('Z', 'Z', VertexRole::Start)]
fn searches_reject_unknown_vertices(
    workshop_graph: Graph,
    #[case] start: char,
    #[case] end: char,
    #[case] role: VertexRole,
) {
    let expected = GraphError::InvalidVertex {
        vertex: v('Z'),
        role,
    };
    let bfs = breadth_first_search(&workshop_graph, v(start), v(end))
        .expect_err("unknown vertex must fail");
    assert_eq!(bfs, expected);
    let cheapest =
        cheapest_path(&workshop_graph, v(start), v(end)).expect_err("unknown vertex must fail");
    assert_eq!(cheapest, expected);
}

#[test]
fn bfs_ignores_costs() {
    let graph = build(
        &prefix_alphabet(3),
        &[('A', 'C', 10), ('A', 'B', 1), ('B', 'C', 1)],
    );
    let found = breadth_first_search(&graph, v('A'), v('C')).expect("valid endpoints");
    assert_eq!(found, Some(path("C")));
}

#[test]
fn forced_ring_scenario_finds_a_valid_minimal_path() {
    // A -> B, B -> C plus the predecessor ring F -> E -> .. -> A -> F.
    let alphabet = prefix_alphabet(6);
    let mut edges = vec![('A', 'B', 1), ('B', 'C', 1)];
    for vertex in alphabet.iter() {
        let previous = alphabet.predecessor(vertex).expect("vertex is in the alphabet");
        edges.push((vertex.symbol(), previous.symbol(), 1));
    }
    let graph = build(&alphabet, &edges);
    let found = breadth_first_search(&graph, v('A'), v('C'))
        .expect("valid endpoints")
        .expect("ring keeps C reachable");
    assert_eq!(found.hops(), 2);
    validate_path(&graph, v('A'), v('C'), &found).unwrap_or_else(|reason| panic!("{reason}"));
}

#[test]
fn cheapest_path_prefers_lower_cost_over_fewer_hops() {
    let graph = build(
        &prefix_alphabet(4),
        &[('A', 'D', 9), ('A', 'B', 2), ('B', 'C', 2), ('C', 'D', 2)],
    );
    let found = cheapest_path(&graph, v('A'), v('D'))
        .expect("valid endpoints")
        .expect("D is reachable");
    assert_eq!(found.path, path("BCD"));
    assert_eq!(found.total_cost, 6);
}

#[test]
fn cheapest_path_breaks_cost_ties_by_hops_then_vertices() {
    let graph = build(
        &prefix_alphabet(5),
        &[
            ('A', 'E', 4),
            ('A', 'C', 2),
            ('C', 'E', 2),
            ('A', 'B', 1),
            ('B', 'D', 1),
            ('D', 'E', 2),
        ],
    );
    let found = cheapest_path(&graph, v('A'), v('E'))
        .expect("valid endpoints")
        .expect("E is reachable");
    assert_eq!(found.path, path("E"));

    let without_direct = build(
        &prefix_alphabet(5),
        &[('A', 'D', 2), ('D', 'E', 2), ('A', 'C', 2), ('C', 'E', 2)],
    );
    let found = cheapest_path(&without_direct, v('A'), v('E'))
        .expect("valid endpoints")
        .expect("E is reachable");
    assert_eq!(found.path, path("CE"));
    assert_eq!(found.total_cost, 4);
}

#[test]
fn cheapest_path_uses_the_cheaper_parallel_edge() {
    let graph = build(&prefix_alphabet(2), &[('A', 'B', 7), ('A', 'B', 3)]);
    let found = cheapest_path(&graph, v('A'), v('B'))
        .expect("valid endpoints")
        .expect("B is reachable");
    assert_eq!(found.total_cost, 3);
}

#[rstest]
fn cheapest_path_policy_and_absence(workshop_graph: Graph) {
    let same = cheapest_path(&workshop_graph, v('E'), v('E')).expect("valid endpoints");
    assert_eq!(
        same,
        Some(CostedPath {
            path: path("E"),
            total_cost: 0
        })
    );
    assert_eq!(
        cheapest_path(&workshop_graph, v('F'), v('A')).expect("valid endpoints"),
        None
    );
}

#[rstest]
fn bfs_records_a_debug_span(workshop_graph: Graph) {
    use ringpath_test_support::tracing::RecordingLayer;
    use tracing_subscriber::layer::SubscriberExt;

    let layer = RecordingLayer::default();
    let subscriber = tracing_subscriber::registry().with(layer.clone());
    tracing::subscriber::with_default(subscriber, || {
        breadth_first_search(&workshop_graph, v('A'), v('C')).expect("valid endpoints")
    });

    let spans = layer.spans();
    let span = spans
        .iter()
        .find(|span| span.name == "core.search.bfs")
        .expect("search span must be recorded");
    assert_eq!(span.fields.get("start").map(String::as_str), Some("Vertex('A')"));
    assert!(layer.events().iter().any(|event| {
        event.fields.get("message").map(String::as_str) == Some("path found")
            && event.fields.get("hops").map(String::as_str) == Some("2")
    }));
}
