//! Stable error codes and messages exposed by `ringpath-core`.

use ringpath_core::{Alphabet, Cost, GraphError, GraphErrorCode, Vertex, VertexRole};
use rstest::rstest;

#[rstest]
#[case(
    GraphError::InvalidVertex { vertex: Vertex::new('Z'), role: VertexRole::End },
    GraphErrorCode::InvalidVertex,
    "GRAPH_INVALID_VERTEX",
    "end vertex `Z` is not part of the graph",
)]
#[case(
    GraphError::ZeroCost,
    GraphErrorCode::ZeroCost,
    "GRAPH_ZERO_COST",
    "edge cost must be at least 1",
)]
#[case(
    GraphError::EmptyAlphabet,
    GraphErrorCode::EmptyAlphabet,
    "GRAPH_EMPTY_ALPHABET",
    "alphabet must contain at least one vertex",
)]
#[case(
    GraphError::DuplicateVertex { vertex: Vertex::new('Q') },
    GraphErrorCode::DuplicateVertex,
    "GRAPH_DUPLICATE_VERTEX",
    "alphabet lists vertex `Q` more than once",
)]
fn error_codes_are_stable(
    #[case] error: GraphError,
    #[case] code: GraphErrorCode,
    #[case] raw: &str,
    #[case] message: &str,
) {
    assert_eq!(error.code(), code);
    assert_eq!(code.as_str(), raw);
    assert_eq!(code.to_string(), raw);
    assert_eq!(error.to_string(), message);
}

#[test]
fn constructors_report_their_errors() {
    assert_eq!(Cost::new(0), Err(GraphError::ZeroCost));
    assert_eq!(
        Alphabet::from_symbols("").map(|alphabet| alphabet.len()),
        Err(GraphError::EmptyAlphabet)
    );
}
