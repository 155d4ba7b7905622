use std::fs;

use matrixgraph::{classify::GraphClass, edge::Edge, matrix::AdjacencyMatrix};
use serde::Deserialize;

#[derive(Deserialize)]
struct Scenario {
    name: String,
    matrix: Vec<Vec<i64>>,
    symmetric: bool,
    connected: bool,
    weighted: bool,
    complete: bool,
    cycle: bool,
    single_cycle: bool,
    components: usize,
    class: String,
    largest_clique: usize,
    spanning_tree: Vec<(usize, usize, i64)>,
}

fn load_scenarios() -> Vec<Scenario> {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/testdata/scenarios.json");
    let source = fs::read_to_string(path).unwrap();

    serde_json::from_str(&source).unwrap()
}

fn class(label: &str) -> GraphClass {
    match label {
        "Complete" => GraphClass::Complete,
        "Connected" => GraphClass::Connected,
        "Disconnected" => GraphClass::Disconnected,
        other => panic!("unknown class {other}"),
    }
}

#[test]
fn scenarios() {
    let scenarios = load_scenarios();
    assert!(!scenarios.is_empty());

    for scenario in scenarios {
        let name = &scenario.name;
        let matrix = AdjacencyMatrix::from_rows(&scenario.matrix).unwrap();

        assert_eq!(matrix.is_symmetric(), scenario.symmetric, "{name}");
        assert_eq!(matrix.is_connected(), scenario.connected, "{name}");
        assert_eq!(matrix.is_weighted(), scenario.weighted, "{name}");
        assert_eq!(matrix.is_complete(), scenario.complete, "{name}");
        assert_eq!(matrix.has_cycle(), scenario.cycle, "{name}");
        assert_eq!(matrix.is_unicyclic(), scenario.cycle, "{name}");
        assert_eq!(matrix.has_single_cycle(), scenario.single_cycle, "{name}");
        assert_eq!(
            matrix.count_connected_components(),
            scenario.components,
            "{name}"
        );
        assert_eq!(matrix.classify(), class(&scenario.class), "{name}");

        assert!(
            matrix.has_complete_subgraph(scenario.largest_clique),
            "{name}"
        );
        assert!(
            !matrix.has_complete_subgraph(scenario.largest_clique + 1),
            "{name}"
        );

        let expected: Vec<Edge> = scenario.spanning_tree.into_iter().map(Edge::from).collect();
        assert_eq!(matrix.kruskal(), expected, "{name}");
    }
}
