use crate::graph::AdjacencyList;
use ordered_float::OrderedFloat;

/// Adjacency of the eight-node demonstration graph (`a`..`h`)
pub const SAMPLE_ADJACENCY: &[(&str, &[(&str, f64)])] = &[
    ("a", &[("b", 9.0), ("c", 6.0), ("e", 13.0)]),
    ("b", &[("a", 9.0), ("f", 10.0)]),
    ("c", &[("a", 6.0), ("e", 8.0), ("f", 18.0), ("d", 30.0)]),
    ("d", &[("c", 30.0), ("e", 20.0), ("f", 6.0), ("h", 16.0), ("g", 11.0)]),
    ("e", &[("a", 13.0), ("h", 25.0), ("c", 8.0), ("d", 20.0)]),
    ("f", &[("b", 10.0), ("c", 18.0), ("d", 6.0), ("g", 6.0), ("h", 19.0)]),
    ("g", &[("d", 11.0), ("f", 6.0), ("h", 6.0)]),
    ("h", &[("e", 25.0), ("f", 19.0), ("d", 16.0), ("g", 6.0)]),
];

/// Builds the demonstration graph with `String` node ids
pub fn sample_graph() -> AdjacencyList<String, OrderedFloat<f64>> {
    let mut graph = AdjacencyList::with_capacity(SAMPLE_ADJACENCY.len());
    for (node, edges) in SAMPLE_ADJACENCY {
        graph.add_node(node.to_string());
        for (target, weight) in edges.iter() {
            let _ = graph.add_edge(node.to_string(), target.to_string(), OrderedFloat(*weight));
        }
    }
    graph
}
