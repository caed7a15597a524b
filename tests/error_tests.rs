use dijkstra_paths::{
    shortest_distance, shortest_distances, shortest_path, shortest_paths, AdjacencyList, Error,
    Graph,
};
use ordered_float::OrderedFloat;

fn w(weight: f64) -> OrderedFloat<f64> {
    OrderedFloat(weight)
}

// a -> b, c on its own
fn split_graph() -> AdjacencyList<&'static str, OrderedFloat<f64>> {
    AdjacencyList::from_adjacency(vec![
        ("a", vec![("b", w(1.0))]),
        ("b", vec![]),
        ("c", vec![("a", w(2.0))]),
    ])
    .unwrap()
}

#[test]
fn test_unreachable_target_is_no_path() {
    let graph = split_graph();

    let err = shortest_distance(&graph, &"a", &"c").unwrap_err();
    assert!(err.is_no_path(), "Expected NoPath, got {:?}", err);
    assert_eq!(err.to_string(), "No path from \"a\" to \"c\"");

    let err = shortest_path(&graph, &"a", &"c").unwrap_err();
    assert!(err.is_no_path(), "Expected NoPath, got {:?}", err);
}

#[test]
fn test_unreachable_nodes_in_batch_queries() {
    let graph = split_graph();

    let distances = shortest_distances(&graph, &"a").unwrap();
    assert_eq!(distances.len(), 3);
    assert!(distances[&"c"].into_inner().is_infinite(), "Unreached node keeps +infinity");

    let paths = shortest_paths(&graph, &"a").unwrap();
    assert_eq!(paths.len(), 2, "Unreachable nodes are left out");
    assert_eq!(paths[&"b"], vec!["a", "b"]);
    assert!(!paths.contains_key(&"c"));
}

#[test]
fn test_dangling_edge_is_unknown_node() {
    let graph = AdjacencyList::from_adjacency(vec![
        ("a", vec![("b", w(1.0)), ("x", w(4.0))]),
        ("b", vec![]),
    ])
    .unwrap();
    assert_eq!(graph.dangling_targets(), vec![&"x"]);

    let err = shortest_distances(&graph, &"a").unwrap_err();
    assert_eq!(err, Error::UnknownNode("\"x\"".to_string()));

    assert!(matches!(
        shortest_paths(&graph, &"a"),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        shortest_distance(&graph, &"a", &"b"),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_dangling_edge_from_unreached_node_is_never_expanded() {
    let graph = AdjacencyList::from_adjacency(vec![
        ("a", vec![("b", w(1.0))]),
        ("b", vec![]),
        ("z", vec![("ghost", w(1.0))]),
    ])
    .unwrap();

    let distances = shortest_distances(&graph, &"a").unwrap();
    assert_eq!(distances.len(), 3);
    assert_eq!(distances[&"b"], w(1.0));
    assert!(distances[&"z"].into_inner().is_infinite());
}

#[test]
fn test_unknown_source_and_target() {
    let graph = split_graph();

    assert!(matches!(
        shortest_distances(&graph, &"nope"),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        shortest_paths(&graph, &"nope"),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        shortest_distance(&graph, &"a", &"nope"),
        Err(Error::UnknownNode(_))
    ));
    assert!(matches!(
        shortest_path(&graph, &"a", &"nope"),
        Err(Error::UnknownNode(_))
    ));
}

#[test]
fn test_negative_and_nan_weights_rejected() {
    let mut graph: AdjacencyList<u8, OrderedFloat<f64>> = AdjacencyList::new();
    assert!(matches!(
        graph.add_edge(1, 2, w(-1.0)),
        Err(Error::NegativeWeight(_))
    ));
    assert!(matches!(
        graph.add_edge(1, 2, w(f64::NAN)),
        Err(Error::NegativeWeight(_))
    ));
    assert_eq!(graph.node_count(), 0, "Rejected edges leave the graph untouched");

    let result = AdjacencyList::from_adjacency(vec![(1u8, vec![(2u8, w(3.0)), (3u8, w(-0.5))])]);
    assert!(matches!(result, Err(Error::NegativeWeight(_))));
}

#[test]
fn test_adjacency_list_construction() {
    let mut graph: AdjacencyList<u8, OrderedFloat<f64>> = AdjacencyList::with_capacity(3);
    assert!(graph.add_node(1));
    assert!(!graph.add_node(1), "Adding a node twice is a no-op");
    graph.add_edge(1, 2, w(5.0)).unwrap();
    graph.add_edge(3, 1, w(0.0)).unwrap();
    graph.add_edge(1, 2, w(2.0)).unwrap();

    assert_eq!(graph.nodes().copied().collect::<Vec<_>>(), vec![1, 3]);
    assert!(!graph.contains_node(&2), "Edge targets are not added as nodes");
    assert_eq!(graph.edge_count(), 3);
    assert!(graph.has_edge(&1, &2));
    assert!(!graph.has_edge(&2, &1));
    assert_eq!(graph.edge_weight(&1, &2), Some(w(5.0)), "First parallel edge wins");
    assert_eq!(graph.outgoing_edges(&1).unwrap().len(), 2);
    assert_eq!(graph.outgoing_edges(&2), None);
}
