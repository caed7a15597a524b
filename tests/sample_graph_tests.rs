use dijkstra_paths::graph::sample::{sample_graph, SAMPLE_ADJACENCY};
use dijkstra_paths::{
    shortest_distance, shortest_distances, shortest_path, shortest_paths, Dijkstra, Graph,
    ShortestPathAlgorithm,
};
use ordered_float::OrderedFloat;

fn s(node: &str) -> String {
    node.to_string()
}

fn path_cost(graph: &impl Graph<String, OrderedFloat<f64>>, path: &[String]) -> f64 {
    path.windows(2)
        .map(|pair| {
            graph
                .edge_weight(&pair[0], &pair[1])
                .expect("consecutive path nodes must be joined by an edge")
                .into_inner()
        })
        .sum()
}

#[test]
fn test_sample_distances_from_a() {
    let graph = sample_graph();
    let distances = shortest_distances(&graph, &s("a")).unwrap();

    let expected = [
        ("a", 0.0),
        ("b", 9.0),
        ("c", 6.0),
        ("d", 25.0),
        ("e", 13.0),
        ("f", 19.0),
        ("g", 25.0),
        ("h", 31.0),
    ];
    assert_eq!(distances.len(), expected.len(), "One distance per node");
    for (node, distance) in expected {
        assert_eq!(distances[&s(node)], OrderedFloat(distance), "Distance to {}", node);
    }
}

#[test]
fn test_sample_distance_and_path_to_h() {
    let graph = sample_graph();

    let distance = shortest_distance(&graph, &s("a"), &s("h")).unwrap();
    assert_eq!(distance, OrderedFloat(31.0));

    let path = shortest_path(&graph, &s("a"), &s("h")).unwrap();
    assert_eq!(path, vec![s("a"), s("b"), s("f"), s("g"), s("h")]);
    assert_eq!(path_cost(&graph, &path), 31.0, "Path to h should cost its distance");
}

#[test]
fn test_sample_all_paths_from_a() {
    let graph = sample_graph();
    let distances = shortest_distances(&graph, &s("a")).unwrap();
    let paths = shortest_paths(&graph, &s("a")).unwrap();

    assert_eq!(paths.len(), 8, "Every node of the sample graph is reachable");
    assert_eq!(paths[&s("a")], vec![s("a")], "Path to the source is the source alone");
    assert_eq!(paths[&s("d")], vec![s("a"), s("b"), s("f"), s("d")]);
    assert_eq!(paths[&s("e")], vec![s("a"), s("e")]);

    for (node, path) in &paths {
        assert_eq!(path.first(), Some(&s("a")), "Path should start at source");
        assert_eq!(path.last(), Some(node), "Path should end at target");
        assert_eq!(
            path_cost(&graph, path),
            distances[node].into_inner(),
            "Path cost to {} should equal its distance",
            node
        );
    }
}

#[test]
fn test_sample_every_source() {
    let graph = sample_graph();

    for (source, _) in SAMPLE_ADJACENCY {
        let source = s(source);
        let distances = shortest_distances(&graph, &source).unwrap();
        assert_eq!(distances[&source], OrderedFloat(0.0), "Source distance should be zero");

        // Triangle inequality over every edge
        for node in graph.nodes() {
            for edge in graph.outgoing_edges(node).unwrap() {
                assert!(
                    distances[&edge.target] <= distances[node] + edge.weight,
                    "dist[{}] <= dist[{}] + {:?} from {}",
                    edge.target,
                    node,
                    edge.weight,
                    source
                );
            }
        }
    }
}

#[test]
fn test_sample_is_symmetric() {
    // Every edge of the sample graph has a reverse edge of the same weight
    let graph = sample_graph();
    for from in graph.nodes() {
        for to in graph.nodes() {
            let forward = shortest_distance(&graph, from, to).unwrap();
            let backward = shortest_distance(&graph, to, from).unwrap();
            assert_eq!(forward, backward, "{} <-> {}", from, to);
        }
    }
}

#[test]
fn test_trait_interface_matches_free_functions() {
    let graph = sample_graph();
    let dijkstra = Dijkstra::new();

    let result = dijkstra.compute_shortest_paths(&graph, &s("a")).unwrap();
    assert_eq!(result.source, s("a"));
    assert_eq!(result.predecessors[&s("h")], s("g"));
    assert_eq!(result.predecessors[&s("a")], s("a"));
    assert_eq!(result.distance_to(&s("g")).unwrap(), OrderedFloat(25.0));
    assert!(result.is_reachable(&s("c")));

    let path = <Dijkstra as ShortestPathAlgorithm<
        String,
        OrderedFloat<f64>,
        dijkstra_paths::AdjacencyList<String, OrderedFloat<f64>>,
    >>::get_path(&dijkstra, &result, &s("h"));
    assert_eq!(path, Some(shortest_path(&graph, &s("a"), &s("h")).unwrap()));
    assert_eq!(
        <Dijkstra as ShortestPathAlgorithm<
            String,
            OrderedFloat<f64>,
            dijkstra_paths::AdjacencyList<String, OrderedFloat<f64>>,
        >>::name(&dijkstra),
        "Dijkstra"
    );
}

#[test]
fn test_concurrent_queries_share_graph() {
    let graph = sample_graph();
    let expected = shortest_distances(&graph, &s("a")).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| shortest_distances(&graph, &s("a")).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}
