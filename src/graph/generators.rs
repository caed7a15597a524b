use crate::graph::AdjacencyList;
use ordered_float::OrderedFloat;
use rand::prelude::*;
use rand::rngs::StdRng;

/// Generates a seeded random directed graph with `n` nodes `0..n`
///
/// Roughly `edge_factor * n` edges are drawn; weights are whole numbers in
/// `0..=max_weight`, so zero-weight edges occur and path sums stay exact.
/// Self-loops and parallel edges are allowed.
pub fn random_graph(
    n: usize,
    edge_factor: f64,
    max_weight: u32,
    seed: u64,
) -> AdjacencyList<usize, OrderedFloat<f64>> {
    let mut graph = AdjacencyList::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for v in 0..n {
        graph.add_node(v);
    }
    if n == 0 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        let weight = OrderedFloat(rng.gen_range(0..=max_weight) as f64);
        // Weights are drawn non-negative, so this cannot fail
        let _ = graph.add_edge(u, v, weight);
    }

    graph
}

/// Generates a `width x height` grid with unit edges to the 4 neighbours
///
/// Nodes are `(x, y)` coordinates.
pub fn grid_graph(width: usize, height: usize) -> AdjacencyList<(usize, usize), OrderedFloat<f64>> {
    let mut graph = AdjacencyList::with_capacity(width * height);

    for y in 0..height {
        for x in 0..width {
            graph.add_node((x, y));
        }
    }

    for y in 0..height {
        for x in 0..width {
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push((x - 1, y));
            }
            if x + 1 < width {
                neighbours.push((x + 1, y));
            }
            if y > 0 {
                neighbours.push((x, y - 1));
            }
            if y + 1 < height {
                neighbours.push((x, y + 1));
            }
            for neighbour in neighbours {
                let _ = graph.add_edge((x, y), neighbour, OrderedFloat(1.0));
            }
        }
    }

    graph
}
