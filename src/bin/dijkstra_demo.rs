use dijkstra_paths::graph::sample::sample_graph;
use dijkstra_paths::{AdjacencyList, Dijkstra, Graph, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;
use serde::Serialize;
use std::collections::BTreeMap;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

type DemoGraph = AdjacencyList<String, OrderedFloat<f64>>;

/// Configuration for the demo run
#[derive(Debug, Clone)]
struct DemoConfig {
    source: String,
    target: Option<String>,
    graph_file: Option<PathBuf>,
    json: bool,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            source: "a".to_string(),
            target: Some("h".to_string()),
            graph_file: None,
            json: false,
        }
    }
}

impl DemoConfig {
    /// `[source] [target|-] [--graph <file.json>] [--json]`
    fn from_args(args: &[String]) -> Result<Self, String> {
        let mut config = DemoConfig::default();
        let mut positional = Vec::new();

        let mut iter = args.iter();
        while let Some(arg) = iter.next() {
            match arg.as_str() {
                "--json" => config.json = true,
                "--graph" => {
                    let path = iter.next().ok_or("--graph needs a file argument")?;
                    config.graph_file = Some(PathBuf::from(path));
                }
                other if other.starts_with("--") => {
                    return Err(format!("unknown option {}", other));
                }
                other => positional.push(other.to_string()),
            }
        }

        if let Some(source) = positional.first() {
            config.source = source.clone();
            config.target = None;
        }
        if let Some(target) = positional.get(1) {
            config.target = if target == "-" { None } else { Some(target.clone()) };
        }

        Ok(config)
    }
}

/// Reads a `{ "node": [["target", weight], ...] }` JSON graph
fn load_graph(path: &Path) -> Result<DemoGraph, Box<dyn std::error::Error>> {
    let text = fs::read_to_string(path)?;
    let adjacency: BTreeMap<String, Vec<(String, f64)>> = serde_json::from_str(&text)?;
    let graph = AdjacencyList::from_adjacency(adjacency.into_iter().map(|(node, edges)| {
        let edges: Vec<_> = edges
            .into_iter()
            .map(|(target, weight)| (target, OrderedFloat(weight)))
            .collect();
        (node, edges)
    }))?;
    Ok(graph)
}

#[derive(Debug, Serialize)]
struct NodeReport {
    node: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    distance: Option<f64>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    path: Vec<String>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let config = DemoConfig::from_args(&args)?;
    log::debug!("demo configuration: {:?}", config);

    let graph = match &config.graph_file {
        Some(path) => load_graph(path)?,
        None => sample_graph(),
    };

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &config.source)?;

    let targets: Vec<String> = match &config.target {
        Some(target) => vec![target.clone()],
        None => {
            let mut nodes: Vec<String> = graph.nodes().cloned().collect();
            nodes.sort();
            nodes
        }
    };

    let mut reports = Vec::with_capacity(targets.len());
    for target in &targets {
        let report = match result.distance_to(target) {
            Ok(distance) => NodeReport {
                node: target.clone(),
                distance: Some(distance.into_inner()),
                path: result.path_to(target)?,
            },
            // A single requested target must be reachable
            Err(err) if config.target.is_some() => return Err(err.into()),
            Err(_) => NodeReport {
                node: target.clone(),
                distance: None,
                path: Vec::new(),
            },
        };
        reports.push(report);
    }

    if config.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    println!(
        "{} from {} on {} nodes / {} edges",
        <Dijkstra as ShortestPathAlgorithm<String, OrderedFloat<f64>, DemoGraph>>::name(&dijkstra),
        config.source,
        graph.node_count(),
        graph.edge_count()
    );
    for report in &reports {
        match report.distance {
            Some(distance) => println!(
                "  {}: distance = {:.1}, path = {}",
                report.node,
                distance,
                report.path.join(" -> ")
            ),
            None => println!("  {}: unreachable", report.node),
        }
    }

    Ok(())
}
