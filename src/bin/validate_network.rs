use std::{path::PathBuf, time::Instant};

use approx::abs_diff_eq;
use city_paths::{
    graphs::graph_functions::{is_bidirectional, validate_path, DISTANCE_EPSILON},
    search::{dijkstra::Dijkstra, path::ShortestPathTestCase, PathFinding},
    utility::{all_pairs, get_progressbar_long_jobs, init_logger},
    Distance, Graph, RoadGraph, RoadNetwork,
};
use clap::Parser;
use indicatif::ParallelProgressIterator;
use rayon::prelude::*;

/// Routes every ordered pair of cities in parallel and checks each path
/// against the graph, against a single source search and, for networks
/// without one-way roads, against the reverse query.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Network in `.json` or `.bincode` format, the bundled Nigerian network if omitted
    #[arg(short, long)]
    network: Option<PathBuf>,
}

fn main() {
    init_logger();
    let args = Args::parse();

    let graph = match RoadNetwork::from_optional_file(args.network.as_deref())
        .and_then(|network| RoadGraph::from_network(&network))
    {
        Ok(graph) => graph,
        Err(err) => {
            log::error!("{}", err);
            std::process::exit(1);
        }
    };

    let dijkstra = Dijkstra::new(&graph);
    let check_symmetry = is_bidirectional(&graph);
    let requests = all_pairs(&graph);

    let start = Instant::now();
    let single_source_distances: Vec<Vec<Distance>> = (0..graph.number_of_vertices())
        .into_par_iter()
        .map(|source| dijkstra.single_source(source).distances)
        .collect();

    let bar = get_progressbar_long_jobs("Validating", requests.len() as u64);
    let failures: Vec<String> = requests
        .par_iter()
        .progress_with(bar)
        .filter_map(|request| {
            let distance =
                single_source_distances[request.source as usize][request.target as usize];
            let test_case = ShortestPathTestCase {
                request: *request,
                distance: distance.is_finite().then_some(distance),
            };

            let path = dijkstra.shortest_path(request.source, request.target);
            if let Err(err) = validate_path(&graph, &test_case, &path) {
                return Some(format!("{} -> {}: {}", request.source, request.target, err));
            }

            if check_symmetry {
                let reverse = request.reversed();
                let reverse_distance =
                    dijkstra.shortest_path_distance(reverse.source, reverse.target);
                let symmetric = match (test_case.distance, reverse_distance) {
                    (Some(forward), Some(backward)) => {
                        abs_diff_eq!(forward, backward, epsilon = DISTANCE_EPSILON)
                    }
                    (None, None) => true,
                    _ => false,
                };
                if !symmetric {
                    return Some(format!(
                        "{} -> {}: asymmetric distances {:?} and {:?}",
                        request.source, request.target, test_case.distance, reverse_distance
                    ));
                }
            }

            None
        })
        .collect();

    for failure in failures.iter() {
        log::error!("{}", failure);
    }

    if !failures.is_empty() {
        log::error!("{} of {} queries failed", failures.len(), requests.len());
        std::process::exit(1);
    }

    log::info!(
        "All {} queries over {} cities correct, took {:?}",
        requests.len(),
        graph.number_of_vertices(),
        start.elapsed()
    );
}
