use approx::abs_diff_eq;

use super::{edge::WeightedEdge, Distance, Graph, Vertex};
use crate::search::{collections::dijkstra_data::Path, path::ShortestPathTestCase};

/// Allowed difference between a reported distance and the summed edge weights.
pub const DISTANCE_EPSILON: Distance = 1e-6;

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let Some(path) = path else {
        if validation.distance.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = validation.distance else {
        return Err("a path was found where there should be none".to_string());
    };

    if !abs_diff_eq!(path.distance, distance, epsilon = DISTANCE_EPSILON) {
        return Err(format!(
            "wrong path distance, expected {} but got {}",
            distance, path.distance
        ));
    }

    // Ensure fist and last vertex of path are source and target of request.
    if path.vertices.first() != Some(&validation.request.source) {
        return Err("first vertex of path is not source of request".to_string());
    }
    if path.vertices.last() != Some(&validation.request.target) {
        return Err("last vertex of path is not target of request".to_string());
    }

    let true_distance = path_distance(graph, &path.vertices)?;
    if !abs_diff_eq!(path.distance, true_distance, epsilon = DISTANCE_EPSILON) {
        return Err(format!(
            "path distance {} does not match summed edge weights {}",
            path.distance, true_distance
        ));
    }

    Ok(())
}

/// Sums the edge weights along `vertices`. Fails if two consecutive vertices
/// are not connected.
pub fn path_distance(graph: &dyn Graph, vertices: &[Vertex]) -> Result<Distance, String> {
    vertices
        .windows(2)
        .map(|pair| {
            let (tail, head) = (pair[0], pair[1]);
            graph
                .edges(tail)
                .find(|edge| edge.head == head)
                .map(|edge| edge.weight)
                .ok_or_else(|| format!("no edge between {} and {} found", tail, head))
        })
        .sum()
}

pub fn all_edges(graph: &dyn Graph) -> Vec<WeightedEdge> {
    (0..graph.number_of_vertices())
        .flat_map(|vertex| graph.edges(vertex))
        .collect()
}

/// True if every edge has a reverse edge of the same weight.
pub fn is_bidirectional(graph: &dyn Graph) -> bool {
    all_edges(graph).iter().all(|edge| {
        graph
            .get_weight(&edge.reversed().remove_weight())
            .is_some_and(|weight| weight == edge.weight)
    })
}
