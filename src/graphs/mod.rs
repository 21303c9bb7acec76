use crate::error::GraphError;

pub mod city;
pub mod edge;
pub mod graph_functions;
pub mod road_graph;

use city::{City, Road};
use edge::{Edge, WeightedEdge};
use road_graph::RoadGraph;

pub type Vertex = u32;

/// Road distance in kilometres.
pub type Distance = f64;

/// Largest accepted road distance. A path visits at most `Vertex::MAX` roads,
/// so every path distance below this cap stays finite.
pub const MAX_ROAD_DISTANCE: Distance = Distance::MAX / (Vertex::MAX as Distance + 1.0);

/// Read-only view of a weighted graph over dense vertex indices `0..number_of_vertices()`.
pub trait Graph: Send + Sync {
    fn number_of_vertices(&self) -> u32;

    fn number_of_edges(&self) -> u32 {
        (0..self.number_of_vertices())
            .map(|vertex| self.edges(vertex).len() as u32)
            .sum::<u32>()
    }

    /// Outgoing edges of `tail`, sorted by head. Empty for vertices outside the graph.
    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_>;

    fn get_weight(&self, edge: &Edge) -> Option<Distance>;
}

/// Builds a ready-to-query graph from a city list and a road list.
///
/// Construction stops at the first malformed entry, nothing is skipped silently.
pub fn build_graph(cities: &[City], roads: &[Road]) -> Result<RoadGraph, GraphError> {
    let mut graph = RoadGraph::new();

    for city in cities {
        graph.add_city(city.clone())?;
    }

    for road in roads {
        graph.add_road(&road.from, &road.to, road.distance_km, road.bidirectional)?;
    }

    log::info!(
        "Built road graph with {} cities and {} directed roads",
        graph.number_of_cities(),
        graph.number_of_edges()
    );

    Ok(graph)
}
