//! Shortest road routes between cities.
//!
//! A [`RoadGraph`] is built once from a list of cities and roads and then
//! queried read-only with [`shortest_path`] or [`find_route`], which run
//! Dijkstra's algorithm over the graph.

pub mod error;
pub mod graphs;
pub mod network;
pub mod route;
pub mod search;
pub mod utility;

pub use error::{GraphError, NetworkError, RouteError};
pub use graphs::{
    build_graph,
    city::{City, Coordinate, Road},
    road_graph::RoadGraph,
    Distance, Graph, Vertex, MAX_ROAD_DISTANCE,
};
pub use network::RoadNetwork;
pub use route::{find_route, shortest_path, Leg, Route};
