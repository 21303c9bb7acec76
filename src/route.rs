//! City-level shortest path queries on a [`RoadGraph`].
//!
//! [`shortest_path`] takes exact city names. [`find_route`] is the lenient
//! entry point for user input and resolves names ignoring case first.

use serde::{Deserialize, Serialize};

use crate::{
    error::RouteError,
    graphs::{city::City, edge::Edge, road_graph::RoadGraph, Distance, Graph, Vertex},
    search::{dijkstra::Dijkstra, PathFinding},
};

/// A shortest route between two cities.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Route {
    pub source: String,
    pub target: String,
    /// Total road distance, equal to the sum of the legs.
    pub distance: Distance,
    pub distance_unit: String,
    /// City names from source to target, both inclusive.
    pub path: Vec<String>,
}

/// One road of a route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    pub from: String,
    pub to: String,
    pub distance: Distance,
}

impl Route {
    pub fn number_of_cities(&self) -> usize {
        self.path.len()
    }

    /// True if no intermediate city is visited. A route from a city to
    /// itself counts as direct.
    pub fn is_direct(&self) -> bool {
        self.path.len() <= 2
    }

    pub fn is_same_city(&self) -> bool {
        self.path.len() == 1
    }

    /// Roads travelled along the route, in order.
    pub fn legs(&self, graph: &RoadGraph) -> Vec<Leg> {
        self.path
            .windows(2)
            .filter_map(|pair| {
                let tail = graph.vertex(&pair[0])?;
                let head = graph.vertex(&pair[1])?;
                let distance = graph.get_weight(&Edge { tail, head })?;
                Some(Leg {
                    from: pair[0].clone(),
                    to: pair[1].clone(),
                    distance,
                })
            })
            .collect()
    }

    /// Metadata of every city on the route, in order.
    pub fn cities<'a>(&self, graph: &'a RoadGraph) -> Vec<&'a City> {
        self.path
            .iter()
            .filter_map(|name| graph.vertex(name).and_then(|vertex| graph.city(vertex)))
            .collect()
    }
}

fn lookup(graph: &RoadGraph, name: &str) -> Result<Vertex, RouteError> {
    graph
        .vertex(name)
        .ok_or_else(|| RouteError::UnknownCity(name.to_string()))
}

/// Finds a shortest route between two cities given by their exact names.
///
/// Fails with `UnknownCity` if either city is missing, the source being
/// checked first, and with `NoRoute` if both exist but are not connected.
/// Among several routes of equal length an arbitrary one is returned.
pub fn shortest_path(graph: &RoadGraph, source: &str, target: &str) -> Result<Route, RouteError> {
    let source_vertex = lookup(graph, source)?;
    let target_vertex = lookup(graph, target)?;

    route_between(graph, source_vertex, target_vertex)
}

/// Like [`shortest_path`], but city names are matched ignoring case and
/// surrounding whitespace. The route carries the names as stored in the graph.
pub fn find_route(graph: &RoadGraph, from: &str, to: &str) -> Result<Route, RouteError> {
    let source_vertex = graph
        .resolve(from)
        .ok_or_else(|| RouteError::UnknownCity(from.trim().to_string()))?;
    let target_vertex = graph
        .resolve(to)
        .ok_or_else(|| RouteError::UnknownCity(to.trim().to_string()))?;

    route_between(graph, source_vertex, target_vertex)
}

fn route_between(graph: &RoadGraph, source: Vertex, target: Vertex) -> Result<Route, RouteError> {
    let name = |vertex: Vertex| graph.name(vertex).unwrap_or_default().to_string();

    log::debug!("Routing {} -> {}", name(source), name(target));

    let path = Dijkstra::new(graph)
        .shortest_path(source, target)
        .ok_or_else(|| RouteError::NoRoute {
            from: name(source),
            to: name(target),
        })?;

    Ok(Route {
        source: name(source),
        target: name(target),
        distance: path.distance,
        distance_unit: "km".to_string(),
        path: path.vertices.into_iter().map(name).collect(),
    })
}
