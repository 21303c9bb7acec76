use ahash::{HashMap, HashMapExt};

use super::{
    city::City,
    edge::{Edge, TaillessEdge, WeightedEdge},
    Distance, Graph, Vertex, MAX_ROAD_DISTANCE,
};
use crate::error::GraphError;

/// In-memory road network. Cities are stored in insertion order and addressed
/// by dense vertex indices, roads as per-city adjacency lists sorted by head.
///
/// The graph is only mutated while it is being built. Queries borrow it
/// immutably, so one instance can be shared between threads. To change the
/// network build a new graph and swap it in.
#[derive(Clone, Default)]
pub struct RoadGraph {
    cities: Vec<City>,
    edges: Vec<Vec<TaillessEdge>>,
    vertices: HashMap<String, Vertex>,
    folded_names: HashMap<String, Vertex>,
}

impl std::fmt::Debug for RoadGraph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "RoadGraph with {} cities and {} directed roads",
            self.cities.len(),
            self.number_of_edges()
        )
    }
}

fn fold_name(name: &str) -> String {
    name.trim().to_lowercase()
}

impl RoadGraph {
    pub fn new() -> RoadGraph {
        RoadGraph {
            cities: Vec::new(),
            edges: Vec::new(),
            vertices: HashMap::new(),
            folded_names: HashMap::new(),
        }
    }

    /// Registers a city and returns its vertex.
    ///
    /// Names are unique ignoring case, registering a name twice fails with
    /// `DuplicateNode` instead of being a no-op.
    pub fn add_city(&mut self, city: City) -> Result<Vertex, GraphError> {
        let folded = fold_name(&city.name);
        if self.folded_names.contains_key(&folded) {
            return Err(GraphError::DuplicateNode(city.name));
        }

        let vertex = self.cities.len() as Vertex;
        self.vertices.insert(city.name.clone(), vertex);
        self.folded_names.insert(folded, vertex);
        self.cities.push(city);
        self.edges.push(Vec::new());

        Ok(vertex)
    }

    /// Adds a road between two registered cities. A bidirectional road is
    /// added in both directions with the same distance.
    ///
    /// Distances must be non-negative and at most [`MAX_ROAD_DISTANCE`].
    pub fn add_road(
        &mut self,
        from: &str,
        to: &str,
        distance: Distance,
        bidirectional: bool,
    ) -> Result<(), GraphError> {
        let tail = self
            .vertex(from)
            .ok_or_else(|| GraphError::UnknownNode(from.to_string()))?;
        let head = self
            .vertex(to)
            .ok_or_else(|| GraphError::UnknownNode(to.to_string()))?;

        if !(0.0..=MAX_ROAD_DISTANCE).contains(&distance) {
            return Err(GraphError::InvalidWeight {
                from: from.to_string(),
                to: to.to_string(),
                distance,
            });
        }

        let edge = WeightedEdge::new(tail, head, distance);
        self.insert_edge(&edge);
        if bidirectional {
            self.insert_edge(&edge.reversed());
        }

        Ok(())
    }

    // Keeps the shorter road if the pair is already connected.
    fn insert_edge(&mut self, edge: &WeightedEdge) {
        let edges_sharing_tail = &mut self.edges[edge.tail as usize];

        match edges_sharing_tail.binary_search_by_key(&edge.head, |other| other.head) {
            Ok(index) => {
                let existing = &mut edges_sharing_tail[index];
                if edge.weight < existing.weight {
                    existing.weight = edge.weight;
                } else {
                    log::debug!(
                        "Keeping road {} -> {} ({} km) over parallel road of {} km",
                        self.cities[edge.tail as usize].name,
                        self.cities[edge.head as usize].name,
                        existing.weight,
                        edge.weight
                    );
                }
            }
            Err(index) => edges_sharing_tail.insert(index, edge.remove_tail()),
        }
    }

    pub fn has_city(&self, name: &str) -> bool {
        self.vertices.contains_key(name)
    }

    /// Exact lookup of a city name.
    pub fn vertex(&self, name: &str) -> Option<Vertex> {
        self.vertices.get(name).copied()
    }

    /// Lookup ignoring case and surrounding whitespace.
    pub fn resolve(&self, name: &str) -> Option<Vertex> {
        self.vertex(name)
            .or_else(|| self.folded_names.get(&fold_name(name)).copied())
    }

    pub fn city(&self, vertex: Vertex) -> Option<&City> {
        self.cities.get(vertex as usize)
    }

    pub fn name(&self, vertex: Vertex) -> Option<&str> {
        self.city(vertex).map(|city| city.name.as_str())
    }

    pub fn cities(&self) -> impl ExactSizeIterator<Item = &City> + '_ {
        self.cities.iter()
    }

    pub fn number_of_cities(&self) -> usize {
        self.cities.len()
    }

    /// Cities whose name or state contains `query`, ignoring case. Cities are
    /// returned in insertion order. A blank query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&City> {
        let query = fold_name(query);
        if query.is_empty() {
            return Vec::new();
        }

        self.cities
            .iter()
            .filter(|city| {
                city.name.to_lowercase().contains(&query)
                    || city
                        .state
                        .as_ref()
                        .is_some_and(|state| state.to_lowercase().contains(&query))
            })
            .collect()
    }

    /// Neighbouring cities of `name` with the road distance to each of them.
    pub fn neighbors(&self, name: &str) -> Result<Vec<(&str, Distance)>, GraphError> {
        let vertex = self
            .vertex(name)
            .ok_or_else(|| GraphError::UnknownNode(name.to_string()))?;

        Ok(self.edges[vertex as usize]
            .iter()
            .map(|edge| (self.cities[edge.head as usize].name.as_str(), edge.weight))
            .collect())
    }
}

impl Graph for RoadGraph {
    fn number_of_vertices(&self) -> u32 {
        self.cities.len() as u32
    }

    fn edges(&self, tail: Vertex) -> Box<dyn ExactSizeIterator<Item = WeightedEdge> + Send + '_> {
        // Struct is needed as tail would otherwise not live long enough.
        struct EdgeIterator<'a> {
            edge_iter: std::slice::Iter<'a, TaillessEdge>,
            tail: Vertex,
        }

        impl<'a> Iterator for EdgeIterator<'a> {
            type Item = WeightedEdge;

            fn next(&mut self) -> Option<Self::Item> {
                self.edge_iter
                    .next()
                    .map(|tailless_edge| tailless_edge.set_tail(self.tail))
            }

            fn size_hint(&self) -> (usize, Option<usize>) {
                self.edge_iter.size_hint()
            }
        }

        impl<'a> ExactSizeIterator for EdgeIterator<'a> {
            fn len(&self) -> usize {
                self.edge_iter.len()
            }
        }

        let edges = self
            .edges
            .get(tail as usize)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[]);

        Box::new(EdgeIterator {
            edge_iter: edges.iter(),
            tail,
        })
    }

    fn get_weight(&self, edge: &Edge) -> Option<Distance> {
        let edges_sharing_tail = self.edges.get(edge.tail as usize)?;

        let edge_index = edges_sharing_tail
            .binary_search_by_key(&edge.head, |tailless_edge| tailless_edge.head)
            .ok()?;

        Some(edges_sharing_tail[edge_index].weight)
    }
}
