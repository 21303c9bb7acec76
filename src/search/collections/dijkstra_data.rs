use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Graph, Vertex};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Path {
    pub vertices: Vec<Vertex>,
    pub distance: Distance,
}

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Retrieves the predecessor of a given vertex, if any.
    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex>;

    /// Sets the predecessor for a given vertex.
    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex);

    /// Retrieves the tentative distance to a given vertex, `Distance::INFINITY`
    /// if it was never reached.
    fn get_distance(&self, vertex: Vertex) -> Distance;

    /// Sets the distance to a given vertex.
    fn set_distance(&mut self, vertex: Vertex, distance: Distance);

    /// Constructs the path to a target vertex, if reachable.
    ///
    /// This function traces back from the target vertex using
    /// predecessor data to build the full path. Returns `None`
    /// if the target vertex is unreachable.
    fn get_path(&self, target: Vertex) -> Option<Path> {
        let distance = self.get_distance(target);
        if distance == Distance::INFINITY {
            return None;
        }

        let mut vertices = vec![target];

        let mut predecessor = target;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            vertices.push(predecessor);
        }

        // Reverse the path to start from the source vertex.
        vertices.reverse();

        Some(Path { vertices, distance })
    }
}

/// Predecessors and distances stored in one slot per vertex.
pub struct DijkstraDataVec {
    pub predecessors: Vec<Vertex>,
    pub distances: Vec<Distance>,
}

impl DijkstraDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        DijkstraDataVec {
            predecessors: vec![Vertex::MAX; graph.number_of_vertices() as usize],
            distances: vec![Distance::INFINITY; graph.number_of_vertices() as usize],
        }
    }
}

impl DijkstraData for DijkstraDataVec {
    fn clear(&mut self) {
        self.predecessors.fill(Vertex::MAX);
        self.distances.fill(Distance::INFINITY);
    }

    fn get_predecessor(&self, vertex: Vertex) -> Option<Vertex> {
        let predecessor = self.predecessors[vertex as usize];

        if predecessor == Vertex::MAX {
            return None;
        }

        Some(predecessor)
    }

    fn set_predecessor(&mut self, vertex: Vertex, predecessor: Vertex) {
        self.predecessors[vertex as usize] = predecessor;
    }

    fn get_distance(&self, vertex: Vertex) -> Distance {
        self.distances[vertex as usize]
    }

    fn set_distance(&mut self, vertex: Vertex, distance: Distance) {
        self.distances[vertex as usize] = distance
    }
}
