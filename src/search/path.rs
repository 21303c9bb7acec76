use serde::{Deserialize, Serialize};

use crate::graphs::{Distance, Vertex};

/// Represents a request for finding a shortest path in a graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    pub source: Vertex,
    pub target: Vertex,
}

impl ShortestPathRequest {
    pub fn new(source: Vertex, target: Vertex) -> ShortestPathRequest {
        ShortestPathRequest { source, target }
    }

    pub fn reversed(&self) -> ShortestPathRequest {
        ShortestPathRequest {
            source: self.target,
            target: self.source,
        }
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// distance of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
