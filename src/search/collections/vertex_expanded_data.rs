use crate::graphs::{Graph, Vertex};

/// Set of finalized vertices.
pub trait VertexExpandedData {
    /// Marks `vertex` as expanded. Returns true if it already was.
    fn expand(&mut self, vertex: Vertex) -> bool;

    fn is_expanded(&self, vertex: Vertex) -> bool;

    fn number_of_expanded(&self) -> usize;

    fn clear(&mut self);
}

pub struct VertexExpandedDataVec {
    expanded: Vec<bool>,
}

impl VertexExpandedDataVec {
    pub fn new(graph: &dyn Graph) -> Self {
        VertexExpandedDataVec {
            expanded: vec![false; graph.number_of_vertices() as usize],
        }
    }
}

impl VertexExpandedData for VertexExpandedDataVec {
    fn expand(&mut self, vertex: Vertex) -> bool {
        let is_expanded = self.expanded[vertex as usize];
        self.expanded[vertex as usize] = true;
        is_expanded
    }

    fn is_expanded(&self, vertex: Vertex) -> bool {
        self.expanded[vertex as usize]
    }

    fn number_of_expanded(&self) -> usize {
        self.expanded.iter().filter(|&&expanded| expanded).count()
    }

    fn clear(&mut self) {
        self.expanded.fill(false);
    }
}
