use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataVec, Path},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataVec},
    },
    PathFinding,
};
use crate::graphs::{Graph, Vertex};

/// Settles `tail` and relaxes its edges to every vertex that is not yet
/// expanded.
fn relax_edges(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    tail: Vertex,
) {
    let distance_tail = data.get_distance(tail);

    for edge in graph.edges(tail) {
        if expanded.is_expanded(edge.head) {
            continue;
        }

        let alternative_distance_head = distance_tail + edge.weight;
        if alternative_distance_head < data.get_distance(edge.head) {
            data.set_distance(edge.head, alternative_distance_head);
            data.set_predecessor(edge.head, tail);
            queue.insert(edge.head, alternative_distance_head);
        }
    }
}

/// Runs until every vertex reachable from `source` is expanded.
pub fn dijkstra_one_to_all(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
) {
    data.set_distance(source, 0.0);
    queue.insert(source, 0.0);

    while let Some(tail) = queue.pop() {
        // Stale queue entry, the vertex was settled with a smaller distance.
        if expanded.expand(tail) {
            continue;
        }

        relax_edges(graph, data, expanded, queue, tail);
    }
}

/// Runs until `target` is expanded or the queue runs dry. The distance of
/// `target` is final once it is popped, as no weight is negative.
pub fn dijkstra_one_to_one(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: Vertex,
    target: Vertex,
) {
    data.set_distance(source, 0.0);
    queue.insert(source, 0.0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }

        if tail == target {
            log::trace!("Target {} settled, {} entries left in queue", target, queue.len());
            break;
        }

        relax_edges(graph, data, expanded, queue, tail);
    }
}

/// Stateless Dijkstra path finder. All search state lives in the call.
#[derive(Clone, Copy)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, source: Vertex, target: Vertex) -> Option<Path> {
        let number_of_vertices = self.graph.number_of_vertices();
        if source >= number_of_vertices || target >= number_of_vertices {
            return None;
        }

        // Defined short cut, no search needed.
        if source == target {
            return Some(Path {
                vertices: vec![source],
                distance: 0.0,
            });
        }

        let mut data = DijkstraDataVec::new(self.graph);
        let mut expanded = VertexExpandedDataVec::new(self.graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_one_to_one(
            self.graph,
            &mut data,
            &mut expanded,
            &mut queue,
            source,
            target,
        );

        log::debug!(
            "Dijkstra {} -> {} expanded {} of {} vertices",
            source,
            target,
            expanded.number_of_expanded(),
            number_of_vertices
        );

        data.get_path(target)
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    /// Distances and predecessors from `source` to every vertex.
    pub fn single_source(&self, source: Vertex) -> DijkstraDataVec {
        let mut data = DijkstraDataVec::new(self.graph);
        let mut expanded = VertexExpandedDataVec::new(self.graph);
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        if source < self.graph.number_of_vertices() {
            dijkstra_one_to_all(self.graph, &mut data, &mut expanded, &mut queue, source);
        }

        data
    }
}
