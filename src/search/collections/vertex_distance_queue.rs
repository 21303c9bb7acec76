use std::{cmp::Reverse, collections::BinaryHeap};

use ordered_float::OrderedFloat;

use crate::graphs::{Distance, Vertex};

/// A priority queue that repeatedly hands out the vertex with the smallest
/// tentative distance.
///
/// There is no decrease key operation. A vertex can be inserted several times
/// and callers have to skip the stale entries themselves.
pub trait VertexDistanceQueue {
    /// Clears all stored data, preparing for a new search.
    fn clear(&mut self);

    /// Inserts a vertex with its associated distance into the priority queue.
    fn insert(&mut self, vertex: Vertex, distance: Distance);

    /// Removes and returns the vertex with the smallest distance from the
    /// priority queue or none if the queue is empty. Equal distances are
    /// handed out smallest vertex first.
    fn pop(&mut self) -> Option<Vertex>;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A priority queue implementation using a Binary Heap.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(OrderedFloat<Distance>, Vertex)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn clear(&mut self) {
        self.heap.clear();
    }

    fn insert(&mut self, vertex: Vertex, distance: Distance) {
        self.heap.push(Reverse((OrderedFloat(distance), vertex)));
    }

    fn pop(&mut self) -> Option<Vertex> {
        let Reverse((_distance, vertex)) = self.heap.pop()?;

        Some(vertex)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}
