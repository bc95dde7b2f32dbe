use std::{cmp::Reverse, collections::BinaryHeap};

use crate::graphs::{CountryId, Distance};

/// A trait for a priority queue that manages countries and their distances.
/// This trait is useful for graph algorithms that need to repeatedly retrieve
/// the country with the smallest distance (such as Dijkstra's algorithm).
///
/// The implementing structs might or might not use a decrease key operation.
pub trait VertexDistanceQueue {
    /// Inserts a country with its associated distance into the priority queue.
    fn insert(&mut self, country: CountryId, distance: Distance);

    /// Removes and returns the country with the smallest distance from the
    /// priority queue or none if the queue is empty. Countries with equal
    /// distance are returned lowest id first.
    fn pop(&mut self) -> Option<CountryId>;
}

/// A priority queue implementation using a Binary Heap.
///
/// Has no decrease key, so a country may be returned more than once. Callers
/// skip countries they already expanded.
#[derive(Default)]
pub struct VertexDistanceQueueBinaryHeap {
    heap: BinaryHeap<Reverse<(Distance, CountryId)>>,
}

impl VertexDistanceQueueBinaryHeap {
    pub fn new() -> Self {
        VertexDistanceQueueBinaryHeap {
            heap: BinaryHeap::new(),
        }
    }
}

impl VertexDistanceQueue for VertexDistanceQueueBinaryHeap {
    fn insert(&mut self, country: CountryId, distance: Distance) {
        self.heap.push(Reverse((distance, country)));
    }

    fn pop(&mut self) -> Option<CountryId> {
        let Reverse((_distance, country)) = self.heap.pop()?;

        Some(country)
    }
}

#[cfg(test)]
mod tests {
    use super::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap};

    #[test]
    fn pops_smallest_distance_then_lowest_id() {
        let mut queue = VertexDistanceQueueBinaryHeap::new();
        queue.insert(9, 2);
        queue.insert(7, 1);
        queue.insert(3, 1);
        queue.insert(1, 3);

        assert_eq!(queue.pop(), Some(3));
        assert_eq!(queue.pop(), Some(7));
        assert_eq!(queue.pop(), Some(9));
        assert_eq!(queue.pop(), Some(1));
        assert_eq!(queue.pop(), None);
    }
}
