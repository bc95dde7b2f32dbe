use tracing::trace;

use super::{
    collections::{
        dijkstra_data::{DijkstraData, DijkstraDataHashMap, Path},
        vertex_distance_queue::{VertexDistanceQueue, VertexDistanceQueueBinaryHeap},
        vertex_expanded_data::{VertexExpandedData, VertexExpandedDataHashSet},
    },
    path::ShortestPathRequest,
    PathFinding,
};
use crate::graphs::{CountryId, Graph, CONNECTION_DISTANCE};

/// Labels every country reachable from `source` with its distance and
/// predecessor.
pub fn dijkstra_single_source(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: CountryId,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.expand(tail) {
            continue;
        }

        relax_connections(graph, data, queue, tail);
    }
}

/// Like [`dijkstra_single_source`], but stops as soon as `destination` is the
/// closest unexpanded country. Its distance and predecessor are final by then.
pub fn dijkstra_single_pair(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    expanded: &mut dyn VertexExpandedData,
    queue: &mut dyn VertexDistanceQueue,
    source: CountryId,
    destination: CountryId,
) {
    data.set_distance(source, 0);
    queue.insert(source, 0);

    while let Some(tail) = queue.pop() {
        if expanded.is_expanded(tail) {
            continue;
        }
        if tail == destination {
            break;
        }
        expanded.expand(tail);

        relax_connections(graph, data, queue, tail);
    }
}

fn relax_connections(
    graph: &dyn Graph,
    data: &mut dyn DijkstraData,
    queue: &mut dyn VertexDistanceQueue,
    tail: CountryId,
) {
    let distance_tail = data.get_distance(tail);

    for head in graph.neighbours(tail) {
        let current_distance_head = data.get_distance(head);
        let alternative_distance_head = distance_tail + CONNECTION_DISTANCE;
        if alternative_distance_head < current_distance_head {
            data.set_distance(head, alternative_distance_head);
            data.set_predecessor(head, tail);
            queue.insert(head, alternative_distance_head);
        }
    }
}

/// Shortest paths by hop count on any [`Graph`]. All search state lives in
/// the data returned by a single call and is dropped with it.
#[derive(Clone)]
pub struct Dijkstra<'a> {
    graph: &'a dyn Graph,
}

impl<'a> PathFinding for Dijkstra<'a> {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Option<Path> {
        let data = self.get_data(request.source(), request.destination());
        data.get_path(request.source(), request.destination())
    }
}

impl<'a> Dijkstra<'a> {
    pub fn new(graph: &'a dyn Graph) -> Dijkstra<'a> {
        Dijkstra { graph }
    }

    pub fn get_data(&self, source: CountryId, destination: CountryId) -> DijkstraDataHashMap {
        let mut data = DijkstraDataHashMap::new();
        let mut expanded = VertexExpandedDataHashSet::new();
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_single_pair(
            self.graph,
            &mut data,
            &mut expanded,
            &mut queue,
            source,
            destination,
        );
        trace!(
            source,
            destination,
            expanded = expanded.number_of_expanded(),
            "single pair search done"
        );

        data
    }

    pub fn single_source(&self, source: CountryId) -> DijkstraDataHashMap {
        let mut data = DijkstraDataHashMap::new();
        let mut expanded = VertexExpandedDataHashSet::new();
        let mut queue = VertexDistanceQueueBinaryHeap::new();

        dijkstra_single_source(self.graph, &mut data, &mut expanded, &mut queue, source);
        trace!(
            source,
            expanded = expanded.number_of_expanded(),
            "single source search done"
        );

        data
    }
}
