use collections::dijkstra_data::Path;
use path::ShortestPathRequest;

use crate::graphs::Distance;

pub mod collections;
pub mod dijkstra;
pub mod path;

pub trait PathFinding: Send + Sync {
    fn shortest_path(&self, request: &ShortestPathRequest) -> Option<Path>;

    fn shortest_path_distance(&self, request: &ShortestPathRequest) -> Option<Distance> {
        self.shortest_path(request).map(|path| path.distance)
    }
}
