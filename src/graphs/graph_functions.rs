use std::collections::VecDeque;

use ahash::{HashMap, HashMapExt};
use indicatif::ParallelProgressIterator;
use itertools::Itertools;
use rand::prelude::*;
use rayon::prelude::*;

use super::{
    country::{Connection, Country},
    graph_factory::CountryDataset,
    CountryId, Distance, Graph, CONNECTION_DISTANCE,
};
use crate::search::{
    collections::dijkstra_data::Path,
    path::{ShortestPathRequest, ShortestPathTestCase},
};

/// Check if a path is correct for a given test case.
pub fn validate_path(
    graph: &dyn Graph,
    validation: &ShortestPathTestCase,
    path: &Option<Path>,
) -> Result<(), String> {
    let Some(path) = path else {
        if validation.distance.is_some() {
            return Err("no path is found but there should be one".to_string());
        }
        return Ok(());
    };

    let Some(distance) = validation.distance else {
        return Err("a path was found where there should be none".to_string());
    };

    if path.distance != distance {
        return Err("wrong path distance".to_string());
    }

    // Ensure first and last country of path are source and destination of request.
    if path.countries.first() != Some(&validation.request.source()) {
        return Err("first country of path is not source of request".to_string());
    }
    if path.countries.last() != Some(&validation.request.destination()) {
        return Err("last country of path is not destination of request".to_string());
    }

    if !path.countries.iter().all_unique() {
        return Err("path visits a country twice".to_string());
    }

    // check if consecutive path countries are connected.
    let mut true_distance = 0;
    for (&tail, &head) in path.countries.iter().tuple_windows() {
        match graph.edge_distance(tail, head) {
            Some(edge_distance) => true_distance += edge_distance,
            None => return Err(format!("no connection between {} and {} found", tail, head)),
        }
    }

    if true_distance != distance {
        return Err("wrong path distance".to_string());
    }

    Ok(())
}

/// Hop distances from `source` to every reachable country, by breadth first
/// search. Serves as a reference for the Dijkstra based searches.
pub fn breadth_first_distances(graph: &dyn Graph, source: CountryId) -> HashMap<CountryId, Distance> {
    let mut distances = HashMap::new();
    let mut queue = VecDeque::new();

    distances.insert(source, 0);
    queue.push_back(source);

    while let Some(tail) = queue.pop_front() {
        let distance_tail = distances[&tail];
        for head in graph.neighbours(tail) {
            if !distances.contains_key(&head) {
                distances.insert(head, distance_tail + CONNECTION_DISTANCE);
                queue.push_back(head);
            }
        }
    }

    distances
}

/// Checks that every connection is stored in both directions.
pub fn is_bidirectional(graph: &dyn Graph) -> bool {
    graph.countries().all(|country| {
        graph
            .neighbours(country.id())
            .all(|head| graph.edge_distance(head, country.id()).is_some())
    })
}

/// Creates `number_of_countries` countries with ids starting at 1 and up to
/// `number_of_connections` random connections. Draws that would connect a
/// country to itself are dropped, duplicates are kept.
pub fn random_dataset(
    rng: &mut impl Rng,
    number_of_countries: u32,
    number_of_connections: u32,
) -> CountryDataset {
    let countries = (1..=number_of_countries as CountryId)
        .map(|id| Country::new(id, format!("Country {}", id)))
        .collect_vec();

    if number_of_countries == 0 {
        return CountryDataset::new(countries, Vec::new());
    }

    let connections = (0..number_of_connections)
        .filter_map(|_| {
            let one = rng.gen_range(1..=number_of_countries as CountryId);
            let two = rng.gen_range(1..=number_of_countries as CountryId);
            Connection::new(one, two)
        })
        .collect_vec();

    CountryDataset::new(countries, connections)
}

pub fn generate_random_pair_test_cases(
    graph: &dyn Graph,
    number_of_testcases: u32,
) -> Vec<ShortestPathTestCase> {
    let ids = graph.countries().map(|country| country.id()).collect_vec();
    if ids.len() < 2 {
        return Vec::new();
    }

    (0..number_of_testcases)
        .into_par_iter()
        .progress_count(number_of_testcases as u64)
        .map_init(
            rand::thread_rng, // get the thread-local RNG
            |rng, _| {
                // guarantee that source != destination.
                let source = rng.gen_range(0..ids.len());
                let mut destination = rng.gen_range(0..ids.len() - 1);
                if destination >= source {
                    destination += 1;
                }

                let request = ShortestPathRequest::new(ids[source], ids[destination]);
                let distance = breadth_first_distances(graph, request.source())
                    .get(&request.destination())
                    .copied();

                ShortestPathTestCase { request, distance }
            },
        )
        .collect()
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::{breadth_first_distances, random_dataset, validate_path};
    use crate::{
        graphs::{
            adjacency_graph::AdjacencyGraph,
            country::{Connection, Country},
            Graph,
        },
        search::{
            collections::dijkstra_data::Path,
            path::{ShortestPathRequest, ShortestPathTestCase},
        },
    };

    fn line_graph() -> AdjacencyGraph {
        let countries = (1..=4).map(|id| Country::new(id, id.to_string())).collect::<Vec<_>>();
        let connections = vec![
            Connection::new(1, 2).unwrap(),
            Connection::new(2, 3).unwrap(),
            Connection::new(3, 4).unwrap(),
        ];
        AdjacencyGraph::from_records(&countries, &connections)
    }

    fn test_case(source: u64, destination: u64, distance: Option<u32>) -> ShortestPathTestCase {
        ShortestPathTestCase {
            request: ShortestPathRequest::new(source, destination),
            distance,
        }
    }

    #[test]
    fn bfs_distances_on_line() {
        let distances = breadth_first_distances(&line_graph(), 1);
        assert_eq!(distances[&1], 0);
        assert_eq!(distances[&4], 3);
    }

    #[test]
    fn accepts_valid_path() {
        let path = Some(Path {
            countries: vec![1, 2, 3],
            distance: 2,
        });
        assert_eq!(validate_path(&line_graph(), &test_case(1, 3, Some(2)), &path), Ok(()));
        assert_eq!(validate_path(&line_graph(), &test_case(1, 3, None), &None), Ok(()));
    }

    #[test]
    fn rejects_broken_paths() {
        let graph = line_graph();

        let skipping = Some(Path {
            countries: vec![1, 3],
            distance: 1,
        });
        assert!(validate_path(&graph, &test_case(1, 3, Some(1)), &skipping).is_err());

        let repeating = Some(Path {
            countries: vec![1, 2, 1, 2, 3],
            distance: 4,
        });
        assert!(validate_path(&graph, &test_case(1, 3, Some(4)), &repeating).is_err());

        let wrong_end = Some(Path {
            countries: vec![1, 2],
            distance: 1,
        });
        assert!(validate_path(&graph, &test_case(1, 3, Some(1)), &wrong_end).is_err());

        assert!(validate_path(&graph, &test_case(1, 3, Some(2)), &None).is_err());
    }

    #[test]
    fn random_dataset_has_no_self_loops() {
        let mut rng = StdRng::seed_from_u64(7);
        let dataset = random_dataset(&mut rng, 20, 50);

        assert_eq!(dataset.countries.len(), 20);
        assert!(dataset.connections.len() <= 50);
        assert!(dataset.connections.iter().all(|connection| !connection.is_self_loop()));
        assert_eq!(dataset.graph().number_of_countries(), 20);
    }
}
