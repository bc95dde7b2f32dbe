use ahash::{HashMap, HashMapExt};
use serde::{Deserialize, Serialize};

use crate::graphs::{CountryId, Distance};

/// An ordered sequence of countries, source first and destination last.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Path {
    pub countries: Vec<CountryId>,
    pub distance: Distance,
}

/// Trait for handling data access in Dijkstra's algorithm.
pub trait DijkstraData {
    /// Retrieves the predecessor of a given country, if any.
    fn get_predecessor(&self, country: CountryId) -> Option<CountryId>;

    /// Sets the predecessor for a given country.
    fn set_predecessor(&mut self, country: CountryId, predecessor: CountryId);

    /// Retrieves the distance to a given country, `Distance::MAX` if it was
    /// not reached.
    fn get_distance(&self, country: CountryId) -> Distance;

    /// Sets the distance to a given country.
    fn set_distance(&mut self, country: CountryId, distance: Distance);

    /// Constructs the path from `source` to `destination`, if reachable.
    ///
    /// This function traces back from the destination using predecessor
    /// data. Returns `None` if the chain of predecessors does not end at
    /// `source`.
    fn get_path(&self, source: CountryId, destination: CountryId) -> Option<Path> {
        let distance = self.get_distance(destination);
        if distance == Distance::MAX {
            return None;
        }

        let mut countries = vec![destination];

        let mut predecessor = destination;
        while let Some(new_predecessor) = self.get_predecessor(predecessor) {
            predecessor = new_predecessor;
            countries.push(predecessor);
        }

        if predecessor != source {
            return None;
        }

        countries.reverse();

        Some(Path {
            countries,
            distance,
        })
    }
}

/// Distance and predecessor maps of a single search, keyed by country id.
#[derive(Clone, Debug, Default)]
pub struct DijkstraDataHashMap {
    predecessors: HashMap<CountryId, CountryId>,
    distances: HashMap<CountryId, Distance>,
}

impl DijkstraDataHashMap {
    pub fn new() -> Self {
        DijkstraDataHashMap {
            predecessors: HashMap::new(),
            distances: HashMap::new(),
        }
    }
}

impl DijkstraData for DijkstraDataHashMap {
    fn get_predecessor(&self, country: CountryId) -> Option<CountryId> {
        self.predecessors.get(&country).cloned()
    }

    fn set_predecessor(&mut self, country: CountryId, predecessor: CountryId) {
        self.predecessors.insert(country, predecessor);
    }

    fn get_distance(&self, country: CountryId) -> Distance {
        *self.distances.get(&country).unwrap_or(&Distance::MAX)
    }

    fn set_distance(&mut self, country: CountryId, distance: Distance) {
        self.distances.insert(country, distance);
    }
}
