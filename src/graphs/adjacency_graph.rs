use ahash::{HashMap, HashMapExt};
use tracing::debug;

use super::{
    country::{Connection, Country},
    CountryId, Distance, Graph, CONNECTION_DISTANCE,
};

/// Countries together with their derived, symmetric connection lists.
///
/// The graph is built once from flat records and never invalidated. A new set
/// of records means a new graph.
#[derive(Clone, Debug, Default)]
pub struct AdjacencyGraph {
    countries: Vec<Country>,
    // connections[i] belongs to countries[i] and is sorted by id
    connections: Vec<Vec<CountryId>>,
    index_of_id: HashMap<CountryId, usize>,
    index_of_name: HashMap<String, usize>,
}

impl AdjacencyGraph {
    /// Builds the adjacency structure from country and connection records.
    ///
    /// Connections referencing an id that is not among `countries` are
    /// ignored, as are self loops. Duplicate records for the same pair, in
    /// either orientation, result in a single connection.
    pub fn from_records(countries: &[Country], connections: &[Connection]) -> AdjacencyGraph {
        let mut graph = AdjacencyGraph {
            countries: Vec::with_capacity(countries.len()),
            connections: Vec::with_capacity(countries.len()),
            index_of_id: HashMap::with_capacity(countries.len()),
            index_of_name: HashMap::with_capacity(countries.len()),
        };

        for country in countries {
            graph.add_country(country.clone());
        }

        let ignored = connections
            .iter()
            .filter(|connection| !graph.add_connection(connection))
            .count();

        debug!(
            countries = graph.number_of_countries(),
            connections = graph.number_of_connections(),
            ignored,
            "built country graph"
        );

        graph
    }

    /// Adds a country without connections. Returns false if a country with the
    /// same id already exists, in which case the graph is left untouched.
    pub fn add_country(&mut self, country: Country) -> bool {
        if self.index_of_id.contains_key(&country.id()) {
            return false;
        }

        let index = self.countries.len();
        self.index_of_id.insert(country.id(), index);
        self.index_of_name
            .entry(country.name().to_string())
            .or_insert(index);
        self.countries.push(country);
        self.connections.push(Vec::new());

        true
    }

    /// Connects both endpoints of `connection` with each other. Returns false
    /// if the connection was skipped because it is a self loop or one of its
    /// endpoints is unknown. Adding an existing connection again is a no-op.
    pub fn add_connection(&mut self, connection: &Connection) -> bool {
        if connection.is_self_loop() {
            return false;
        }

        let (Some(&one), Some(&two)) = (
            self.index_of_id.get(&connection.country_one_id()),
            self.index_of_id.get(&connection.country_two_id()),
        ) else {
            return false;
        };

        insert_sorted(&mut self.connections[one], connection.country_two_id());
        insert_sorted(&mut self.connections[two], connection.country_one_id());

        true
    }

    fn connections_of(&self, id: CountryId) -> &[CountryId] {
        self.index_of_id
            .get(&id)
            .map_or(&[][..], |&index| self.connections[index].as_slice())
    }
}

fn insert_sorted(neighbours: &mut Vec<CountryId>, neighbour: CountryId) {
    if let Err(index) = neighbours.binary_search(&neighbour) {
        neighbours.insert(index, neighbour);
    }
}

impl Graph for AdjacencyGraph {
    fn number_of_countries(&self) -> u32 {
        self.countries.len() as u32
    }

    fn countries(&self) -> Box<dyn ExactSizeIterator<Item = &Country> + Send + '_> {
        Box::new(self.countries.iter())
    }

    fn country(&self, id: CountryId) -> Option<&Country> {
        let index = *self.index_of_id.get(&id)?;
        Some(&self.countries[index])
    }

    fn country_by_name(&self, name: &str) -> Option<&Country> {
        let index = *self.index_of_name.get(name)?;
        Some(&self.countries[index])
    }

    fn neighbours(&self, id: CountryId) -> Box<dyn ExactSizeIterator<Item = CountryId> + Send + '_> {
        Box::new(self.connections_of(id).iter().copied())
    }

    fn edge_distance(&self, tail: CountryId, head: CountryId) -> Option<Distance> {
        self.connections_of(tail)
            .binary_search(&head)
            .ok()
            .map(|_| CONNECTION_DISTANCE)
    }
}
