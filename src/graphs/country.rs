use serde::{Deserialize, Serialize};

use super::CountryId;

/// A node of the country graph. Which countries it borders is not stored here
/// but derived from the connection records when a graph is built.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Country {
    id: CountryId,
    name: String,
}

impl Country {
    pub fn new(id: CountryId, name: impl Into<String>) -> Country {
        Country {
            id,
            name: name.into(),
        }
    }

    /// Creates a country together with the connection records linking it to
    /// each of `neighbours`. Neighbours equal to `id` are skipped.
    pub fn with_connections(
        id: CountryId,
        name: impl Into<String>,
        neighbours: &[CountryId],
    ) -> (Country, Vec<Connection>) {
        let connections = neighbours
            .iter()
            .filter_map(|&neighbour| Connection::new(id, neighbour))
            .collect();

        (Country::new(id, name), connections)
    }

    pub fn id(&self) -> CountryId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// An undirected connection between two countries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Connection {
    country_one_id: CountryId,
    country_two_id: CountryId,
}

impl Connection {
    pub fn new(country_one_id: CountryId, country_two_id: CountryId) -> Option<Connection> {
        if country_one_id == country_two_id {
            return None;
        }

        Some(Connection {
            country_one_id,
            country_two_id,
        })
    }

    pub fn country_one_id(&self) -> CountryId {
        self.country_one_id
    }

    pub fn country_two_id(&self) -> CountryId {
        self.country_two_id
    }

    /// Records can arrive through deserialization without passing `new`.
    pub fn is_self_loop(&self) -> bool {
        self.country_one_id == self.country_two_id
    }
}
