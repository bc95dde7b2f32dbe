use serde::{Deserialize, Serialize};

use crate::graphs::{CountryId, Distance};

/// Represents a request for finding a shortest path in a graph.
///
/// Unlike an edge, a request may start and end at the same country. The
/// resulting path then only contains that country.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathRequest {
    source: CountryId,
    destination: CountryId,
}

impl ShortestPathRequest {
    pub fn new(source: CountryId, destination: CountryId) -> ShortestPathRequest {
        ShortestPathRequest {
            source,
            destination,
        }
    }

    pub fn source(&self) -> CountryId {
        self.source
    }

    pub fn destination(&self) -> CountryId {
        self.destination
    }
}

/// Represents a request for validating a shortest path in a graph.
///
/// This struct is used to encapsulate a shortest path request along with the
/// number of hops of a shortest path, if there exists one.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathTestCase {
    pub request: ShortestPathRequest,
    pub distance: Option<Distance>,
}
