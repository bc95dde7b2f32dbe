//! Name level entry point for path queries.
//!
//! A request names its destination; the origin is fixed by [`RouterConfig`].
//! The graph is rebuilt from the supplied records on every call, so nothing
//! is shared between requests.

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, info};

use crate::{
    graphs::{adjacency_graph::AdjacencyGraph, graph_factory::CountryDataset, Graph},
    search::{
        collections::dijkstra_data::Path, dijkstra::Dijkstra, path::ShortestPathRequest,
        PathFinding,
    },
};

pub const DEFAULT_ORIGIN: &str = "USA";

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouterConfig {
    /// Name of the country every path starts at.
    pub origin: String,
}

impl Default for RouterConfig {
    fn default() -> Self {
        RouterConfig {
            origin: DEFAULT_ORIGIN.to_string(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("no country of name {0}")]
    UnknownDestination(String),

    #[error("origin country {0} is not part of the dataset")]
    UnknownOrigin(String),

    #[error("no valid path from {origin} to destination {destination}")]
    NoPath { origin: String, destination: String },
}

#[derive(Clone, Debug, Default)]
pub struct CountryRouter {
    config: RouterConfig,
}

impl CountryRouter {
    pub fn new(config: RouterConfig) -> CountryRouter {
        CountryRouter { config }
    }

    pub fn origin(&self) -> &str {
        &self.config.origin
    }

    /// Returns the names of the countries on a shortest path from the origin to
    /// `destination`, origin first.
    pub fn route(&self, dataset: &CountryDataset, destination: &str) -> Result<Vec<String>, RouteError> {
        let (graph, path) = self.find(dataset, destination)?;

        let names = path
            .countries
            .iter()
            .filter_map(|&id| graph.country(id))
            .map(|country| country.name().to_string())
            .collect();

        Ok(names)
    }

    /// Like [`CountryRouter::route`], but returns country ids.
    pub fn route_ids(&self, dataset: &CountryDataset, destination: &str) -> Result<Path, RouteError> {
        let (_, path) = self.find(dataset, destination)?;
        Ok(path)
    }

    fn find(
        &self,
        dataset: &CountryDataset,
        destination: &str,
    ) -> Result<(AdjacencyGraph, Path), RouteError> {
        // Unknown destinations are rejected before any graph is built.
        if dataset.find_by_name(destination).is_none() {
            return Err(RouteError::UnknownDestination(destination.to_string()));
        }
        if dataset.find_by_name(self.origin()).is_none() {
            return Err(RouteError::UnknownOrigin(self.origin().to_string()));
        }

        // Ids and names both come from the graph. A record whose id is taken
        // by an earlier country is not part of it.
        let graph = dataset.graph();
        let destination_id = graph
            .country_by_name(destination)
            .ok_or_else(|| RouteError::UnknownDestination(destination.to_string()))?
            .id();
        let origin_id = graph
            .country_by_name(self.origin())
            .ok_or_else(|| RouteError::UnknownOrigin(self.origin().to_string()))?
            .id();

        let request = ShortestPathRequest::new(origin_id, destination_id);
        let path = Dijkstra::new(&graph).shortest_path(&request);

        match path {
            Some(path) => {
                info!(
                    origin = self.origin(),
                    destination,
                    hops = path.distance,
                    "found path"
                );
                Ok((graph, path))
            }
            None => {
                debug!(origin = self.origin(), destination, "no path");
                Err(RouteError::NoPath {
                    origin: self.origin().to_string(),
                    destination: destination.to_string(),
                })
            }
        }
    }
}
