use self::country::Country;

pub mod adjacency_graph;
pub mod country;
pub mod graph_factory;
pub mod graph_functions;

pub type CountryId = u64;
pub type Distance = u32;

/// Every connection between two countries has this length.
pub const CONNECTION_DISTANCE: Distance = 1;

pub trait Graph: Send + Sync {
    fn number_of_countries(&self) -> u32;

    fn number_of_connections(&self) -> u32 {
        let endpoints = self
            .countries()
            .map(|country| self.neighbours(country.id()).len() as u32)
            .sum::<u32>();

        // every connection is stored at both of its endpoints
        endpoints / 2
    }

    fn countries(&self) -> Box<dyn ExactSizeIterator<Item = &Country> + Send + '_>;

    fn country(&self, id: CountryId) -> Option<&Country>;

    fn country_by_name(&self, name: &str) -> Option<&Country>;

    /// Returns the countries directly connected to `id`. Unknown countries have
    /// no neighbours.
    fn neighbours(&self, id: CountryId) -> Box<dyn ExactSizeIterator<Item = CountryId> + Send + '_>;

    /// Returns the length of the connection between `tail` and `head`, if they
    /// are directly connected.
    fn edge_distance(&self, tail: CountryId, head: CountryId) -> Option<Distance>;
}
