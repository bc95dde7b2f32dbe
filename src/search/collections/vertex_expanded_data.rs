use ahash::{HashSet, HashSetExt};

use crate::graphs::CountryId;

pub trait VertexExpandedData {
    /// Marks `country` as expanded and returns whether it already was.
    fn expand(&mut self, country: CountryId) -> bool;

    fn is_expanded(&self, country: CountryId) -> bool;

    fn number_of_expanded(&self) -> usize;
}

#[derive(Default)]
pub struct VertexExpandedDataHashSet {
    expanded: HashSet<CountryId>,
}

impl VertexExpandedDataHashSet {
    pub fn new() -> Self {
        VertexExpandedDataHashSet {
            expanded: HashSet::new(),
        }
    }
}

impl VertexExpandedData for VertexExpandedDataHashSet {
    fn expand(&mut self, country: CountryId) -> bool {
        !self.expanded.insert(country)
    }

    fn is_expanded(&self, country: CountryId) -> bool {
        self.expanded.contains(&country)
    }

    fn number_of_expanded(&self) -> usize {
        self.expanded.len()
    }
}
