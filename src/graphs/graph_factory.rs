use std::{
    fs::File,
    io::{BufReader, BufWriter, Read, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use super::{
    adjacency_graph::AdjacencyGraph,
    country::{Connection, Country},
};

/// The flat records a country graph is built from, as they come out of
/// storage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryDataset {
    pub countries: Vec<Country>,
    pub connections: Vec<Connection>,
}

impl CountryDataset {
    pub fn new(countries: Vec<Country>, connections: Vec<Connection>) -> CountryDataset {
        CountryDataset {
            countries,
            connections,
        }
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Country> {
        self.countries.iter().find(|country| country.name() == name)
    }

    pub fn graph(&self) -> AdjacencyGraph {
        AdjacencyGraph::from_records(&self.countries, &self.connections)
    }
}

#[derive(Error, Debug)]
pub enum DatasetError {
    #[error("unsupported dataset extension: {0:?}")]
    UnsupportedExtension(Option<String>),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed dataset: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Clone)]
pub struct GraphFactory {}

impl GraphFactory {
    pub fn from_file(path: &Path) -> Result<AdjacencyGraph, DatasetError> {
        Ok(Self::dataset_from_file(path)?.graph())
    }

    pub fn dataset_from_file(path: &Path) -> Result<CountryDataset, DatasetError> {
        let extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .map(str::to_string);
        match extension.as_deref() {
            Some("json") => {
                let reader = BufReader::new(File::open(path)?);
                let dataset = Self::dataset_from_reader(reader)?;
                debug!(
                    path = %path.display(),
                    countries = dataset.countries.len(),
                    connections = dataset.connections.len(),
                    "read dataset"
                );
                Ok(dataset)
            }
            _ => Err(DatasetError::UnsupportedExtension(extension)),
        }
    }

    pub fn dataset_from_reader<R: Read>(reader: R) -> Result<CountryDataset, DatasetError> {
        Ok(serde_json::from_reader(reader)?)
    }

    pub fn write_dataset(path: &Path, dataset: &CountryDataset) -> Result<(), DatasetError> {
        let mut writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer(&mut writer, dataset)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use super::{DatasetError, GraphFactory};
    use crate::graphs::Graph;

    #[test]
    fn reads_dataset_from_json() {
        let json = r#"{
            "countries": [
                {"id": 1, "name": "USA"},
                {"id": 2, "name": "CAN"},
                {"id": 3, "name": "MEX"}
            ],
            "connections": [
                {"country_one_id": 1, "country_two_id": 2},
                {"country_one_id": 3, "country_two_id": 1}
            ]
        }"#;

        let dataset = GraphFactory::dataset_from_reader(json.as_bytes()).unwrap();
        assert_eq!(dataset.find_by_name("MEX").map(|country| country.id()), Some(3));

        let graph = dataset.graph();
        assert_eq!(graph.number_of_countries(), 3);
        assert_eq!(graph.neighbours(1).len(), 2);
    }

    #[test]
    fn rejects_malformed_json() {
        let result = GraphFactory::dataset_from_reader(r#"{"countries": 3}"#.as_bytes());
        assert!(matches!(result, Err(DatasetError::Json(_))));
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = GraphFactory::dataset_from_file(Path::new("countries.fmi"));
        assert!(matches!(
            result,
            Err(DatasetError::UnsupportedExtension(Some(extension))) if extension == "fmi"
        ));
    }
}
