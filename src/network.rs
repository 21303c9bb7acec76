use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use itertools::Itertools;
use serde::{Deserialize, Serialize};

use crate::{
    error::NetworkError,
    graphs::{
        build_graph,
        city::{City, Road},
        road_graph::RoadGraph,
    },
};

const NIGERIA_JSON: &str = include_str!("../data/nigerian_cities.json");

/// A road network data set as it is stored on disk.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct RoadNetwork {
    pub cities: Vec<City>,
    pub roads: Vec<Road>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkStatistics {
    pub total_cities: usize,
    pub state_capitals: usize,
    pub major_cities: usize,
    pub total_states: usize,
    pub states: Vec<String>,
}

impl RoadNetwork {
    /// Major Nigerian cities and the highways connecting them.
    pub fn nigeria() -> Result<RoadNetwork, NetworkError> {
        Ok(serde_json::from_str(NIGERIA_JSON)?)
    }

    /// Reads a `.json` or `.bincode` network file.
    pub fn from_file(path: &Path) -> Result<RoadNetwork, NetworkError> {
        let extension = path.extension().and_then(|extension| extension.to_str());

        let network = match extension {
            Some("json") => {
                let reader = BufReader::new(File::open(path)?);
                serde_json::from_reader(reader)?
            }
            Some("bincode") => {
                let reader = BufReader::new(File::open(path)?);
                bincode::deserialize_from(reader)?
            }
            _ => return Err(NetworkError::UnsupportedFormat(path.to_path_buf())),
        };

        log::info!("Read road network from {}", path.display());
        Ok(network)
    }

    /// Loads `path` if given, the bundled Nigerian network otherwise.
    pub fn from_optional_file(path: Option<&Path>) -> Result<RoadNetwork, NetworkError> {
        match path {
            Some(path) => RoadNetwork::from_file(path),
            None => RoadNetwork::nigeria(),
        }
    }

    pub fn write_bincode(&self, path: &Path) -> Result<(), NetworkError> {
        let writer = BufWriter::new(File::create(path)?);
        bincode::serialize_into(writer, self)?;
        Ok(())
    }

    pub fn write_json(&self, path: &Path) -> Result<(), NetworkError> {
        let writer = BufWriter::new(File::create(path)?);
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn to_graph(&self) -> Result<RoadGraph, NetworkError> {
        Ok(build_graph(&self.cities, &self.roads)?)
    }

    pub fn statistics(&self) -> NetworkStatistics {
        let state_capitals = self.cities.iter().filter(|city| city.is_capital).count();
        let states: Vec<String> = self
            .cities
            .iter()
            .filter_map(|city| city.state.clone())
            .sorted()
            .dedup()
            .collect();

        NetworkStatistics {
            total_cities: self.cities.len(),
            state_capitals,
            major_cities: self.cities.len() - state_capitals,
            total_states: states.len(),
            states,
        }
    }
}

impl RoadGraph {
    pub fn from_network(network: &RoadNetwork) -> Result<RoadGraph, NetworkError> {
        network.to_graph()
    }
}
