use std::path::PathBuf;

use thiserror::Error;

use crate::graphs::Distance;

/// Raised while a road graph is being built. Any of these aborts construction.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphError {
    #[error("city \"{0}\" is already part of the graph")]
    DuplicateNode(String),

    #[error("city \"{0}\" is not part of the graph")]
    UnknownNode(String),

    #[error("road {from} -> {to} has invalid distance {distance}, distances must be non-negative and at most {max}", max = crate::graphs::MAX_ROAD_DISTANCE)]
    InvalidWeight {
        from: String,
        to: String,
        distance: Distance,
    },
}

/// Raised by a shortest path query.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("city \"{0}\" not found")]
    UnknownCity(String),

    #[error("no route found between {from} and {to}")]
    NoRoute { from: String, to: String },
}

/// Raised while loading or storing a road network data set.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("could not access network file: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not parse network json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("could not (de)serialize network bincode: {0}")]
    Bincode(#[from] bincode::Error),

    #[error("unsupported network file {0:?}, expected .json or .bincode")]
    UnsupportedFormat(PathBuf),

    #[error("invalid road network: {0}")]
    Graph(#[from] GraphError),
}
