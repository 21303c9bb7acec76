use serde::{Deserialize, Serialize};

use super::Distance;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

/// A city in the road network. Only `name` matters for routing, everything
/// else is carried along for display.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub name: String,
    pub state: Option<String>,
    pub location: Option<Coordinate>,
    pub population: Option<u64>,
    #[serde(default)]
    pub is_capital: bool,
}

impl City {
    /// A city without any metadata.
    pub fn named(name: impl Into<String>) -> City {
        City {
            name: name.into(),
            state: None,
            location: None,
            population: None,
            is_capital: false,
        }
    }
}

/// A road between two cities as found in a data set.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Road {
    pub from: String,
    pub to: String,
    pub distance_km: Distance,
    #[serde(default = "bidirectional_default")]
    pub bidirectional: bool,
}

fn bidirectional_default() -> bool {
    true
}

impl Road {
    pub fn new(from: impl Into<String>, to: impl Into<String>, distance_km: Distance) -> Road {
        Road {
            from: from.into(),
            to: to.into(),
            distance_km,
            bidirectional: true,
        }
    }

    pub fn one_way(from: impl Into<String>, to: impl Into<String>, distance_km: Distance) -> Road {
        Road {
            bidirectional: false,
            ..Road::new(from, to, distance_km)
        }
    }
}
