use geo::Point;
use serde::{Deserialize, Serialize};

/// a docking station as published by a bike-share system.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Station {
    /// key matched against the station ids found in the trip log.
    pub id: String,
    /// station location, x = longitude, y = latitude.
    pub position: Point<f64>,
    /// human-readable station name, if published.
    pub name: Option<String>,
    /// number of docks, if published.
    pub capacity: Option<u32>,
}

impl Station {
    pub fn new(id: impl Into<String>, lon: f64, lat: f64) -> Station {
        Station {
            id: id.into(),
            position: Point::new(lon, lat),
            name: None,
            capacity: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Station {
        self.name = Some(name.into());
        self
    }

    pub fn with_capacity(mut self, capacity: u32) -> Station {
        self.capacity = Some(capacity);
        self
    }

    pub fn lon(&self) -> f64 {
        self.position.x()
    }

    pub fn lat(&self) -> f64 {
        self.position.y()
    }
}
