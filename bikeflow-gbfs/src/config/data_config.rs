use crate::source::{DataLocation, StationIdField};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// where the station list and trip log are read from.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DataConfig {
    /// GBFS station_information document, URL or file path
    pub stations: String,
    /// trip log CSV, URL or file path
    pub trips: String,
    /// station field that trip log ids refer to
    pub station_id_field: StationIdField,
    /// HTTP request timeout in milliseconds
    pub request_timeout_ms: u64,
}

impl DataConfig {
    pub fn stations_location(&self) -> DataLocation {
        DataLocation::from(self.stations.as_str())
    }

    pub fn trips_location(&self) -> DataLocation {
        DataLocation::from(self.trips.as_str())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }
}
