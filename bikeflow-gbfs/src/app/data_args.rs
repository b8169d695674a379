use std::{path::PathBuf, time::Duration};

use clap::Args;
use serde::{Deserialize, Serialize};

use crate::{
    config::{BikeflowConfig, BikeflowConfigError},
    source::StationIdField,
};

/// input options shared by every operation. anything given here overrides
/// the configuration file.
#[derive(Debug, Clone, Serialize, Deserialize, Args)]
pub struct DataArgs {
    /// TOML configuration file layered over the built-in defaults
    #[arg(short, long)]
    pub config: Option<PathBuf>,
    /// GBFS station_information URL or file path
    #[arg(long)]
    pub stations: Option<String>,
    /// trip log CSV URL or file path
    #[arg(long)]
    pub trips: Option<String>,
    /// station attribute referenced by the trip log
    #[arg(long, value_enum)]
    pub station_id_field: Option<StationIdField>,
    /// HTTP request timeout, in human-readable time values: 30s, 2m...
    #[arg(long, value_parser = parse_duration)]
    pub request_timeout: Option<Duration>,
}

impl DataArgs {
    /// loads the configuration and applies the command line overrides.
    pub fn load_config(&self) -> Result<BikeflowConfig, BikeflowConfigError> {
        let mut conf = BikeflowConfig::load(self.config.as_deref())?;
        self.apply_overrides(&mut conf);
        log::debug!(
            "stations from {}, trips from {}, keyed by {}",
            conf.data.stations,
            conf.data.trips,
            conf.data.station_id_field
        );
        Ok(conf)
    }

    /// replaces configured data settings with any given on the command line.
    pub fn apply_overrides(&self, conf: &mut BikeflowConfig) {
        if let Some(stations) = &self.stations {
            conf.data.stations = stations.clone();
        }
        if let Some(trips) = &self.trips {
            conf.data.trips = trips.clone();
        }
        if let Some(field) = self.station_id_field {
            conf.data.station_id_field = field;
        }
        if let Some(timeout) = self.request_timeout {
            let millis = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
            conf.data.request_timeout_ms = millis.max(1);
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    humantime::parse_duration(s).map_err(|e| format!("Invalid duration: {e}"))
}
