use std::path::Path;

use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use super::{BikeflowConfigError, DataConfig, MapConfig};

const DEFAULT_CONFIG: &str = include_str!("bikeflow-config.toml");

/// full bikeflow configuration. built from the embedded defaults, then an
/// optional user TOML file, then `BIKEFLOW__`-prefixed environment variables.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BikeflowConfig {
    pub data: DataConfig,
    pub scale: ScaleConfig,
    pub map: MapConfig,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy)]
pub struct ScaleConfig {
    /// radius in pixels of the busiest station's circle
    pub max_radius: f64,
}

impl BikeflowConfig {
    pub const ENV_PREFIX: &str = "BIKEFLOW";

    /// loads the configuration, layering `user_file` over the defaults if given.
    pub fn load(user_file: Option<&Path>) -> Result<BikeflowConfig, BikeflowConfigError> {
        let mut builder = Self::defaults_builder();
        if let Some(path) = user_file {
            log::info!("reading bikeflow configuration from {path:?}");
            builder = builder.add_source(File::from(path));
        }
        let builder = builder.add_source(
            Environment::with_prefix(Self::ENV_PREFIX)
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        );
        Self::build(builder)
    }

    /// loads the defaults with a TOML document layered on top.
    pub fn from_toml_str(toml: &str) -> Result<BikeflowConfig, BikeflowConfigError> {
        let builder = Self::defaults_builder().add_source(File::from_str(toml, FileFormat::Toml));
        Self::build(builder)
    }

    fn defaults_builder() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<BikeflowConfig, BikeflowConfigError> {
        let conf: BikeflowConfig = builder.build()?.try_deserialize()?;
        conf.validate()?;
        Ok(conf)
    }

    fn validate(&self) -> Result<(), BikeflowConfigError> {
        if !(self.scale.max_radius.is_finite() && self.scale.max_radius >= 0.0) {
            return Err(BikeflowConfigError::InvalidValue {
                key: String::from("scale.max_radius"),
                message: format!("must be a non-negative number, found {}", self.scale.max_radius),
            });
        }
        if self.data.request_timeout_ms == 0 {
            return Err(BikeflowConfigError::InvalidValue {
                key: String::from("data.request_timeout_ms"),
                message: String::from("must be greater than zero"),
            });
        }
        if self.map.min_zoom > self.map.max_zoom {
            return Err(BikeflowConfigError::InvalidValue {
                key: String::from("map.min_zoom"),
                message: format!(
                    "min_zoom {} exceeds max_zoom {}",
                    self.map.min_zoom, self.map.max_zoom
                ),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::BikeflowConfig;
    use crate::source::{DataLocation, StationIdField};
    use std::time::Duration;

    #[test]
    fn test_defaults() {
        let conf = BikeflowConfig::from_toml_str("").expect("defaults should load");
        assert_eq!(conf.data.station_id_field, StationIdField::ShortName);
        assert!(matches!(conf.data.trips_location(), DataLocation::Url(_)));
        assert_eq!(conf.data.request_timeout(), Duration::from_secs(60));
        assert_eq!(conf.scale.max_radius, 25.0);
        assert_eq!(conf.map.center.lon, -71.09415);
        assert_eq!(conf.map.center.lat, 42.36027);
        assert_eq!(conf.map.zoom, 12.0);
        assert_eq!(conf.map.bike_lanes.color, "#32D400");
        assert_eq!(conf.map.circles.fill, "steelblue");
        assert_eq!(conf.map.circles.opacity, 0.8);
    }

    #[test]
    fn test_user_overrides() {
        let user = r#"
            [data]
            stations = "data/stations.json"
            station_id_field = "station_id"

            [scale]
            max_radius = 40.0
        "#;
        let conf = BikeflowConfig::from_toml_str(user).expect("overrides should load");
        assert_eq!(conf.data.station_id_field, StationIdField::StationId);
        assert!(matches!(conf.data.stations_location(), DataLocation::File(_)));
        assert!(matches!(conf.data.trips_location(), DataLocation::Url(_)));
        assert_eq!(conf.scale.max_radius, 40.0);
    }

    #[test]
    fn test_rejects_inverted_zoom() {
        let user = "[map]\nmin_zoom = 19.0\n";
        assert!(BikeflowConfig::from_toml_str(user).is_err());
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let user = "[data]\nrequest_timeout_ms = 0\n";
        assert!(BikeflowConfig::from_toml_str(user).is_err());
    }
}
