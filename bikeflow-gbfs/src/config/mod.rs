mod bikeflow_config;
mod config_error;
mod data_config;
mod map_config;

pub use bikeflow_config::{BikeflowConfig, ScaleConfig};
pub use config_error::BikeflowConfigError;
pub use data_config::DataConfig;
pub use map_config::{BikeLaneConfig, MapCenter, MapConfig};
