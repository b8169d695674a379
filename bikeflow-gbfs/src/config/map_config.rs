use bikeflow_core::render::CircleStyle;
use serde::{Deserialize, Serialize};

/// initial camera and layer styling for the exported map.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MapConfig {
    pub style: String,
    pub center: MapCenter,
    pub zoom: f64,
    pub min_zoom: f64,
    pub max_zoom: f64,
    pub bike_lanes: BikeLaneConfig,
    pub circles: CircleStyle,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct MapCenter {
    pub lon: f64,
    pub lat: f64,
}

/// the bike-lane network line layer drawn beneath the station circles.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BikeLaneConfig {
    pub source_id: String,
    /// GeoJSON document of the bike network, passed to the map engine as-is
    pub url: String,
    pub color: String,
    pub width: f64,
    pub opacity: f64,
}
