use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// GBFS station attribute used as the station key. trip logs usually
/// reference the rider-facing `short_name` rather than the system `station_id`.
#[derive(Serialize, Deserialize, ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StationIdField {
    #[default]
    ShortName,
    StationId,
}

impl Display for StationIdField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StationIdField::ShortName => write!(f, "short_name"),
            StationIdField::StationId => write!(f, "station_id"),
        }
    }
}
