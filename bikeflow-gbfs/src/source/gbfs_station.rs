use bikeflow_core::model::Station;
use serde::{Deserialize, Serialize};

use super::{SourceError, StationIdField};

/// the `station_information` GBFS document. only the fields needed to place
/// a station on the map are read.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GbfsStationInformation {
    pub last_updated: Option<serde_json::Value>,
    pub ttl: Option<u64>,
    pub data: GbfsStationData,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GbfsStationData {
    pub stations: Vec<GbfsStationRecord>,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct GbfsStationRecord {
    pub station_id: String,
    pub short_name: Option<String>,
    pub name: Option<GbfsName>,
    pub lat: f64,
    pub lon: f64,
    pub capacity: Option<u32>,
}

/// station names are plain strings up to GBFS 2.3 and localized lists from 3.0.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(untagged)]
pub enum GbfsName {
    Plain(String),
    Localized(Vec<LocalizedString>),
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct LocalizedString {
    pub text: String,
    pub language: Option<String>,
}

impl GbfsName {
    pub fn text(&self) -> Option<&str> {
        match self {
            GbfsName::Plain(s) => Some(s.as_str()),
            GbfsName::Localized(names) => names.first().map(|n| n.text.as_str()),
        }
    }
}

impl GbfsStationRecord {
    /// builds a [`Station`] keyed by `id_field`. records without that key
    /// cannot be matched against trips and yield None.
    pub fn to_station(&self, id_field: StationIdField) -> Option<Station> {
        let id = match id_field {
            StationIdField::StationId => Some(self.station_id.clone()),
            StationIdField::ShortName => self.short_name.clone(),
        }?;
        let mut station = Station::new(id, self.lon, self.lat);
        station.name = self.name.as_ref().and_then(|n| n.text()).map(String::from);
        station.capacity = self.capacity;
        Some(station)
    }
}

/// reads a GBFS `station_information` document into stations keyed by `id_field`.
pub fn parse_station_information(
    bytes: &[u8],
    id_field: StationIdField,
) -> Result<Vec<Station>, SourceError> {
    let doc: GbfsStationInformation = serde_json::from_slice(bytes)?;
    let n_records = doc.data.stations.len();
    let stations: Vec<Station> = doc
        .data
        .stations
        .iter()
        .filter_map(|record| {
            let station = record.to_station(id_field);
            if station.is_none() {
                log::warn!(
                    "station '{}' has no {id_field}, skipping",
                    record.station_id
                );
            }
            station
        })
        .collect();
    log::debug!(
        "read {} of {n_records} GBFS station records keyed by {id_field}",
        stations.len()
    );
    Ok(stations)
}

#[cfg(test)]
mod test {
    use super::parse_station_information;
    use crate::source::StationIdField;

    const STATIONS: &str = r#"{
        "last_updated": 1741275063,
        "ttl": 5,
        "data": {
            "stations": [
                {"station_id": "a1", "short_name": "A32000", "name": "Fan Pier", "lat": 42.3534, "lon": -71.0446, "capacity": 15},
                {"station_id": "b2", "name": [{"text": "Union Square", "language": "en"}], "lat": 42.3796, "lon": -71.0935},
                {"station_id": "c3", "short_name": "M32006", "lat": 42.3624, "lon": -71.0880, "rental_methods": ["KEY"]}
            ]
        }
    }"#;

    #[test]
    fn test_short_name_key_skips_missing() {
        let stations = parse_station_information(STATIONS.as_bytes(), StationIdField::ShortName)
            .expect("document should parse");
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].id, "A32000");
        assert_eq!(stations[0].name.as_deref(), Some("Fan Pier"));
        assert_eq!(stations[0].capacity, Some(15));
        assert_eq!(stations[0].lon(), -71.0446);
        assert_eq!(stations[0].lat(), 42.3534);
        assert_eq!(stations[1].id, "M32006");
        assert_eq!(stations[1].name, None);
    }

    #[test]
    fn test_station_id_key_and_localized_name() {
        let stations = parse_station_information(STATIONS.as_bytes(), StationIdField::StationId)
            .expect("document should parse");
        assert_eq!(stations.len(), 3);
        assert_eq!(stations[1].id, "b2");
        assert_eq!(stations[1].name.as_deref(), Some("Union Square"));
    }

    #[test]
    fn test_malformed_document_is_an_error() {
        let result = parse_station_information(b"{\"data\": {}}", StationIdField::ShortName);
        assert!(result.is_err());
    }
}
