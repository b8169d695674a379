use std::time::Duration;

use bikeflow_core::model::{Station, Trip};

use super::{
    parse_station_information, read_trips, DataLocation, DataSource, SourceError, StationIdField,
};
use crate::config::DataConfig;

/// reads stations and trips from URLs or local files.
#[derive(Debug, Clone)]
pub struct LocationSource {
    stations: DataLocation,
    trips: DataLocation,
    station_id_field: StationIdField,
    client: reqwest::Client,
}

impl TryFrom<&DataConfig> for LocationSource {
    type Error = SourceError;

    fn try_from(value: &DataConfig) -> Result<Self, Self::Error> {
        LocationSource::new(
            value.stations_location(),
            value.trips_location(),
            value.station_id_field,
            value.request_timeout(),
        )
    }
}

impl LocationSource {
    pub fn new(
        stations: DataLocation,
        trips: DataLocation,
        station_id_field: StationIdField,
        request_timeout: Duration,
    ) -> Result<Self, SourceError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()
            .map_err(|e| SourceError::ClientError(e.to_string()))?;
        Ok(Self {
            stations,
            trips,
            station_id_field,
            client,
        })
    }

    async fn read_bytes(&self, location: &DataLocation) -> Result<Vec<u8>, SourceError> {
        match location {
            DataLocation::Url(url) => {
                log::debug!("GET {url}");
                let to_http_error = |e: reqwest::Error| SourceError::HttpError {
                    url: url.clone(),
                    source: e,
                };
                let response = self
                    .client
                    .get(url)
                    .send()
                    .await
                    .and_then(|r| r.error_for_status())
                    .map_err(to_http_error)?;
                let bytes = response.bytes().await.map_err(to_http_error)?;
                Ok(bytes.to_vec())
            }
            DataLocation::File(path) => {
                log::debug!("reading {path:?}");
                tokio::fs::read(path)
                    .await
                    .map_err(|e| SourceError::FileReadError {
                        path: path.display().to_string(),
                        source: e,
                    })
            }
        }
    }
}

impl DataSource for LocationSource {
    async fn fetch_stations(&self) -> Result<Vec<Station>, SourceError> {
        let bytes = self.read_bytes(&self.stations).await?;
        let stations = parse_station_information(&bytes, self.station_id_field)?;
        log::info!("loaded {} stations from {}", stations.len(), self.stations);
        Ok(stations)
    }

    async fn fetch_trips(&self) -> Result<Vec<Trip>, SourceError> {
        let bytes = self.read_bytes(&self.trips).await?;
        let trip_log = read_trips(bytes.as_slice())?;
        log::info!(
            "loaded {} trips from {} ({} rows skipped)",
            trip_log.trips.len(),
            self.trips,
            trip_log.skipped_rows
        );
        Ok(trip_log.trips)
    }
}
