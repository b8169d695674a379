use bikeflow_core::model::{Station, Trip};
use std::future::Future;

use super::SourceError;

/// provider of the two inputs to traffic aggregation. both fetches may run
/// concurrently.
pub trait DataSource {
    fn fetch_stations(&self) -> impl Future<Output = Result<Vec<Station>, SourceError>> + Send;

    fn fetch_trips(&self) -> impl Future<Output = Result<Vec<Trip>, SourceError>> + Send;
}
