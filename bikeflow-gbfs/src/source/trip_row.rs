use std::io::Read;

use bikeflow_core::model::Trip;
use chrono::{DateTime, NaiveDateTime};
use kdam::tqdm;
use serde::{Deserialize, Serialize};

use super::SourceError;

/// a row of a bike-share trip log. columns not listed here (ride id, bike
/// type, rider type, coordinates) are ignored.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct TripRow {
    /// empty for dockless trips
    #[serde(default)]
    pub start_station_id: String,
    #[serde(default)]
    pub end_station_id: String,
    pub started_at: String,
    pub ended_at: String,
}

impl TripRow {
    /// parses the row timestamps. `row` is used for error reporting only.
    pub fn into_trip(self, row: usize) -> Result<Trip, SourceError> {
        let started_at = parse_timestamp(&self.started_at).ok_or_else(|| {
            SourceError::TimestampError {
                value: self.started_at.clone(),
                row,
            }
        })?;
        let ended_at =
            parse_timestamp(&self.ended_at).ok_or_else(|| SourceError::TimestampError {
                value: self.ended_at.clone(),
                row,
            })?;
        Ok(Trip::new(
            self.start_station_id,
            self.end_station_id,
            started_at,
            ended_at,
        ))
    }
}

const TIMESTAMP_FORMATS: [&str; 2] = ["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

/// parses trip log timestamps, with or without fractional seconds, or as
/// RFC 3339 (converted to UTC).
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(value, fmt).ok())
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.naive_utc())
        })
}

/// trips read from a trip log along with the number of rows that were
/// rejected.
#[derive(Debug, Clone, Default)]
pub struct TripLog {
    pub trips: Vec<Trip>,
    pub skipped_rows: usize,
}

const REQUIRED_COLUMNS: [&str; 2] = ["started_at", "ended_at"];

/// reads a trip log CSV with headers. rows that cannot be decoded or carry
/// an unparseable timestamp are skipped with a warning. a header without the
/// timestamp columns fails the whole read.
pub fn read_trips<R: Read>(reader: R) -> Result<TripLog, SourceError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let headers = rdr.headers()?;
    if let Some(missing) = REQUIRED_COLUMNS
        .iter()
        .find(|col| !headers.iter().any(|h| h == **col))
    {
        return Err(SourceError::MissingColumn(missing.to_string()));
    }

    let row_iter = tqdm!(rdr.into_deserialize::<TripRow>(), desc = "reading trips");
    let mut trip_log = TripLog::default();
    for (idx, row) in row_iter.enumerate() {
        let row_number = idx + 1;
        match row
            .map_err(SourceError::from)
            .and_then(|r| r.into_trip(row_number))
        {
            Ok(trip) => trip_log.trips.push(trip),
            Err(e) if is_record_error(&e) => {
                log::warn!("skipping trip log row {row_number}: {e}");
                trip_log.skipped_rows += 1;
            }
            Err(e) => return Err(e),
        }
    }
    if trip_log.skipped_rows > 0 {
        log::warn!(
            "skipped {} of {} trip log rows",
            trip_log.skipped_rows,
            trip_log.skipped_rows + trip_log.trips.len()
        );
    }
    log::debug!("read {} trips", trip_log.trips.len());
    Ok(trip_log)
}

/// errors confined to a single row, as opposed to IO or encoding failures.
fn is_record_error(error: &SourceError) -> bool {
    match error {
        SourceError::TimestampError { .. } => true,
        SourceError::TripDecodeError(e) => matches!(
            e.kind(),
            csv::ErrorKind::Deserialize { .. } | csv::ErrorKind::UnequalLengths { .. }
        ),
        _ => false,
    }
}
