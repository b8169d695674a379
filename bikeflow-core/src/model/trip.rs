use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// a single ride from the trip log. only the station ids take part in
/// aggregation; the timestamps are carried along untouched.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Trip {
    pub start_station_id: String,
    pub end_station_id: String,
    pub started_at: NaiveDateTime,
    pub ended_at: NaiveDateTime,
}

impl Trip {
    pub fn new(
        start_station_id: impl Into<String>,
        end_station_id: impl Into<String>,
        started_at: NaiveDateTime,
        ended_at: NaiveDateTime,
    ) -> Trip {
        Trip {
            start_station_id: start_station_id.into(),
            end_station_id: end_station_id.into(),
            started_at,
            ended_at,
        }
    }
}
