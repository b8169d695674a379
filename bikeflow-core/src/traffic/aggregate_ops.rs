use crate::model::{EnrichedStation, Station, TrafficCounts, Trip};
use std::collections::HashMap;

/// attaches arrival and departure counts from the trip log to each station.
///
/// trips are counted by `start_station_id` (departures) and `end_station_id`
/// (arrivals). a trip whose id matches no station counts toward nothing. the
/// output keeps the order of `stations`.
///
/// duplicate station ids are not merged: every station sharing an id
/// receives the full count for that id.
///
/// # Arguments
///
/// * `stations` - stations to enrich, may be empty
/// * `trips`    - the trip log, may reference unknown station ids
///
/// # Returns
///
/// one [`EnrichedStation`] per input station
pub fn aggregate(stations: &[Station], trips: &[Trip]) -> Vec<EnrichedStation> {
    let departures = count_by_station(trips, |t| &t.start_station_id);
    let arrivals = count_by_station(trips, |t| &t.end_station_id);
    log::debug!(
        "aggregate: {} trips over {} departure ids, {} arrival ids, {} stations",
        trips.len(),
        departures.len(),
        arrivals.len(),
        stations.len()
    );

    stations
        .iter()
        .map(|station| {
            let id = station.id.as_str();
            let counts = TrafficCounts::new(
                arrivals.get(id).copied().unwrap_or_default(),
                departures.get(id).copied().unwrap_or_default(),
            );
            EnrichedStation::new(station.clone(), counts)
        })
        .collect()
}

/// counts trips grouped by the station id selected by `key`.
pub fn count_by_station<'a, F>(trips: &'a [Trip], key: F) -> HashMap<&'a str, u64>
where
    F: Fn(&'a Trip) -> &'a String,
{
    let mut counts: HashMap<&str, u64> = HashMap::new();
    for trip in trips {
        *counts.entry(key(trip).as_str()).or_default() += 1;
    }
    counts
}
