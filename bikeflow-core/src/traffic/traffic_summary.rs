use crate::model::{EnrichedStation, Station, Trip};
use std::{collections::HashSet, fmt::Display};

/// overview of how well a trip log lines up with a station list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TrafficSummary {
    pub stations: usize,
    pub trips: usize,
    /// trips whose start id is not a known station
    pub unmatched_departures: usize,
    /// trips whose end id is not a known station
    pub unmatched_arrivals: usize,
    /// stations without a single arrival or departure
    pub idle_stations: usize,
    pub max_traffic: u64,
}

impl Display for TrafficSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{},{},{},{},{},{}",
            self.stations,
            self.trips,
            self.unmatched_departures,
            self.unmatched_arrivals,
            self.idle_stations,
            self.max_traffic
        )
    }
}

impl TrafficSummary {
    pub const CSV_HEADER: &str =
        "stations,trips,unmatched_departures,unmatched_arrivals,idle_stations,max_traffic";
}

/// summarizes a completed aggregation against its inputs.
pub fn summarize(
    stations: &[Station],
    trips: &[Trip],
    enriched: &[EnrichedStation],
) -> TrafficSummary {
    let known: HashSet<&str> = stations.iter().map(|s| s.id.as_str()).collect();
    let unmatched_departures = trips
        .iter()
        .filter(|t| !known.contains(t.start_station_id.as_str()))
        .count();
    let unmatched_arrivals = trips
        .iter()
        .filter(|t| !known.contains(t.end_station_id.as_str()))
        .count();
    TrafficSummary {
        stations: stations.len(),
        trips: trips.len(),
        unmatched_departures,
        unmatched_arrivals,
        idle_stations: enriched.iter().filter(|s| s.total_traffic() == 0).count(),
        max_traffic: enriched
            .iter()
            .map(EnrichedStation::total_traffic)
            .max()
            .unwrap_or_default(),
    }
}

#[cfg(test)]
mod test {
    use super::summarize;
    use crate::model::{Station, Trip};
    use crate::traffic::aggregate;
    use chrono::NaiveDateTime;

    #[test]
    fn test_summary_counts_unmatched_trips() {
        let t = NaiveDateTime::parse_from_str("2024-03-01 08:00:00", "%Y-%m-%d %H:%M:%S")
            .expect("test timestamp");
        let stations = vec![
            Station::new("A", -71.1, 42.3),
            Station::new("B", -71.0, 42.3),
            Station::new("C", -71.0, 42.4),
        ];
        let trips = vec![
            Trip::new("A", "B", t, t),
            Trip::new("A", "X", t, t),
            Trip::new("", "A", t, t),
        ];
        let enriched = aggregate(&stations, &trips);
        let summary = summarize(&stations, &trips, &enriched);
        assert_eq!(summary.stations, 3);
        assert_eq!(summary.trips, 3);
        assert_eq!(summary.unmatched_departures, 1);
        assert_eq!(summary.unmatched_arrivals, 1);
        assert_eq!(summary.idle_stations, 1);
        assert_eq!(summary.max_traffic, 3);
        assert_eq!(summary.to_string(), "3,3,1,1,1,3");
    }
}
