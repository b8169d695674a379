use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// arrival and departure counts observed at one station. the total is
/// always derived so it can never disagree with its parts.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TrafficCounts {
    pub arrivals: u64,
    pub departures: u64,
}

impl TrafficCounts {
    pub fn new(arrivals: u64, departures: u64) -> TrafficCounts {
        TrafficCounts {
            arrivals,
            departures,
        }
    }

    pub fn total(&self) -> u64 {
        self.arrivals + self.departures
    }
}

impl Display for TrafficCounts {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{},{}", self.arrivals, self.departures, self.total())
    }
}
