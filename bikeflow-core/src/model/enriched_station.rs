use super::{Station, TrafficCounts};
use serde::{Deserialize, Serialize};

/// a [`Station`] carrying the traffic counts observed for its id.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct EnrichedStation {
    pub station: Station,
    pub traffic: TrafficCounts,
}

impl EnrichedStation {
    pub fn new(station: Station, traffic: TrafficCounts) -> EnrichedStation {
        EnrichedStation { station, traffic }
    }

    pub fn id(&self) -> &str {
        &self.station.id
    }

    pub fn arrivals(&self) -> u64 {
        self.traffic.arrivals
    }

    pub fn departures(&self) -> u64 {
        self.traffic.departures
    }

    pub fn total_traffic(&self) -> u64 {
        self.traffic.total()
    }
}
