mod enriched_station;
mod station;
mod traffic_counts;
mod trip;

pub use enriched_station::EnrichedStation;
pub use station::Station;
pub use traffic_counts::TrafficCounts;
pub use trip::Trip;
