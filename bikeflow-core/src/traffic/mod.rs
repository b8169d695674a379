mod aggregate_ops;
mod radius_scale;
mod traffic_summary;

pub use aggregate_ops::{aggregate, count_by_station};
pub use radius_scale::{make_radius_scale, make_radius_scale_with_range, RadiusScale};
pub use traffic_summary::{summarize, TrafficSummary};
