use bikeflow_core::{
    model::EnrichedStation,
    render::{CircleLayer, CircleStyle},
    traffic::{RadiusScale, TrafficSummary},
};

/// the result of one completed load: stations with traffic counts and the
/// radius scale derived from them.
#[derive(Debug, Clone)]
pub struct TrafficSnapshot {
    pub generation: u64,
    pub stations: Vec<EnrichedStation>,
    pub scale: RadiusScale,
    pub summary: TrafficSummary,
}

impl TrafficSnapshot {
    /// builds the drawable station overlay for this snapshot.
    pub fn circle_layer(&self, style: CircleStyle) -> CircleLayer {
        CircleLayer::new(self.stations.clone(), self.scale, style)
    }

    /// the `n` busiest stations, busiest first. ties keep input order.
    pub fn busiest(&self, n: usize) -> Vec<&EnrichedStation> {
        let mut ranked: Vec<&EnrichedStation> = self.stations.iter().collect();
        ranked.sort_by(|a, b| b.total_traffic().cmp(&a.total_traffic()));
        ranked.truncate(n);
        ranked
    }
}
