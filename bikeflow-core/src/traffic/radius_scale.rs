use crate::model::EnrichedStation;
use serde::{Deserialize, Serialize};

/// maps a station's total traffic to a circle radius so that circle area,
/// not radius, grows linearly with traffic.
///
/// the domain is `[0, max_traffic]` and the range is `[0, max_radius]`. values
/// above `max_traffic` continue along the same square-root curve. when
/// `max_traffic` is zero the domain is degenerate and every input maps to 0.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct RadiusScale {
    max_traffic: u64,
    max_radius: f64,
}

impl RadiusScale {
    pub const DEFAULT_MAX_RADIUS: f64 = 25.0;

    pub fn new(max_traffic: u64, max_radius: f64) -> RadiusScale {
        RadiusScale {
            max_traffic,
            max_radius,
        }
    }

    pub fn max_traffic(&self) -> u64 {
        self.max_traffic
    }

    pub fn max_radius(&self) -> f64 {
        self.max_radius
    }

    /// radius for a traffic count.
    pub fn apply(&self, total_traffic: u64) -> f64 {
        if self.max_traffic == 0 {
            return 0.0;
        }
        let ratio = total_traffic as f64 / self.max_traffic as f64;
        self.max_radius * ratio.sqrt()
    }

    /// the scale as a plain closure, for renderers that take `Fn(u64) -> f64`.
    pub fn as_fn(&self) -> impl Fn(u64) -> f64 {
        let scale = *self;
        move |total_traffic| scale.apply(total_traffic)
    }
}

/// builds the radius scale for a set of enriched stations using the
/// default maximum radius of 25.
pub fn make_radius_scale(stations: &[EnrichedStation]) -> RadiusScale {
    make_radius_scale_with_range(stations, RadiusScale::DEFAULT_MAX_RADIUS)
}

/// builds the radius scale for a set of enriched stations, mapping the
/// busiest station to `max_radius`.
pub fn make_radius_scale_with_range(stations: &[EnrichedStation], max_radius: f64) -> RadiusScale {
    let max_traffic = stations
        .iter()
        .map(EnrichedStation::total_traffic)
        .max()
        .unwrap_or_default();
    log::debug!("radius scale domain [0, {max_traffic}] range [0, {max_radius}]");
    RadiusScale::new(max_traffic, max_radius)
}
