use super::{Circle, CircleStyle, Projector, ViewportEvent, ViewportObserver};
use crate::model::EnrichedStation;
use crate::traffic::RadiusScale;

/// the station traffic overlay: one circle per station, sized once from the
/// radius scale and re-projected on every viewport change.
#[derive(Debug, Clone)]
pub struct CircleLayer {
    circles: Vec<Circle>,
    style: CircleStyle,
    scale: RadiusScale,
    updates: usize,
}

impl CircleLayer {
    pub fn new(stations: Vec<EnrichedStation>, scale: RadiusScale, style: CircleStyle) -> Self {
        let circles = stations
            .into_iter()
            .map(|station| Circle {
                radius: scale.apply(station.total_traffic()),
                station,
                center: None,
            })
            .collect();
        Self {
            circles,
            style,
            scale,
            updates: 0,
        }
    }

    pub fn circles(&self) -> &[Circle] {
        &self.circles
    }

    pub fn style(&self) -> &CircleStyle {
        &self.style
    }

    pub fn scale(&self) -> &RadiusScale {
        &self.scale
    }

    /// number of times positions have been recomputed.
    pub fn updates(&self) -> usize {
        self.updates
    }

    /// projects every circle's station position to screen coordinates.
    pub fn update_positions(&mut self, projector: &dyn Projector) {
        for circle in self.circles.iter_mut() {
            circle.center = Some(projector.project(circle.station.station.position));
        }
        self.updates += 1;
    }
}

impl ViewportObserver for CircleLayer {
    fn on_viewport_change(&mut self, event: ViewportEvent, projector: &dyn Projector) {
        log::trace!("{event}: repositioning {} circles", self.circles.len());
        self.update_positions(projector);
    }
}
