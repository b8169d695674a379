use geo::Point;
use serde::{Deserialize, Serialize};

/// pixel position relative to the map container's top-left corner.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub fn new(x: f64, y: f64) -> ScreenPoint {
        ScreenPoint { x, y }
    }
}

/// converts a geographic position (x = longitude, y = latitude) into screen
/// coordinates for the current camera. implemented by the mapping engine
/// that owns the viewport.
pub trait Projector {
    fn project(&self, position: Point<f64>) -> ScreenPoint;
}

impl<F> Projector for F
where
    F: Fn(Point<f64>) -> ScreenPoint,
{
    fn project(&self, position: Point<f64>) -> ScreenPoint {
        self(position)
    }
}
