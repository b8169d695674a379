use serde::{Deserialize, Serialize};

/// paint properties shared by every station circle.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircleStyle {
    pub fill: String,
    pub fill_opacity: f64,
    pub stroke: String,
    pub stroke_width: f64,
    pub opacity: f64,
}

impl Default for CircleStyle {
    fn default() -> Self {
        Self {
            fill: String::from("steelblue"),
            fill_opacity: 0.6,
            stroke: String::from("white"),
            stroke_width: 1.0,
            opacity: 0.8,
        }
    }
}
