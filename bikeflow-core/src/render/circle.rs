use super::ScreenPoint;
use crate::model::EnrichedStation;

/// one drawable station marker.
#[derive(Debug, Clone, PartialEq)]
pub struct Circle {
    pub station: EnrichedStation,
    pub radius: f64,
    /// last projected center, None until the first viewport update.
    pub center: Option<ScreenPoint>,
}
