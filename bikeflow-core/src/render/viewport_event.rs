use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// camera changes after which projected screen positions are stale.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ViewportEvent {
    Move,
    Zoom,
    Resize,
    MoveEnd,
}

impl Display for ViewportEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ViewportEvent::Move => write!(f, "move"),
            ViewportEvent::Zoom => write!(f, "zoom"),
            ViewportEvent::Resize => write!(f, "resize"),
            ViewportEvent::MoveEnd => write!(f, "moveend"),
        }
    }
}
