mod circle;
mod circle_layer;
mod circle_style;
mod projector;
mod viewport_dispatcher;
mod viewport_event;

pub use circle::Circle;
pub use circle_layer::CircleLayer;
pub use circle_style::CircleStyle;
pub use projector::{Projector, ScreenPoint};
pub use viewport_dispatcher::{SubscriptionId, ViewportDispatcher, ViewportObserver};
pub use viewport_event::ViewportEvent;
