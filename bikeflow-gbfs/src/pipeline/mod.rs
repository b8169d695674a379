mod load_coordinator;
mod pipeline_error;
mod traffic_pipeline;
mod traffic_snapshot;

pub use load_coordinator::{LoadCoordinator, LoadTicket};
pub use pipeline_error::PipelineError;
pub use traffic_pipeline::TrafficPipeline;
pub use traffic_snapshot::TrafficSnapshot;
