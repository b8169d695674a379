use crate::{
    config::BikeflowConfigError, export::ExportError, pipeline::PipelineError,
    source::SourceError,
};

#[derive(thiserror::Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    ConfigError(#[from] BikeflowConfigError),
    #[error(transparent)]
    SourceError(#[from] SourceError),
    #[error(transparent)]
    PipelineError(#[from] PipelineError),
    #[error(transparent)]
    ExportError(#[from] ExportError),
}
