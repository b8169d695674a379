use crate::source::SourceError;

#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    SourceError(#[from] SourceError),
    #[error("Load {generation} was superseded by load {current}, discarding its result")]
    StaleLoad { generation: u64, current: u64 },
    #[error("Error creating a runtime to handle async code: {0}")]
    TokioError(String),
}
