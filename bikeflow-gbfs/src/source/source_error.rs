#[derive(thiserror::Error, Debug)]
pub enum SourceError {
    #[error("Failed to build HTTP client: {0}")]
    ClientError(String),
    #[error("Failed to get a valid response from '{url}': {source}")]
    HttpError { url: String, source: reqwest::Error },
    #[error("Failed to read file '{path}': {source}")]
    FileReadError {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to deserialize GBFS station information: {0}")]
    StationDecodeError(#[from] serde_json::Error),
    #[error("Failed to deserialize trip log row: {0}")]
    TripDecodeError(#[from] csv::Error),
    #[error("Trip log is missing the '{0}' column")]
    MissingColumn(String),
    #[error("Failed to parse timestamp '{value}' on trip log row {row}")]
    TimestampError { value: String, row: usize },
}
