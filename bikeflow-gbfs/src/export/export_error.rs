#[derive(thiserror::Error, Debug)]
pub enum ExportError {
    #[error("Failed to write '{path}': {source}")]
    FileWriteError {
        path: String,
        source: std::io::Error,
    },
    #[error("Failed to write CSV row: {0}")]
    CsvError(#[from] csv::Error),
    #[error("Failed to serialize JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Output file '{0}' already exists, pass --overwrite to replace it")]
    OutputExists(String),
}
