#[derive(thiserror::Error, Debug)]
pub enum BikeflowConfigError {
    #[error("Failed to build configuration: {0}")]
    BuildError(#[from] config::ConfigError),
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}
