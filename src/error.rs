use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("Failed to start server: {0}")]
    ServerError(String),
    #[error("Configuration error: {0}")]
    ConfigurationError(String),
}
