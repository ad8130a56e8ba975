use thiserror::Error;

/// Custom error types for vidfetch
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Server returned status {0} for {1}")]
    HttpStatus(u16, String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Required external tool not found: {0}")]
    DependencyNotFound(String),

    #[error("Command execution failed: {0}")]
    CommandExecution(String),

    #[error("Command timed out after {0} seconds")]
    CommandTimeout(u64),

    #[error("Failed to parse JSON output: {0}")]
    JsonParse(String),

    #[error("Media file error: {0}")]
    MediaFile(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for vidfetch operations
pub type CoreResult<T> = std::result::Result<T, CoreError>;
