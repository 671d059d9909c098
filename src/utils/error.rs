use thiserror::Error;

/// Errors from the layers around the query core. The query operations
/// themselves never fail: empty input produces empty output.
#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Invalid value for {field}: {reason}")]
    InvalidArgumentError { field: String, reason: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
