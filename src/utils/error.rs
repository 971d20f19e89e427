use crate::domain::ports::Backend;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GcaError {
    #[error("Could not connect to {backend}: {message}")]
    StorageConnectionError { backend: Backend, message: String },

    #[error("Writing to {backend} failed: {message}")]
    StorageWriteError { backend: Backend, message: String },

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Document store error: {0}")]
    DocumentStoreError(#[from] mongodb::error::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in {field}: {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl GcaError {
    pub fn connection(backend: Backend, message: impl Into<String>) -> Self {
        GcaError::StorageConnectionError {
            backend,
            message: message.into(),
        }
    }

    pub fn write(backend: Backend, message: impl Into<String>) -> Self {
        GcaError::StorageWriteError {
            backend,
            message: message.into(),
        }
    }

    /// Connection failures are the only errors that move a run to the next storage tier.
    pub fn is_connection_failure(&self) -> bool {
        matches!(self, GcaError::StorageConnectionError { .. })
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GcaError::StorageConnectionError { .. } => {
                "Check the MongoDB URI or the database path"
            }
            GcaError::StorageWriteError { .. } | GcaError::DatabaseError(_) => {
                "Check that the storage backend accepts writes"
            }
            GcaError::DocumentStoreError(_) => "Check that the MongoDB server is reachable",
            GcaError::IoError(_) => "Check that the output directory exists and is writable",
            GcaError::SerializationError(_) => "Report this as a bug",
            GcaError::ConfigValidationError { .. }
            | GcaError::InvalidConfigValueError { .. } => {
                "Fix the command line flags or the TOML configuration file"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, GcaError>;
