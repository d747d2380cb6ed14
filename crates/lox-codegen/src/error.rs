/// Generator error types
use std::path::PathBuf;
use thiserror::Error;

pub type CodegenResult<T> = Result<T, CodegenError>;

#[derive(Debug, Error)]
pub enum CodegenError {
    #[error("Malformed field declaration '{token}': expected exactly one ':' separator")]
    MalformedField { token: String },

    #[error("I/O error at {path}: {error}")]
    Io {
        path: PathBuf,
        error: std::io::Error,
    },
}

impl CodegenError {
    /// Create a malformed-field error
    pub fn malformed_field(token: impl Into<String>) -> Self {
        Self::MalformedField {
            token: token.into(),
        }
    }

    /// Create an I/O error with path context
    pub fn io(path: impl Into<PathBuf>, error: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            error,
        }
    }
}
