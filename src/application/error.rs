//! Application-level errors (wraps domain errors)

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::DomainError;

/// Application errors wrap domain errors and add input/output adapter context.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("cannot parse {input:?}: {message}")]
    Parse { input: String, message: String },

    #[error("n must be between 1 and {max}, got {node_count}")]
    NodeCountOutOfRange { node_count: usize, max: usize },

    #[error("tree has {node_count} nodes, rendering is limited to {limit}")]
    TooLargeToRender { node_count: usize, limit: usize },

    #[error("invalid problem file {path}: {message}")]
    InvalidProblem { path: PathBuf, message: String },

    #[error("config error: {message}")]
    Config { message: String },

    #[error("operation failed: {context}")]
    OperationFailed {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl ApplicationError {
    pub(crate) fn parse(input: &str, message: impl Into<String>) -> Self {
        Self::Parse {
            input: input.to_string(),
            message: message.into(),
        }
    }
}

/// Result type for application layer operations.
pub type ApplicationResult<T> = Result<T, ApplicationError>;
