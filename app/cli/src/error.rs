//! FILENAME: app/cli/src/error.rs

use engine::EvalError;
use thiserror::Error;

/// Failure of a single statement. Reported as "Error: <message>" and never
/// stops the run.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatementError {
    #[error("Invalid variable assignment")]
    InvalidAssignment,

    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Failures that end the program.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Could not open input file {path}")]
    OpenInput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not open output file {path}")]
    OpenOutput {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid mode '{0}'. Please run the program again and choose 'direct' or 'file'.")]
    InvalidMode(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Logging error: {0}")]
    Logging(String),
}
