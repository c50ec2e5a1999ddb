//! Error types for ledgerkit-setup

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SetupError {
    #[error("Record not found: {record_type} {name}")]
    NotFound { record_type: String, name: String },

    #[error("Duplicate record: {record_type} {name}")]
    Duplicate { record_type: String, name: String },

    #[error("Bank account cannot be named as {0}")]
    ProtectedAccount(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
