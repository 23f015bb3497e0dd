//! Единый тип ошибок публичного API.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OpsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("operation has no date")]
    MissingDate,

    #[error("wrong number length: {0}")]
    WrongNumberLength(usize),

    #[error("no card number in {0:?}")]
    CardNumberNotFound(String),

    #[error("no account number in {0:?}")]
    AccountNumberNotFound(String),

    #[error("no number to mask")]
    NumberMissing,

    #[error("Parse error: {0}")]
    Parse(String),
}

pub type Result<T> = std::result::Result<T, OpsError>;
