//! Error types for temporal-field conversions.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConvertError {
    /// The caller passed a value that violates a documented precondition
    /// (wrong moment tag, out-of-range span, value outside the native range).
    #[error("Invalid state: {0}")]
    InvalidState(String),

    /// A zoned record could not be decoded or its zone is unrecognized.
    #[error("Malformed data: {0}")]
    MalformedData(String),
}

pub type Result<T> = std::result::Result<T, ConvertError>;
