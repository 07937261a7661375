//! Error types for vault operations

use thiserror::Error;
use uuid::Uuid;

/// Errors that can occur during vault operations
#[derive(Error, Debug)]
pub enum VaultError {
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("stored vault data is corrupted: {0}")]
    CorruptStore(String),

    #[error("import data is not a valid vault: {0}")]
    Import(String),

    #[error("entry not found: {0}")]
    NotFound(Uuid),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("configuration error: {0}")]
    Config(String),
}

pub type VaultResult<T> = Result<T, VaultError>;
