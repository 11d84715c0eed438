use crate::model::{RecordId, RecordKind};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum HmsError {
    #[error("{kind} with id {key} already exists")]
    DuplicateKey { kind: RecordKind, key: RecordId },

    #[error("{kind} with id {key} not found")]
    NotFound { kind: RecordKind, key: RecordId },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Input closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, HmsError>;
