use thiserror::Error;

/// Errors raised while loading or installing a configuration snapshot.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Cannot read shipping configuration {path}: {message}")]
    Io { path: String, message: String },
    #[error("Malformed shipping configuration: {0}")]
    Parse(String),
    #[error("Invalid shipping settings: {0}")]
    InvalidSettings(String),
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: u32 },
    #[error("Duplicate {kind} code: {code}")]
    DuplicateCode { kind: &'static str, code: String },
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}
