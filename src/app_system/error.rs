use thiserror::Error;

use crate::config_store::ConfigError;

/// Errors raised while starting or stopping the shipping system.
#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Actor task failed: {0}")]
    TaskFailed(String),
}
