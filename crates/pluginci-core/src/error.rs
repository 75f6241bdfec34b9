//! Error types for PluginCI domain values.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown agent requirement: {0}")]
    UnknownRequirement(String),
}

pub type Result<T> = std::result::Result<T, Error>;
