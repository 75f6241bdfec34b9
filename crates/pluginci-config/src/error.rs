//! Configuration and generation errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Empty API versions list")]
    EmptyApiVersions,

    #[error("Missing required parameter: {0}")]
    MissingParameter(String),

    #[error("Invalid authentication method: {0}")]
    InvalidAuthMethod(String),

    #[error("Invalid requirement: {0}")]
    InvalidRequirement(String),

    #[error("Invalid build id: {0}")]
    InvalidBuildId(String),

    #[error("KDL parse error: {0}")]
    Parse(#[from] kdl::KdlError),

    #[error("invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("duplicate definition: {0}")]
    Duplicate(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Broad category of a [`ConfigError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required parameter is blank or absent.
    MissingRequiredInput,
    /// A parameter names an unknown authentication method or requirement.
    InvalidEnumValue,
    /// A requirement token names a build that was not generated.
    InvalidReference,
    /// The parameters could not be read.
    Source,
}

impl ConfigError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConfigError::EmptyApiVersions | ConfigError::MissingParameter(_) => {
                ErrorKind::MissingRequiredInput
            }
            ConfigError::InvalidAuthMethod(_) | ConfigError::InvalidRequirement(_) => {
                ErrorKind::InvalidEnumValue
            }
            ConfigError::InvalidBuildId(_) => ErrorKind::InvalidReference,
            ConfigError::Parse(_)
            | ConfigError::InvalidValue { .. }
            | ConfigError::Duplicate(_)
            | ConfigError::Io(_) => ErrorKind::Source,
        }
    }
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
