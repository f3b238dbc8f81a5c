use thiserror::Error;

/// Errors resolving a query-language version from host input.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum VersionError {
    #[error("host version is empty")]
    Empty,

    #[error("malformed host version: {version}")]
    Malformed { version: String },

    #[error("unknown query language: {0} (expected legacy or modern)")]
    UnknownGrammar(String),
}

impl VersionError {
    pub fn malformed(version: impl Into<String>) -> Self {
        Self::Malformed {
            version: version.into(),
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0:?}")]
    IO(#[from] std::io::Error),

    #[error("config is malformed: {0}")]
    Malformed(#[from] serde_yml::Error),

    #[error("config file is not valid utf8")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("invalid host_version: {0}")]
    Version(#[from] VersionError),
}

impl ConfigError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }
}

pub type ConfigResult<T> = Result<T, ConfigError>;
