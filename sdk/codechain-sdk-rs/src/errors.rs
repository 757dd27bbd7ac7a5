//! Error types for the SDK.

use codechain_types::TypesError;
use thiserror::Error;

/// SDK result type.
pub type Result<T> = std::result::Result<T, SdkError>;

/// SDK errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SdkError {
    /// Transport failure talking to the node
    #[error("Connection error: {0}")]
    Connection(String),

    /// Error object returned by the node
    #[error("RPC error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// Response did not have the expected shape
    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error(transparent)]
    Types(#[from] TypesError),

    /// Configuration could not be loaded
    #[error("Config error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for SdkError {
    fn from(e: reqwest::Error) -> Self {
        SdkError::Connection(e.to_string())
    }
}

impl From<serde_json::Error> for SdkError {
    fn from(e: serde_json::Error) -> Self {
        SdkError::Serialization(e.to_string())
    }
}

impl From<toml::de::Error> for SdkError {
    fn from(e: toml::de::Error) -> Self {
        SdkError::Config(e.to_string())
    }
}
