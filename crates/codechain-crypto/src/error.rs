use thiserror::Error;

/// Errors that can occur in hashing operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CryptoError {
    #[error("Invalid blake2b key length: max 64, got {0}")]
    InvalidKeyLength(usize),
}
