use thiserror::Error;

/// Errors that can occur in type operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TypesError {
    #[error("Invalid address format: {0}")]
    InvalidAddressFormat(String),

    #[error("Invalid address length: expected 20, got {0}")]
    InvalidAddressLength(usize),

    #[error("Invalid hash length: expected 32, got {0}")]
    InvalidHashLength(usize),

    #[error("Invalid public key length: expected 64, got {0}")]
    InvalidPublicKeyLength(usize),

    #[error("U256 overflow")]
    U256Overflow,

    #[error("Invalid U256 string: {0}")]
    InvalidU256String(String),

    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),

    #[error("RLP decode error: {0}")]
    Rlp(String),

    #[error("JSON decode error: {0}")]
    Decode(String),
}

impl From<hex::FromHexError> for TypesError {
    fn from(e: hex::FromHexError) -> Self {
        TypesError::InvalidHex(e.to_string())
    }
}

impl From<rlp::DecoderError> for TypesError {
    fn from(e: rlp::DecoderError) -> Self {
        TypesError::Rlp(e.to_string())
    }
}

#[cfg(feature = "serde")]
impl From<serde_json::Error> for TypesError {
    fn from(e: serde_json::Error) -> Self {
        TypesError::Decode(e.to_string())
    }
}

/// Strip a mandatory `0x` prefix from wire hex.
pub(crate) fn strip_hex_prefix(s: &str) -> Result<&str, TypesError> {
    s.strip_prefix("0x")
        .or_else(|| s.strip_prefix("0X"))
        .ok_or_else(|| TypesError::InvalidHex(format!("missing 0x prefix: {}", s)))
}
