use crate::error::TypesError;
use std::fmt;
use std::str::FromStr;

/// Account identifier (H160): payment sender/receiver and asset registrar.
///
/// Printed and parsed as `0x`-prefixed hex, the same form the node uses.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Address([u8; 20]);

impl Address {
    pub const ZERO: Self = Self([0u8; 20]);
    pub const LEN: usize = 20;

    pub const fn from_bytes(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }

    pub const fn as_bytes(&self) -> &[u8; 20] {
        &self.0
    }

    pub fn from_slice(slice: &[u8]) -> Result<Self, TypesError> {
        let bytes: [u8; 20] = slice
            .try_into()
            .map_err(|_| TypesError::InvalidAddressLength(slice.len()))?;
        Ok(Self(bytes))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 20]
    }

    /// Lowercase hex without the `0x` prefix
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self)
    }
}

impl fmt::LowerHex for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl FromStr for Address {
    type Err = TypesError;

    /// Accepts hex of exactly 20 bytes, with or without `0x`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")).unwrap_or(s);
        let bytes = hex::decode(digits)
            .map_err(|e| TypesError::InvalidAddressFormat(format!("{}: {}", s, e)))?;
        Self::from_slice(&bytes)
    }
}

impl AsRef<[u8]> for Address {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<[u8; 20]> for Address {
    fn from(bytes: [u8; 20]) -> Self {
        Self(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_is_prefixed_hex() {
        let addr = Address::from_bytes([0x01; 20]);
        let expected = format!("0x{}", "01".repeat(20));
        assert_eq!(addr.to_string(), expected);
        assert_eq!(format!("{:x}", addr), expected);
        assert_eq!(format!("{:?}", addr), format!("Address({})", expected));
    }

    #[test]
    fn test_parse_roundtrip() {
        let bytes: [u8; 20] = std::array::from_fn(|i| i as u8);
        let addr = Address::from(bytes);
        assert_eq!(addr.to_string().parse::<Address>().unwrap(), addr);
        assert_eq!(addr.to_hex().parse::<Address>().unwrap(), addr);
        assert_eq!(addr.to_string().to_uppercase().replace("0X", "0x").parse::<Address>().unwrap(), addr);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(matches!(
            Address::from_str("ccc1qyqszqgp"),
            Err(TypesError::InvalidAddressFormat(_))
        ));
        assert_eq!(
            Address::from_str("0x1234"),
            Err(TypesError::InvalidAddressLength(2))
        );
        assert!(Address::from_str("0x").is_err());
    }

    #[test]
    fn test_zero_and_length() {
        assert!(Address::ZERO.is_zero());
        assert!(!Address::from_bytes([1u8; 20]).is_zero());
        assert_eq!(
            Address::from_slice(&[0u8; 19]),
            Err(TypesError::InvalidAddressLength(19))
        );
    }
}
