//! Serialization implementations for codechain-types
//!
//! This module provides serde (JSON wire form) and RLP (canonical byte form)
//! implementations for the primitive types.

use crate::*;

// Serde implementations
#[cfg(feature = "serde")]
pub(crate) mod serde_impls {
    use super::*;
    use crate::error::strip_hex_prefix;
    use serde::de::{self, Visitor};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    fn decode_prefixed_hex<E: de::Error>(s: &str) -> Result<Vec<u8>, E> {
        let digits = strip_hex_prefix(s).map_err(E::custom)?;
        hex::decode(digits).map_err(E::custom)
    }

    // U256
    impl Serialize for U256 {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            format!("{:#x}", self).serialize(serializer)
        }
    }

    struct U256Visitor;

    impl<'de> Visitor<'de> for U256Visitor {
        type Value = U256;

        fn expecting(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            f.write_str("a 0x-prefixed hex string, a decimal string or a non-negative integer")
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<U256, E> {
            Ok(U256::from(v))
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<U256, E> {
            u64::try_from(v)
                .map(U256::from)
                .map_err(|_| E::invalid_value(de::Unexpected::Signed(v), &self))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<U256, E> {
            v.parse().map_err(E::custom)
        }
    }

    impl<'de> Deserialize<'de> for U256 {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(U256Visitor)
        }
    }

    // Hash
    impl Serialize for Hash {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Hash {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            let bytes = decode_prefixed_hex(&s)?;
            Hash::from_slice(&bytes).map_err(de::Error::custom)
        }
    }

    // Address
    impl Serialize for Address {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Address {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            let bytes = decode_prefixed_hex(&s)?;
            Address::from_slice(&bytes).map_err(de::Error::custom)
        }
    }

    // Public
    impl Serialize for Public {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            self.to_string().serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for Public {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let s = String::deserialize(deserializer)?;
            let bytes = decode_prefixed_hex(&s)?;
            Public::from_slice(&bytes).map_err(de::Error::custom)
        }
    }

    /// `Vec<u8>` as `0x`-prefixed lowercase hex.
    pub mod hex_bytes {
        use super::*;

        pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
            format!("0x{}", hex::encode(bytes)).serialize(serializer)
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
            let s = String::deserialize(deserializer)?;
            decode_prefixed_hex(&s)
        }
    }

    /// `Vec<Vec<u8>>` as an array of `0x`-prefixed hex strings.
    pub mod hex_bytes_list {
        use super::*;
        use serde::ser::SerializeSeq;

        pub fn serialize<S: Serializer>(list: &[Vec<u8>], serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(list.len()))?;
            for bytes in list {
                seq.serialize_element(&format!("0x{}", hex::encode(bytes)))?;
            }
            seq.end()
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Vec<u8>>, D::Error> {
            Vec::<String>::deserialize(deserializer)?
                .iter()
                .map(|s| decode_prefixed_hex(s))
                .collect()
        }
    }

    /// Optional field that must be present on the wire, as a value or `null`.
    pub mod nullable {
        use super::*;

        pub fn serialize<T: Serialize, S: Serializer>(value: &Option<T>, serializer: S) -> Result<S::Ok, S::Error> {
            value.serialize(serializer)
        }

        pub fn deserialize<'de, T: Deserialize<'de>, D: Deserializer<'de>>(deserializer: D) -> Result<Option<T>, D::Error> {
            Option::<T>::deserialize(deserializer)
        }
    }
}

// RLP implementations
pub(crate) mod rlp_impls {
    use super::*;
    use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};
    use std::cmp::Ordering;

    fn decode_fixed<const N: usize>(rlp: &Rlp<'_>) -> Result<[u8; N], DecoderError> {
        rlp.decoder().decode_value(|bytes| match bytes.len().cmp(&N) {
            Ordering::Less => Err(DecoderError::RlpIsTooShort),
            Ordering::Greater => Err(DecoderError::RlpIsTooBig),
            Ordering::Equal => {
                let mut out = [0u8; N];
                out.copy_from_slice(bytes);
                Ok(out)
            }
        })
    }

    // U256 - minimal big-endian bytes, zero is the empty string
    impl Encodable for U256 {
        fn rlp_append(&self, s: &mut RlpStream) {
            s.encoder().encode_value(&self.to_be_bytes_trimmed());
        }
    }

    impl Decodable for U256 {
        fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
            rlp.decoder().decode_value(|bytes| {
                if bytes.first() == Some(&0) {
                    Err(DecoderError::RlpInvalidIndirection)
                } else {
                    U256::from_be_slice(bytes).map_err(|_| DecoderError::RlpIsTooBig)
                }
            })
        }
    }

    // Hash - stored as raw bytes
    impl Encodable for Hash {
        fn rlp_append(&self, s: &mut RlpStream) {
            s.encoder().encode_value(self.as_bytes());
        }
    }

    impl Decodable for Hash {
        fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
            decode_fixed::<32>(rlp).map(Hash::from_bytes)
        }
    }

    // Address - stored as raw bytes
    impl Encodable for Address {
        fn rlp_append(&self, s: &mut RlpStream) {
            s.encoder().encode_value(self.as_bytes());
        }
    }

    impl Decodable for Address {
        fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
            decode_fixed::<20>(rlp).map(Address::from_bytes)
        }
    }

    // Public - stored as raw bytes
    impl Encodable for Public {
        fn rlp_append(&self, s: &mut RlpStream) {
            s.encoder().encode_value(self.as_bytes());
        }
    }

    impl Decodable for Public {
        fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
            decode_fixed::<64>(rlp).map(Public::from_bytes)
        }
    }

    /// Append an optional value as a list of zero or one item.
    pub fn append_optional<T: Encodable>(s: &mut RlpStream, value: &Option<T>) {
        match value {
            None => {
                s.begin_list(0);
            }
            Some(inner) => {
                s.begin_list(1).append(inner);
            }
        }
    }

    /// Decode a list of zero or one item.
    pub fn decode_optional<T: Decodable>(rlp: &Rlp<'_>) -> Result<Option<T>, DecoderError> {
        if !rlp.is_list() {
            return Err(DecoderError::RlpExpectedToBeList);
        }
        match rlp.item_count()? {
            0 => Ok(None),
            1 => rlp.val_at(0).map(Some),
            _ => Err(DecoderError::RlpIncorrectListLen),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_u256_rlp_minimal() {
        assert_eq!(rlp::encode(&U256::ZERO).to_vec(), vec![0x80]);
        assert_eq!(rlp::encode(&U256::from(111u64)).to_vec(), vec![0x6f]);
        assert_eq!(rlp::encode(&U256::from(128u64)).to_vec(), vec![0x81, 0x80]);
        assert_eq!(rlp::encode(&U256::from(1000u64)).to_vec(), vec![0x82, 0x03, 0xe8]);
    }

    #[test]
    fn test_u256_rlp_rejects_leading_zero() {
        assert!(rlp::decode::<U256>(&[0x82, 0x00, 0x01]).is_err());
        assert_eq!(rlp::decode::<U256>(&[0x80]).unwrap(), U256::ZERO);
    }

    #[test]
    fn test_hash_rlp_roundtrip() {
        let original = Hash::blake256(b"test");
        let encoded = rlp::encode(&original);
        assert_eq!(encoded.len(), 33);
        assert_eq!(encoded[0], 0xa0);
        assert_eq!(rlp::decode::<Hash>(&encoded).unwrap(), original);
    }

    #[test]
    fn test_address_rlp_wrong_length() {
        let encoded = rlp::encode(&Hash::ZERO);
        assert!(rlp::decode::<Address>(&encoded).is_err());
    }

    #[test]
    fn test_public_rlp_header() {
        let encoded = rlp::encode(&Public::from_bytes([1u8; 64]));
        assert_eq!(&encoded[..2], &[0xb8, 0x40]);
        assert_eq!(encoded.len(), 66);
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_u256_serde_forms() {
        let value = U256::from(111u64);
        assert_eq!(serde_json::to_string(&value).unwrap(), "\"0x6f\"");
        assert_eq!(serde_json::from_str::<U256>("\"0x6f\"").unwrap(), value);
        assert_eq!(serde_json::from_str::<U256>("\"111\"").unwrap(), value);
        assert_eq!(serde_json::from_str::<U256>("111").unwrap(), value);
        assert!(serde_json::from_str::<U256>("-1").is_err());
        assert!(serde_json::from_str::<U256>("1.5").is_err());
        assert!(serde_json::from_str::<U256>("\"\"").is_err());
        assert!(serde_json::from_str::<U256>("true").is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_hash_serde_requires_prefix() {
        let original = Hash::blake256(b"test");
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(serde_json::from_str::<Hash>(&json).unwrap(), original);

        let unprefixed = format!("\"{}\"", original.to_hex());
        assert!(serde_json::from_str::<Hash>(&unprefixed).is_err());
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_address_serde_is_hex() {
        let original = Address::from_bytes([1u8; 20]);
        let json = serde_json::to_string(&original).unwrap();
        assert_eq!(json, format!("\"0x{}\"", "01".repeat(20)));
        assert_eq!(serde_json::from_str::<Address>(&json).unwrap(), original);
    }
}
