//! Asset identifiers derived from a transaction hash.
//!
//! Both kinds are a keyed BLAKE2b-256 of the transaction hash, keyed by the
//! output index (`[0u8; 8] || index_be`), with the first eight bytes replaced
//! by a one-byte type prefix followed by zeros. Asset scheme addresses use
//! the reserved index `u64::MAX` and prefix `'S'`; asset addresses use the
//! real output index and prefix `'A'`.

use crate::error::TypesError;
use crate::hash::Hash;
use std::fmt;

const PREFIX_LEN: usize = 8;

fn derive(transaction_hash: &Hash, index: u64, prefix: u8) -> Hash {
    let mut key = [0u8; 16];
    key[8..].copy_from_slice(&index.to_be_bytes());

    // A 16-byte key is always within the BLAKE2b key limit.
    let digest = codechain_crypto::blake256_with_key(transaction_hash.as_bytes(), &key)
        .map(Hash::from_bytes)
        .unwrap_or_else(|_| unreachable!("16-byte key is accepted"));

    let mut bytes = *digest.as_bytes();
    bytes[0] = prefix;
    bytes[1..PREFIX_LEN].fill(0);
    Hash::from_bytes(bytes)
}

fn check_prefix(hash: &Hash, prefix: u8) -> bool {
    let bytes = hash.as_bytes();
    bytes[0] == prefix && bytes[1..PREFIX_LEN].iter().all(|&b| b == 0)
}

macro_rules! asset_identifier {
    ($name:ident, $prefix:expr, $label:expr) => {
        #[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        #[cfg_attr(feature = "serde", serde(try_from = "Hash", into = "Hash"))]
        pub struct $name(Hash);

        impl $name {
            /// Type prefix stored in the first byte.
            pub const PREFIX: u8 = $prefix;

            pub fn is_valid_prefix(hash: &Hash) -> bool {
                check_prefix(hash, Self::PREFIX)
            }

            /// Wrap a node-reported value, checking its type prefix.
            pub fn from_hash(hash: Hash) -> Result<Self, TypesError> {
                if Self::is_valid_prefix(&hash) {
                    Ok(Self(hash))
                } else {
                    Err(TypesError::InvalidAddressFormat(format!(
                        "{} must start with 0x{:02x} followed by seven zero bytes: {}",
                        $label,
                        Self::PREFIX,
                        hash
                    )))
                }
            }

            pub fn as_hash(&self) -> &Hash {
                &self.0
            }

            pub fn into_hash(self) -> Hash {
                self.0
            }
        }

        impl TryFrom<Hash> for $name {
            type Error = TypesError;

            fn try_from(hash: Hash) -> Result<Self, Self::Error> {
                Self::from_hash(hash)
            }
        }

        impl From<$name> for Hash {
            fn from(value: $name) -> Hash {
                value.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

asset_identifier!(AssetSchemeAddress, b'S', "asset scheme address");
asset_identifier!(AssetAddress, b'A', "asset address");

impl AssetSchemeAddress {
    /// Index reserved for the scheme itself.
    pub const SCHEME_INDEX: u64 = u64::MAX;

    /// Derive the scheme address registered by an asset mint.
    pub fn new(mint_hash: &Hash) -> Self {
        Self(derive(mint_hash, Self::SCHEME_INDEX, Self::PREFIX))
    }
}

impl AssetAddress {
    /// Derive the address of output `index` of a transaction.
    pub fn new(transaction_hash: &Hash, index: u64) -> Self {
        Self(derive(transaction_hash, index, Self::PREFIX))
    }
}
