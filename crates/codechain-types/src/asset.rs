//! Asset state reported by a node.

use crate::address::Address;
use crate::hash::Hash;
use crate::u256::U256;

/// An unspent asset output.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Asset {
    asset_type: Hash,
    lock_script_hash: Hash,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::hex_bytes_list"))]
    parameters: Vec<Vec<u8>>,
    amount: U256,
}

impl Asset {
    pub fn new(asset_type: Hash, lock_script_hash: Hash, parameters: Vec<Vec<u8>>, amount: U256) -> Self {
        Self {
            asset_type,
            lock_script_hash,
            parameters,
            amount,
        }
    }

    /// Scheme address of the mint that created this asset.
    pub fn asset_type(&self) -> &Hash {
        &self.asset_type
    }

    pub fn lock_script_hash(&self) -> &Hash {
        &self.lock_script_hash
    }

    pub fn parameters(&self) -> &[Vec<u8>] {
        &self.parameters
    }

    pub fn amount(&self) -> &U256 {
        &self.amount
    }
}

/// A registered asset scheme.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct AssetScheme {
    metadata: String,
    amount: U256,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::nullable"))]
    registrar: Option<Address>,
}

impl AssetScheme {
    pub fn new(metadata: impl Into<String>, amount: U256, registrar: Option<Address>) -> Self {
        Self {
            metadata: metadata.into(),
            amount,
            registrar,
        }
    }

    pub fn metadata(&self) -> &str {
        &self.metadata
    }

    /// Total supply registered by the mint.
    pub fn amount(&self) -> &U256 {
        &self.amount
    }

    pub fn registrar(&self) -> Option<&Address> {
        self.registrar.as_ref()
    }
}
