use crate::asset_address::AssetAddress;
use crate::error::TypesError;
use crate::hash::Hash;
use crate::u256::U256;
use std::collections::HashSet;

/// Reference to an output of an earlier mint or transfer.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct AssetOutPoint {
    pub(crate) transaction_hash: Hash,
    pub(crate) index: u64,
    pub(crate) asset_type: Hash,
    pub(crate) amount: U256,
}

impl AssetOutPoint {
    pub fn new(transaction_hash: Hash, index: u64, asset_type: Hash, amount: U256) -> Self {
        Self {
            transaction_hash,
            index,
            asset_type,
            amount,
        }
    }

    pub fn transaction_hash(&self) -> &Hash {
        &self.transaction_hash
    }

    /// Zero-based position in the producing transaction's outputs.
    pub fn index(&self) -> u64 {
        self.index
    }

    pub fn asset_type(&self) -> &Hash {
        &self.asset_type
    }

    pub fn amount(&self) -> &U256 {
        &self.amount
    }

    /// Address of the asset this out-point spends.
    pub fn asset_address(&self) -> AssetAddress {
        AssetAddress::new(&self.transaction_hash, self.index)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct AssetTransferInput {
    pub(crate) prev_out: AssetOutPoint,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::hex_bytes"))]
    pub(crate) lock_script: Vec<u8>,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::hex_bytes"))]
    pub(crate) unlock_script: Vec<u8>,
}

impl AssetTransferInput {
    pub fn new(prev_out: AssetOutPoint, lock_script: Vec<u8>, unlock_script: Vec<u8>) -> Self {
        Self {
            prev_out,
            lock_script,
            unlock_script,
        }
    }

    pub fn prev_out(&self) -> &AssetOutPoint {
        &self.prev_out
    }

    pub fn lock_script(&self) -> &[u8] {
        &self.lock_script
    }

    pub fn unlock_script(&self) -> &[u8] {
        &self.unlock_script
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct AssetTransferOutput {
    pub(crate) lock_script_hash: Hash,
    #[cfg_attr(feature = "serde", serde(with = "crate::serialization::serde_impls::hex_bytes_list"))]
    pub(crate) parameters: Vec<Vec<u8>>,
    pub(crate) asset_type: Hash,
    pub(crate) amount: U256,
}

impl AssetTransferOutput {
    pub fn new(lock_script_hash: Hash, parameters: Vec<Vec<u8>>, asset_type: Hash, amount: U256) -> Self {
        Self {
            lock_script_hash,
            parameters,
            asset_type,
            amount,
        }
    }

    pub fn lock_script_hash(&self) -> &Hash {
        &self.lock_script_hash
    }

    pub fn parameters(&self) -> &[Vec<u8>] {
        &self.parameters
    }

    pub fn asset_type(&self) -> &Hash {
        &self.asset_type
    }

    pub fn amount(&self) -> &U256 {
        &self.amount
    }
}

/// Spend asset out-points into new outputs.
///
/// Inputs and outputs keep the order they were given in; the order is part
/// of the transaction's identity.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", try_from = "AssetTransferFields"))]
pub struct AssetTransferTransaction {
    pub(crate) inputs: Vec<AssetTransferInput>,
    pub(crate) outputs: Vec<AssetTransferOutput>,
    pub(crate) nonce: U256,
}

impl AssetTransferTransaction {
    /// Build a transfer, rejecting an empty input list or an out-point
    /// spent twice.
    pub fn new(
        inputs: Vec<AssetTransferInput>,
        outputs: Vec<AssetTransferOutput>,
        nonce: U256,
    ) -> Result<Self, TypesError> {
        if inputs.is_empty() {
            return Err(TypesError::InvalidTransaction(
                "asset transfer has no inputs".to_string(),
            ));
        }

        let mut spent = HashSet::with_capacity(inputs.len());
        for input in &inputs {
            let prev_out = &input.prev_out;
            if !spent.insert((prev_out.transaction_hash, prev_out.index)) {
                return Err(TypesError::InvalidTransaction(format!(
                    "out-point {}:{} is spent twice",
                    prev_out.transaction_hash, prev_out.index
                )));
            }
        }

        Ok(Self {
            inputs,
            outputs,
            nonce,
        })
    }

    pub fn inputs(&self) -> &[AssetTransferInput] {
        &self.inputs
    }

    pub fn outputs(&self) -> &[AssetTransferOutput] {
        &self.outputs
    }

    pub fn nonce(&self) -> &U256 {
        &self.nonce
    }

    /// BLAKE2b-256 of the RLP encoding
    pub fn hash(&self) -> Hash {
        Hash::blake256(&rlp::encode(self))
    }

    /// Address of the asset created at output `index`.
    pub fn asset_address(&self, index: u64) -> AssetAddress {
        AssetAddress::new(&self.hash(), index)
    }
}

/// Unchecked wire shape, validated through `AssetTransferTransaction::new`.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct AssetTransferFields {
    inputs: Vec<AssetTransferInput>,
    outputs: Vec<AssetTransferOutput>,
    nonce: U256,
}

#[cfg(feature = "serde")]
impl TryFrom<AssetTransferFields> for AssetTransferTransaction {
    type Error = TypesError;

    fn try_from(fields: AssetTransferFields) -> Result<Self, Self::Error> {
        Self::new(fields.inputs, fields.outputs, fields.nonce)
    }
}
