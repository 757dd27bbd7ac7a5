//! Transactions accepted by the ledger.
//!
//! `Transaction` is a closed set of four variants. Each variant has a fixed
//! RLP layout (see [`encoding`]) whose BLAKE2b-256 digest is the transaction
//! hash, and a JSON form wrapped in a single key naming the variant.

mod account;
mod asset_mint;
mod asset_transfer;
pub mod encoding;
#[cfg(feature = "serde")]
mod json;

pub use account::{PaymentTransaction, SetRegularKeyTransaction};
pub use asset_mint::AssetMintTransaction;
pub use asset_transfer::{
    AssetOutPoint, AssetTransferInput, AssetTransferOutput, AssetTransferTransaction,
};

use crate::error::TypesError;
use crate::hash::Hash;
use crate::u256::U256;
use std::fmt;

/// Discriminant of a [`Transaction`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TransactionKind {
    Payment,
    SetRegularKey,
    AssetMint,
    AssetTransfer,
}

impl TransactionKind {
    /// Leading RLP item of the encoded transaction.
    pub const fn tag(self) -> u8 {
        match self {
            Self::Payment => 0x01,
            Self::SetRegularKey => 0x02,
            Self::AssetMint => 0x03,
            Self::AssetTransfer => 0x04,
        }
    }

    pub const fn from_tag(tag: u8) -> Option<Self> {
        match tag {
            0x01 => Some(Self::Payment),
            0x02 => Some(Self::SetRegularKey),
            0x03 => Some(Self::AssetMint),
            0x04 => Some(Self::AssetTransfer),
            _ => None,
        }
    }

    /// Key of the JSON wrapper object.
    pub const fn json_key(self) -> &'static str {
        match self {
            Self::Payment => "payment",
            Self::SetRegularKey => "setRegularKey",
            Self::AssetMint => "assetMint",
            Self::AssetTransfer => "assetTransfer",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.json_key())
    }
}

/// A transaction in one of the four supported shapes.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub enum Transaction {
    Payment(PaymentTransaction),
    SetRegularKey(SetRegularKeyTransaction),
    AssetMint(AssetMintTransaction),
    AssetTransfer(AssetTransferTransaction),
}

impl Transaction {
    pub fn kind(&self) -> TransactionKind {
        match self {
            Transaction::Payment(_) => TransactionKind::Payment,
            Transaction::SetRegularKey(_) => TransactionKind::SetRegularKey,
            Transaction::AssetMint(_) => TransactionKind::AssetMint,
            Transaction::AssetTransfer(_) => TransactionKind::AssetTransfer,
        }
    }

    pub fn nonce(&self) -> &U256 {
        match self {
            Transaction::Payment(tx) => tx.nonce(),
            Transaction::SetRegularKey(tx) => tx.nonce(),
            Transaction::AssetMint(tx) => tx.nonce(),
            Transaction::AssetTransfer(tx) => tx.nonce(),
        }
    }

    /// Canonical RLP bytes.
    pub fn rlp_bytes(&self) -> Vec<u8> {
        rlp::encode(self).to_vec()
    }

    /// Decode canonical RLP bytes. The input must hold exactly one transaction.
    pub fn decode_rlp(bytes: &[u8]) -> Result<Self, TypesError> {
        let rlp = rlp::Rlp::new(bytes);
        let total = rlp.payload_info()?.total();
        if total != bytes.len() {
            return Err(TypesError::Rlp(format!(
                "expected {} bytes, got {}",
                total,
                bytes.len()
            )));
        }
        Ok(rlp.as_val()?)
    }

    /// BLAKE2b-256 of the canonical RLP bytes.
    pub fn hash(&self) -> Hash {
        Hash::blake256(&self.rlp_bytes())
    }
}

impl From<PaymentTransaction> for Transaction {
    fn from(tx: PaymentTransaction) -> Self {
        Transaction::Payment(tx)
    }
}

impl From<SetRegularKeyTransaction> for Transaction {
    fn from(tx: SetRegularKeyTransaction) -> Self {
        Transaction::SetRegularKey(tx)
    }
}

impl From<AssetMintTransaction> for Transaction {
    fn from(tx: AssetMintTransaction) -> Self {
        Transaction::AssetMint(tx)
    }
}

impl From<AssetTransferTransaction> for Transaction {
    fn from(tx: AssetTransferTransaction) -> Self {
        Transaction::AssetTransfer(tx)
    }
}

impl fmt::Display for Transaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {{ nonce: {}, hash: {} }}", self.kind(), self.nonce(), self.hash())
    }
}
