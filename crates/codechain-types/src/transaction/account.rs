//! Account-level transactions: value payments and regular key changes.

use crate::address::Address;
use crate::hash::Hash;
use crate::public::Public;
use crate::u256::U256;

/// Transfer `value` from `sender` to `receiver`.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct PaymentTransaction {
    pub(crate) nonce: U256,
    pub(crate) sender: Address,
    pub(crate) receiver: Address,
    pub(crate) value: U256,
}

impl PaymentTransaction {
    pub fn new(nonce: U256, sender: Address, receiver: Address, value: U256) -> Self {
        Self {
            nonce,
            sender,
            receiver,
            value,
        }
    }

    pub fn nonce(&self) -> &U256 {
        &self.nonce
    }

    pub fn sender(&self) -> &Address {
        &self.sender
    }

    pub fn receiver(&self) -> &Address {
        &self.receiver
    }

    pub fn value(&self) -> &U256 {
        &self.value
    }

    /// BLAKE2b-256 of the RLP encoding
    pub fn hash(&self) -> Hash {
        Hash::blake256(&rlp::encode(self))
    }
}

/// Register `key` as the regular key of the signing account.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", deny_unknown_fields))]
pub struct SetRegularKeyTransaction {
    pub(crate) nonce: U256,
    pub(crate) key: Public,
}

impl SetRegularKeyTransaction {
    pub fn new(nonce: U256, key: Public) -> Self {
        Self { nonce, key }
    }

    pub fn nonce(&self) -> &U256 {
        &self.nonce
    }

    pub fn key(&self) -> &Public {
        &self.key
    }

    /// BLAKE2b-256 of the RLP encoding
    pub fn hash(&self) -> Hash {
        Hash::blake256(&rlp::encode(self))
    }
}
