//! JSON wire form of transactions.
//!
//! ```text
//! { "payment":       { nonce, sender, receiver, value } }
//! { "setRegularKey": { nonce, key } }
//! { "assetMint":     { metadata, lockScriptHash, parameters, amount, registrar, nonce } }
//! { "assetTransfer": { inputs, outputs, nonce } }
//! ```
//!
//! The wrapper must hold exactly one known key. Optional fields are always
//! present and `null` when absent.

use serde::Deserialize;
use serde_json::Value;

use super::Transaction;
use crate::error::TypesError;

impl Transaction {
    /// Serialize to the tagged wire object.
    pub fn to_json(&self) -> Result<Value, TypesError> {
        Ok(serde_json::to_value(self)?)
    }

    /// Decode a tagged wire object.
    pub fn from_json(value: &Value) -> Result<Self, TypesError> {
        if let Value::Object(map) = value {
            if map.len() != 1 {
                let keys: Vec<&str> = map.keys().map(String::as_str).collect();
                return Err(TypesError::Decode(format!(
                    "unexpected transaction keys: {:?}",
                    keys
                )));
            }
        }
        Ok(Transaction::deserialize(value)?)
    }

    /// Decode a tagged wire object from JSON text.
    pub fn from_json_str(s: &str) -> Result<Self, TypesError> {
        let value: Value = serde_json::from_str(s)?;
        Self::from_json(&value)
    }
}
