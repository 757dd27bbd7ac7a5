//! Canonical RLP form of transactions.
//!
//! Every transaction is a list whose first item is its type tag:
//!
//! ```text
//! Payment        [0x01, nonce, sender, receiver, value]
//! SetRegularKey  [0x02, nonce, key]
//! AssetMint      [0x03, metadata, lockScriptHash, [parameters..], [amount?], [registrar?], nonce]
//! AssetTransfer  [0x04, [inputs..], [outputs..], nonce]
//!
//! Input          [prevOut, lockScript, unlockScript]
//! OutPoint       [transactionHash, index, assetType, amount]
//! Output         [lockScriptHash, [parameters..], assetType, amount]
//! ```

use rlp::{Decodable, DecoderError, Encodable, Rlp, RlpStream};

use super::{
    AssetMintTransaction, AssetOutPoint, AssetTransferInput, AssetTransferOutput,
    AssetTransferTransaction, PaymentTransaction, SetRegularKeyTransaction, Transaction,
    TransactionKind,
};
use crate::serialization::rlp_impls::{append_optional, decode_optional};

const PAYMENT_FIELDS: usize = 5;
const SET_REGULAR_KEY_FIELDS: usize = 3;
const ASSET_MINT_FIELDS: usize = 7;
const ASSET_TRANSFER_FIELDS: usize = 4;

fn check_header(rlp: &Rlp<'_>, kind: TransactionKind, fields: usize) -> Result<(), DecoderError> {
    if rlp.item_count()? != fields {
        return Err(DecoderError::RlpIncorrectListLen);
    }
    let tag: u8 = rlp.val_at(0)?;
    if tag != kind.tag() {
        return Err(DecoderError::Custom("unexpected transaction tag"));
    }
    Ok(())
}

impl Encodable for PaymentTransaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(PAYMENT_FIELDS)
            .append(&TransactionKind::Payment.tag())
            .append(&self.nonce)
            .append(&self.sender)
            .append(&self.receiver)
            .append(&self.value);
    }
}

impl Decodable for PaymentTransaction {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        check_header(rlp, TransactionKind::Payment, PAYMENT_FIELDS)?;
        Ok(Self {
            nonce: rlp.val_at(1)?,
            sender: rlp.val_at(2)?,
            receiver: rlp.val_at(3)?,
            value: rlp.val_at(4)?,
        })
    }
}

impl Encodable for SetRegularKeyTransaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(SET_REGULAR_KEY_FIELDS)
            .append(&TransactionKind::SetRegularKey.tag())
            .append(&self.nonce)
            .append(&self.key);
    }
}

impl Decodable for SetRegularKeyTransaction {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        check_header(rlp, TransactionKind::SetRegularKey, SET_REGULAR_KEY_FIELDS)?;
        Ok(Self {
            nonce: rlp.val_at(1)?,
            key: rlp.val_at(2)?,
        })
    }
}

impl Encodable for AssetMintTransaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(ASSET_MINT_FIELDS)
            .append(&TransactionKind::AssetMint.tag())
            .append(&self.metadata)
            .append(&self.lock_script_hash)
            .append_list::<Vec<u8>, Vec<u8>>(&self.parameters);
        append_optional(s, &self.amount);
        append_optional(s, &self.registrar);
        s.append(&self.nonce);
    }
}

impl Decodable for AssetMintTransaction {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        check_header(rlp, TransactionKind::AssetMint, ASSET_MINT_FIELDS)?;
        Ok(Self {
            metadata: rlp.val_at(1)?,
            lock_script_hash: rlp.val_at(2)?,
            parameters: rlp.list_at(3)?,
            amount: decode_optional(&rlp.at(4)?)?,
            registrar: decode_optional(&rlp.at(5)?)?,
            nonce: rlp.val_at(6)?,
        })
    }
}

impl Encodable for AssetOutPoint {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4)
            .append(&self.transaction_hash)
            .append(&self.index)
            .append(&self.asset_type)
            .append(&self.amount);
    }
}

impl Decodable for AssetOutPoint {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if rlp.item_count()? != 4 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            transaction_hash: rlp.val_at(0)?,
            index: rlp.val_at(1)?,
            asset_type: rlp.val_at(2)?,
            amount: rlp.val_at(3)?,
        })
    }
}

impl Encodable for AssetTransferInput {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(3)
            .append(&self.prev_out)
            .append(&self.lock_script)
            .append(&self.unlock_script);
    }
}

impl Decodable for AssetTransferInput {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if rlp.item_count()? != 3 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            prev_out: rlp.val_at(0)?,
            lock_script: rlp.val_at(1)?,
            unlock_script: rlp.val_at(2)?,
        })
    }
}

impl Encodable for AssetTransferOutput {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(4)
            .append(&self.lock_script_hash)
            .append_list::<Vec<u8>, Vec<u8>>(&self.parameters)
            .append(&self.asset_type)
            .append(&self.amount);
    }
}

impl Decodable for AssetTransferOutput {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        if rlp.item_count()? != 4 {
            return Err(DecoderError::RlpIncorrectListLen);
        }
        Ok(Self {
            lock_script_hash: rlp.val_at(0)?,
            parameters: rlp.list_at(1)?,
            asset_type: rlp.val_at(2)?,
            amount: rlp.val_at(3)?,
        })
    }
}

impl Encodable for AssetTransferTransaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        s.begin_list(ASSET_TRANSFER_FIELDS)
            .append(&TransactionKind::AssetTransfer.tag())
            .append_list::<AssetTransferInput, AssetTransferInput>(&self.inputs)
            .append_list::<AssetTransferOutput, AssetTransferOutput>(&self.outputs)
            .append(&self.nonce);
    }
}

impl Decodable for AssetTransferTransaction {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        check_header(rlp, TransactionKind::AssetTransfer, ASSET_TRANSFER_FIELDS)?;
        Self::new(rlp.list_at(1)?, rlp.list_at(2)?, rlp.val_at(3)?)
            .map_err(|_| DecoderError::Custom("invalid asset transfer"))
    }
}

impl Encodable for Transaction {
    fn rlp_append(&self, s: &mut RlpStream) {
        match self {
            Transaction::Payment(tx) => tx.rlp_append(s),
            Transaction::SetRegularKey(tx) => tx.rlp_append(s),
            Transaction::AssetMint(tx) => tx.rlp_append(s),
            Transaction::AssetTransfer(tx) => tx.rlp_append(s),
        }
    }
}

impl Decodable for Transaction {
    fn decode(rlp: &Rlp<'_>) -> Result<Self, DecoderError> {
        let tag: u8 = rlp.val_at(0)?;
        match TransactionKind::from_tag(tag) {
            Some(TransactionKind::Payment) => PaymentTransaction::decode(rlp).map(Transaction::Payment),
            Some(TransactionKind::SetRegularKey) => {
                SetRegularKeyTransaction::decode(rlp).map(Transaction::SetRegularKey)
            }
            Some(TransactionKind::AssetMint) => AssetMintTransaction::decode(rlp).map(Transaction::AssetMint),
            Some(TransactionKind::AssetTransfer) => {
                AssetTransferTransaction::decode(rlp).map(Transaction::AssetTransfer)
            }
            None => Err(DecoderError::Custom("unknown transaction tag")),
        }
    }
}
