//! CodeChain Types - transaction model and wire formats for the CodeChain SDK.
//!
//! This crate provides:
//! - Primitives: `Hash` (H256), `Address` (H160), `Public` (H512), `U256`
//! - The four transaction variants and their canonical RLP encoding
//! - Transaction hashes and derived asset identifiers
//! - The JSON wire form exchanged with a node
//! - Query results: `Asset`, `AssetScheme`, `Invoice`

pub mod address;
pub mod hash;
pub mod public;
pub mod u256;
pub mod asset;
pub mod asset_address;
pub mod invoice;
pub mod transaction;
pub mod error;

mod serialization;

pub use address::Address;
pub use hash::Hash;
pub use public::Public;
pub use u256::U256;
pub use asset::{Asset, AssetScheme};
pub use asset_address::{AssetAddress, AssetSchemeAddress};
pub use invoice::{Invoice, InvoiceOutcome};
pub use transaction::{
    AssetMintTransaction, AssetOutPoint, AssetTransferInput, AssetTransferOutput,
    AssetTransferTransaction, PaymentTransaction, SetRegularKeyTransaction, Transaction,
    TransactionKind,
};
pub use error::TypesError;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::{
        Address, Hash, Public, U256,
        Asset, AssetScheme, AssetAddress, AssetSchemeAddress,
        Invoice, InvoiceOutcome,
        Transaction, TransactionKind,
        PaymentTransaction, SetRegularKeyTransaction, AssetMintTransaction,
        AssetTransferTransaction, AssetTransferInput, AssetTransferOutput, AssetOutPoint,
        TypesError,
    };
}
