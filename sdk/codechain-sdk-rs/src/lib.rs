//! CodeChain Rust SDK
//!
//! Async JSON-RPC client for a CodeChain node.
//!
//! # Example
//! ```rust,ignore
//! use codechain_sdk::{Client, ClientConfig};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = Client::with_config(ClientConfig::from_env()).unwrap();
//!     let block_number = client.get_block_number().await.unwrap();
//!     println!("Current block: {}", block_number);
//! }
//! ```

pub mod client;
pub mod config;
pub mod errors;

pub use client::Client;
pub use config::ClientConfig;
pub use errors::{Result, SdkError};

/// Re-export codechain-types for convenience
pub use codechain_types::{
    Address, Asset, AssetScheme, Hash, Invoice, InvoiceOutcome, Public, Transaction, U256,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sdk_imports() {
        let _addr = Address::default();
        let _hash = Hash::ZERO;
        let _config = ClientConfig::default();
    }
}
