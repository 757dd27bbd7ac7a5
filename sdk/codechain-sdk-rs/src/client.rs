//! HTTP client for a CodeChain node's JSON-RPC interface.

use codechain_types::{Address, Asset, AssetScheme, Hash, Invoice, Public, U256};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use crate::config::ClientConfig;
use crate::errors::{Result, SdkError};

/// RPC request.
#[derive(Debug, Serialize)]
struct RpcRequest<'a> {
    jsonrpc: &'static str,
    method: &'a str,
    params: Value,
    id: u64,
}

/// RPC response.
#[derive(Debug, Deserialize)]
struct RpcResponse {
    #[serde(default)]
    result: Value,
    #[serde(default)]
    error: Option<RpcError>,
}

/// RPC error.
#[derive(Debug, Deserialize)]
struct RpcError {
    code: i64,
    message: String,
}

/// CodeChain node client.
///
/// Cloning is cheap; clones share the connection pool and request counter.
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    url: String,
    next_id: Arc<AtomicU64>,
}

impl Client {
    /// Create a client with default settings.
    pub fn new(url: impl Into<String>) -> Self {
        let config = ClientConfig::new(url);
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .unwrap_or_default();

        Self::from_parts(http, config.rpc_url)
    }

    /// Create a client from a validated configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = reqwest::Client::builder().timeout(config.timeout()).build()?;
        Ok(Self::from_parts(http, config.rpc_url))
    }

    fn from_parts(http: reqwest::Client, url: String) -> Self {
        Self {
            http,
            url,
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check that the node answers. A healthy node replies `"pong"`.
    pub async fn ping(&self) -> Result<String> {
        self.request("ping", json!([])).await
    }

    /// Submit signed parcel bytes, returning the parcel hash.
    pub async fn send_signed_parcel(&self, raw: &[u8]) -> Result<Hash> {
        let raw_hex = format!("0x{}", hex::encode(raw));
        self.request("chain_sendSignedParcel", json!([raw_hex])).await
    }

    /// Invoices of a parcel. Unknown parcels yield an empty list.
    pub async fn get_parcel_invoices(&self, parcel_hash: &Hash) -> Result<Vec<Invoice>> {
        let invoices: Option<Vec<Invoice>> = self
            .request("chain_getParcelInvoices", json!([parcel_hash]))
            .await?;
        Ok(invoices.unwrap_or_default())
    }

    pub async fn get_transaction_invoice(&self, transaction_hash: &Hash) -> Result<Option<Invoice>> {
        self.request("chain_getTransactionInvoice", json!([transaction_hash]))
            .await
    }

    /// Regular key of an account at `block`, or at the latest block.
    pub async fn get_regular_key(&self, address: &Address, block: Option<u64>) -> Result<Option<Public>> {
        self.request("chain_getRegularKey", json!([address, block]))
            .await
    }

    pub async fn get_balance(&self, address: &Address, block: Option<u64>) -> Result<Option<U256>> {
        self.request("chain_getBalance", json!([address, block])).await
    }

    pub async fn get_nonce(&self, address: &Address, block: Option<u64>) -> Result<Option<U256>> {
        self.request("chain_getNonce", json!([address, block])).await
    }

    pub async fn get_block_number(&self) -> Result<u64> {
        self.request("chain_getBlockNumber", json!([])).await
    }

    pub async fn get_block_hash(&self, number: u64) -> Result<Option<Hash>> {
        self.request("chain_getBlockHash", json!([number])).await
    }

    /// Block with hash `block_hash`, as reported by the node.
    pub async fn get_block(&self, block_hash: &Hash) -> Result<Option<Value>> {
        self.request("chain_getBlockByHash", json!([block_hash])).await
    }

    /// Signed parcel with hash `parcel_hash`, as reported by the node.
    pub async fn get_parcel(&self, parcel_hash: &Hash) -> Result<Option<Value>> {
        self.request("chain_getParcel", json!([parcel_hash])).await
    }

    /// Parcels waiting in the node's queue.
    pub async fn get_pending_parcels(&self) -> Result<Vec<Value>> {
        let parcels: Option<Vec<Value>> = self.request("chain_getPendingParcels", json!([])).await?;
        Ok(parcels.unwrap_or_default())
    }

    /// Asset scheme registered by the mint with hash `mint_hash`.
    pub async fn get_asset_scheme(&self, mint_hash: &Hash) -> Result<Option<AssetScheme>> {
        self.request("chain_getAssetScheme", json!([mint_hash]))
            .await
    }

    /// Output `index` of transaction `transaction_hash`, if unspent.
    pub async fn get_asset(&self, transaction_hash: &Hash, index: u64) -> Result<Option<Asset>> {
        self.request("chain_getAsset", json!([transaction_hash, index]))
            .await
    }

    /// Make RPC request.
    ///
    /// A `null` result is handed to `T` as is, so methods that may find
    /// nothing return `Option<_>`.
    async fn request<T: DeserializeOwned>(&self, method: &str, params: Value) -> Result<T> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let request = RpcRequest {
            jsonrpc: "2.0",
            method,
            params,
            id,
        };
        tracing::debug!(method, id, "sending rpc request");

        let response_text = self
            .http
            .post(&self.url)
            .json(&request)
            .send()
            .await?
            .text()
            .await?;

        let response: RpcResponse = serde_json::from_str(&response_text)
            .map_err(|e| SdkError::Serialization(format!("Failed to parse response: {}", e)))?;

        if let Some(error) = response.error {
            tracing::warn!("{} failed: {} {}", method, error.code, error.message);
            return Err(SdkError::Rpc {
                code: error.code,
                message: error.message,
            });
        }

        serde_json::from_value(response.result).map_err(|e| {
            SdkError::Serialization(format!("Unexpected result for {}: {}", method, e))
        })
    }
}
