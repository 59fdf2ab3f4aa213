//! Ethereum node RPC abstraction layer.
//!
//! Defines the [`EthereumRpc`] trait and provides an HTTP JSON-RPC
//! implementation ([`HttpRpcClient`]) plus a test mock (`mock::MockRpc`).

mod http_adapter;
#[cfg(test)]
pub mod mock;
pub mod types;

pub use http_adapter::HttpRpcClient;
pub use types::{BlockTxItem, RawBlock, RawTransaction};

use async_trait::async_trait;

use crate::error::CoreError;

/// Minimal trait covering the Ethereum node RPC methods that Finwatch
/// needs. Any client exposing this capability set can be substituted.
///
/// Implementations are expected to handle authentication, connection
/// management, and response deserialization internally.
#[async_trait]
pub trait EthereumRpc: Send + Sync {
    /// Liveness probe: fetch the node's client version string
    /// (`web3_clientVersion`). Any `Ok` response means the node is
    /// reachable and responsive.
    async fn client_version(&self) -> Result<String, CoreError>;

    /// Fetch the most recent block known to the node with full
    /// transaction bodies (`eth_getBlockByNumber("latest", true)`).
    async fn latest_block(&self) -> Result<RawBlock, CoreError>;

    /// Fetch a transaction by its `0x…` hash. Returns `None` when the
    /// node reports no such transaction (JSON `null` result).
    async fn transaction_by_hash(&self, hash: &str) -> Result<Option<RawTransaction>, CoreError>;

    /// Fetch the raw wei balance of an address at the latest block.
    async fn balance(&self, address: &str) -> Result<u128, CoreError>;
}
