//! Ethereum realization of the chain connector contract.

use std::sync::Arc;

use async_trait::async_trait;
use time::OffsetDateTime;
use tracing::{debug, warn};

use crate::error::CoreError;
use crate::rpc::types::{RawBlock, RawTransaction};
use crate::rpc::{EthereumRpc, HttpRpcClient};
use crate::types::{BalanceRecord, BlockSummary, TransactionRecord};
use crate::units::{parse_quantity, wei_to_eth, wei_to_gwei};

/// [`ChainConnector`] backend for Ethereum-compatible nodes.
///
/// Delegates every operation to a single owned [`EthereumRpc`] handle
/// and reshapes the node's hex-string wire types into domain records.
/// Holds no mutable state, so instances can be shared across tasks
/// without synchronization.
pub struct EthereumConnector {
    rpc: Arc<dyn EthereumRpc>,
}

impl EthereumConnector {
    /// Connect-lazily construct a connector against `node_url`.
    ///
    /// `api_key`, when set, is passed through to the RPC client as a
    /// bearer credential. The URL is validated but not contacted;
    /// reachability is only established by [`ChainConnector::connect`].
    pub fn new(node_url: &str, api_key: Option<&str>) -> Result<Self, CoreError> {
        Ok(Self {
            rpc: Arc::new(HttpRpcClient::new(node_url, api_key)?),
        })
    }

    /// Build a connector over any RPC backend (test mocks included).
    pub fn with_rpc(rpc: Arc<dyn EthereumRpc>) -> Self {
        Self { rpc }
    }

    fn summarize_block(raw: RawBlock) -> Result<BlockSummary, CoreError> {
        let number = parse_u64(&raw.number, "block number")?;
        let seconds = i64::try_from(parse_quantity(&raw.timestamp)?).map_err(|_| {
            CoreError::InvalidResponse(format!("block timestamp out of range: {}", raw.timestamp))
        })?;
        let timestamp = OffsetDateTime::from_unix_timestamp(seconds).map_err(|e| {
            CoreError::InvalidResponse(format!("invalid block timestamp {seconds}: {e}"))
        })?;
        let transactions = raw
            .transactions
            .iter()
            .map(|item| item.hex_id())
            .collect();

        Ok(BlockSummary {
            number,
            timestamp,
            transactions,
            hash: raw.hash,
        })
    }

    fn record_transaction(raw: RawTransaction) -> Result<TransactionRecord, CoreError> {
        Ok(TransactionRecord {
            value_eth: wei_to_eth(parse_quantity(&raw.value)?)?,
            gas: parse_u64(&raw.gas, "gas")?,
            gas_price_gwei: wei_to_gwei(parse_quantity(&raw.gas_price)?)?,
            nonce: parse_u64(&raw.nonce, "nonce")?,
            hash: raw.hash,
            from: raw.from,
            to: raw.to,
        })
    }

    async fn fetch_balance(&self, address: &str) -> Result<BalanceRecord, CoreError> {
        let wei = self.rpc.balance(address).await?;
        Ok(BalanceRecord {
            address: address.to_owned(),
            balance_eth: wei_to_eth(wei)?,
            balance_wei: wei,
        })
    }
}

#[async_trait]
impl super::ChainConnector for EthereumConnector {
    async fn connect(&self) -> bool {
        match self.rpc.client_version().await {
            Ok(version) => {
                debug!(node.version = %version, "node reachable");
                true
            }
            Err(error) => {
                warn!(%error, "connection check failed");
                false
            }
        }
    }

    async fn get_latest_block(&self) -> Result<BlockSummary, CoreError> {
        let raw = self.rpc.latest_block().await?;
        Self::summarize_block(raw)
    }

    async fn get_transaction(&self, hash: &str) -> Option<TransactionRecord> {
        match self.rpc.transaction_by_hash(hash).await {
            Ok(Some(raw)) => match Self::record_transaction(raw) {
                Ok(record) => Some(record),
                Err(error) => {
                    warn!(tx.hash = hash, %error, "discarding malformed transaction");
                    None
                }
            },
            Ok(None) => None,
            Err(error) => {
                warn!(tx.hash = hash, %error, "transaction lookup failed");
                None
            }
        }
    }

    async fn get_balance(&self, address: &str) -> BalanceRecord {
        match self.fetch_balance(address).await {
            Ok(record) => record,
            Err(error) => {
                warn!(%address, %error, "balance lookup failed; reporting zero");
                BalanceRecord::zeroed(address)
            }
        }
    }
}

fn parse_u64(raw: &str, field: &str) -> Result<u64, CoreError> {
    let value = parse_quantity(raw)?;
    u64::try_from(value)
        .map_err(|_| CoreError::InvalidResponse(format!("{field} out of range: {raw}")))
}
