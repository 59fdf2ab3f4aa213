use std::collections::HashMap;

use async_trait::async_trait;

use crate::error::{CoreError, RpcError};

use super::types::{RawBlock, RawTransaction};
use super::EthereumRpc;

/// A mock Ethereum RPC backend for testing. Returns canned data
/// populated via the builder pattern, or fails every call when built
/// with [`MockRpc::failing`] to simulate an unreachable node.
pub struct MockRpc {
    latest_block: Option<RawBlock>,
    transactions: HashMap<String, RawTransaction>,
    balances: HashMap<String, u128>,
    fail_all: bool,
}

impl MockRpc {
    pub fn builder() -> MockRpcBuilder {
        MockRpcBuilder {
            latest_block: None,
            transactions: HashMap::new(),
            balances: HashMap::new(),
        }
    }

    /// A backend where every RPC method returns a server error, as if
    /// the node rejected each call.
    pub fn failing() -> Self {
        Self {
            latest_block: None,
            transactions: HashMap::new(),
            balances: HashMap::new(),
            fail_all: true,
        }
    }

    fn mock_failure() -> CoreError {
        CoreError::Rpc(RpcError::ServerError {
            code: -32000,
            message: "mock node failure".to_owned(),
        })
    }
}

pub struct MockRpcBuilder {
    latest_block: Option<RawBlock>,
    transactions: HashMap<String, RawTransaction>,
    balances: HashMap<String, u128>,
}

impl MockRpcBuilder {
    pub fn with_latest_block(mut self, block: RawBlock) -> Self {
        self.latest_block = Some(block);
        self
    }

    pub fn with_tx(mut self, tx: RawTransaction) -> Self {
        self.transactions.insert(tx.hash.clone(), tx);
        self
    }

    pub fn with_balance(mut self, address: &str, wei: u128) -> Self {
        self.balances.insert(address.to_owned(), wei);
        self
    }

    pub fn build(self) -> MockRpc {
        MockRpc {
            latest_block: self.latest_block,
            transactions: self.transactions,
            balances: self.balances,
            fail_all: false,
        }
    }
}

#[async_trait]
impl EthereumRpc for MockRpc {
    async fn client_version(&self) -> Result<String, CoreError> {
        if self.fail_all {
            return Err(Self::mock_failure());
        }
        Ok("MockEthereum/v0.1.0".to_owned())
    }

    async fn latest_block(&self) -> Result<RawBlock, CoreError> {
        if self.fail_all {
            return Err(Self::mock_failure());
        }
        self.latest_block.clone().ok_or_else(|| {
            CoreError::InvalidResponse("mock has no canned latest block".to_owned())
        })
    }

    async fn transaction_by_hash(&self, hash: &str) -> Result<Option<RawTransaction>, CoreError> {
        if self.fail_all {
            return Err(Self::mock_failure());
        }
        Ok(self.transactions.get(hash).cloned())
    }

    async fn balance(&self, address: &str) -> Result<u128, CoreError> {
        if self.fail_all {
            return Err(Self::mock_failure());
        }
        // Real nodes report unknown addresses as zero rather than erroring.
        Ok(self.balances.get(address).copied().unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::*;

    #[tokio::test]
    async fn canned_transaction_is_returned_by_hash() {
        let rpc = MockRpc::builder().with_tx(raw_tx("0xaa")).build();
        let tx = rpc
            .transaction_by_hash("0xaa")
            .await
            .unwrap()
            .expect("canned tx must exist");
        assert_eq!(tx.hash, "0xaa");
        assert!(rpc.transaction_by_hash("0xbb").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn unknown_address_reports_zero_balance() {
        let rpc = MockRpc::builder().build();
        assert_eq!(rpc.balance("0xnobody").await.unwrap(), 0);
    }

    #[tokio::test]
    async fn failing_backend_errors_on_every_method() {
        let rpc = MockRpc::failing();
        assert!(rpc.client_version().await.is_err());
        assert!(rpc.latest_block().await.is_err());
        assert!(rpc.transaction_by_hash("0xaa").await.is_err());
        assert!(rpc.balance("0xabc").await.is_err());
    }
}
