//! Chain connector abstraction.
//!
//! Defines the [`ChainConnector`] trait that every chain backend
//! implements, and provides the Ethereum reference implementation
//! ([`EthereumConnector`]). Callers hold a `dyn ChainConnector` and
//! never branch on the concrete chain.

mod ethereum;

pub use ethereum::EthereumConnector;

use async_trait::async_trait;

use crate::error::CoreError;
use crate::types::{BalanceRecord, BlockSummary, TransactionRecord};

/// Capability set every chain backend must support.
///
/// The error contract is deliberately asymmetric and visible in the
/// signatures: only [`get_latest_block`](Self::get_latest_block)
/// propagates failure. The other three operations absorb every failure
/// into a benign result (`false`, `None`, or a zeroed record) after
/// emitting a diagnostic, so callers always receive a well-formed value.
#[async_trait]
pub trait ChainConnector: Send + Sync {
    /// Probe connectivity to the backing node. Never fails: an
    /// unreachable or erroring node reports as `false`.
    async fn connect(&self) -> bool;

    /// Fetch the most recent block known to the node, including the
    /// identifiers of all its transactions. Unlike the other
    /// operations, failures here propagate to the caller.
    async fn get_latest_block(&self) -> Result<BlockSummary, CoreError>;

    /// Look up a transaction by its hash. Returns `None` both when the
    /// node reports no such transaction and when the lookup itself
    /// fails; the two cases are indistinguishable from the result.
    async fn get_transaction(&self, hash: &str) -> Option<TransactionRecord>;

    /// Look up the native-currency balance of an address. Any failure
    /// degrades to a record with both balance fields zeroed, so a
    /// failed lookup cannot be told apart from a truly empty address.
    async fn get_balance(&self, address: &str) -> BalanceRecord;
}
