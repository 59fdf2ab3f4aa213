pub mod connector;
pub mod error;
pub mod rpc;
pub mod types;
pub mod units;

#[cfg(test)]
pub(crate) mod test_util;

pub use connector::{ChainConnector, EthereumConnector};
pub use error::CoreError;
pub use types::{BalanceRecord, BlockSummary, TransactionRecord};
