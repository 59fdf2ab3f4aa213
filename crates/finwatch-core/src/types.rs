//! Domain types for Finwatch's chain queries.
//!
//! Plain value records produced fresh by every connector call. None of
//! them is mutated after construction and none carries identity beyond
//! its fields.

use rust_decimal::Decimal;
use serde::Serialize;
use time::OffsetDateTime;

// ==============================================================================
// Block Summary
// ==============================================================================

/// Summary of a single block as reported by the node.
///
/// `transactions` holds the `0x…` hex identifier of every transaction in
/// the block, in block order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BlockSummary {
    pub number: u64,
    /// Block timestamp as a UTC instant (the node reports seconds since
    /// the Unix epoch).
    #[serde(with = "time::serde::rfc3339")]
    pub timestamp: OffsetDateTime,
    pub transactions: Vec<String>,
    pub hash: String,
}

// ==============================================================================
// Transaction Record
// ==============================================================================

/// A confirmed or pending transaction, reshaped into display units.
///
/// `to` is `None` for contract-creation transactions. `value_eth` and
/// `gas_price_gwei` are exact fixed-point scalings of the node's wei
/// quantities (10^18 and 10^9 respectively).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    pub hash: String,
    pub from: String,
    pub to: Option<String>,
    pub value_eth: Decimal,
    pub gas: u64,
    pub gas_price_gwei: Decimal,
    pub nonce: u64,
}

// ==============================================================================
// Balance Record
// ==============================================================================

/// Native-currency balance of an address, in both unit representations.
///
/// Invariant: `balance_eth` is always `balance_wei / 10^18` — the raw
/// integer is the single source of truth.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BalanceRecord {
    pub address: String,
    pub balance_eth: Decimal,
    pub balance_wei: u128,
}

impl BalanceRecord {
    /// A record with both balance fields set to zero. This is what a
    /// failed balance lookup degrades to, so a caller cannot tell it
    /// apart from a genuinely empty address.
    pub fn zeroed(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            balance_eth: Decimal::ZERO,
            balance_wei: 0,
        }
    }
}
