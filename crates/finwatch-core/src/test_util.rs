//! Shared test helpers for `finwatch-core` unit tests.
//!
//! Builder functions for wire types (`raw_tx`, `raw_block`) so that
//! tests across modules share a single source of truth for dummy data
//! construction.

use crate::rpc::types::{BlockTxItem, RawBlock, RawTransaction};

/// A minimal valid transaction with the given hash and sane defaults:
/// a 1 ETH transfer at 1 gwei with a 21000 gas limit.
pub fn raw_tx(hash: &str) -> RawTransaction {
    RawTransaction {
        hash: hash.to_owned(),
        from: "0x00000000000000000000000000000000000000aa".to_owned(),
        to: Some("0x00000000000000000000000000000000000000bb".to_owned()),
        value: quantity(1_000_000_000_000_000_000),
        gas: quantity(21_000),
        gas_price: quantity(1_000_000_000),
        nonce: quantity(0),
    }
}

/// A block with the given number, epoch-seconds timestamp, and
/// transaction list.
pub fn raw_block(number: u64, timestamp: u64, transactions: Vec<BlockTxItem>) -> RawBlock {
    RawBlock {
        number: quantity(number as u128),
        hash: "0x00000000000000000000000000000000000000000000000000000000000000b1".to_owned(),
        timestamp: quantity(timestamp as u128),
        transactions,
    }
}

/// Format an integer as a JSON-RPC hex quantity.
pub fn quantity(value: u128) -> String {
    format!("{value:#x}")
}
