//! Wire types for Ethereum JSON-RPC responses.
//!
//! The node reports every quantity as a `0x…` hex string, so these
//! structs keep the wire representation verbatim; the connector layer
//! owns the conversion into domain records.

use serde::Deserialize;

use crate::units::hex_encode;

// ==============================================================================
// Raw Block
// ==============================================================================

/// An `eth_getBlockByNumber` result, limited to the fields Finwatch uses.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawBlock {
    /// Block number, hex quantity.
    pub number: String,
    /// Block hash, `0x…` hex string.
    pub hash: String,
    /// Seconds since the Unix epoch, hex quantity.
    pub timestamp: String,
    #[serde(default)]
    pub transactions: Vec<BlockTxItem>,
}

// ==============================================================================
// Raw Transaction
// ==============================================================================

/// An `eth_getTransactionByHash` result (also embedded in blocks fetched
/// with full transaction bodies).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    pub hash: String,
    pub from: String,
    /// `null` for contract-creation transactions.
    pub to: Option<String>,
    /// Transferred amount in wei, hex quantity.
    pub value: String,
    /// Gas limit, hex quantity.
    pub gas: String,
    /// Gas price in wei, hex quantity.
    pub gas_price: String,
    /// Sender sequence number, hex quantity.
    pub nonce: String,
}

// ==============================================================================
// Block Transaction Items
// ==============================================================================

/// One entry of a block's transaction list.
///
/// Depending on the node and the expansion flag, entries arrive as a
/// pre-encoded hex hash, a full transaction object, or a raw byte
/// sequence. [`BlockTxItem::hex_id`] normalizes all three to the same
/// hex identifier.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockTxItem {
    Hash(String),
    Bytes(Vec<u8>),
    Full(RawTransaction),
}

impl BlockTxItem {
    /// The `0x…` hex identifier of this transaction.
    pub fn hex_id(&self) -> String {
        match self {
            Self::Hash(hash) => hash.clone(),
            Self::Bytes(bytes) => format!("0x{}", hex_encode(bytes)),
            Self::Full(tx) => tx.hash.clone(),
        }
    }
}
