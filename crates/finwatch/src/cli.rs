use clap::{Parser, Subcommand};

/// Finwatch — query chain state (latest block, transactions, balances)
/// from an Ethereum-compatible node.
#[derive(Parser)]
#[command(version, about)]
pub struct Cli {
    /// Node RPC URL.
    #[arg(long, default_value = "http://127.0.0.1:8545", env = "FINWATCH_NODE_URL")]
    pub node_url: String,

    /// API key (optional; not needed for token-in-URL providers).
    #[arg(long, env = "FINWATCH_API_KEY")]
    pub api_key: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Probe node connectivity and report the result.
    Status,
    /// Show the latest block and its transaction identifiers.
    Block,
    /// Look up a transaction by its 0x-prefixed hash.
    Tx {
        /// Transaction hash.
        hash: String,
    },
    /// Show the native-currency balance of an address.
    Balance {
        /// Account address.
        address: String,
    },
}
