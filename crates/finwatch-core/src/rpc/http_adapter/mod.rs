//! Native JSON-RPC client for Ethereum-compatible endpoints.
//!
//! Implements [`EthereumRpc`](super::EthereumRpc) over JSON-RPC 2.0
//! using `reqwest`, with HTTP(S) transport and optional bearer-token
//! authentication. One request per call: batching, retries, and rate
//! limiting are deliberately out of scope.

mod client;
mod connection;
mod protocol;

pub use client::HttpRpcClient;
