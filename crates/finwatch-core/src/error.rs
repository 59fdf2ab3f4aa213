use thiserror::Error;

/// Hard failure surfaced to callers.
///
/// Only [`ChainConnector::get_latest_block`](crate::connector::ChainConnector::get_latest_block)
/// propagates this type; the other connector operations absorb it into a
/// degraded result (`false`, `None`, or a zeroed record) after logging.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("RPC communication failure: {0}")]
    Rpc(#[from] RpcError),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("invalid response data: {0}")]
    InvalidResponse(String),
}

/// Failure inside the JSON-RPC client itself.
#[derive(Debug, Error)]
pub enum RpcError {
    /// HTTP-level failure: connect, timeout, TLS, body read.
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The node answered, but not with a decodable JSON-RPC envelope.
    #[error("invalid JSON-RPC response: {0}")]
    InvalidResponse(String),

    /// The node returned a JSON-RPC error object.
    #[error("node returned error {code}: {message}")]
    ServerError { code: i64, message: String },
}
