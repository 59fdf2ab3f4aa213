use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use async_trait::async_trait;
use reqwest::header;
use tracing::{debug, trace};

use crate::error::{CoreError, RpcError};
use crate::units::parse_quantity;

use super::super::types::{RawBlock, RawTransaction};
use super::super::EthereumRpc;
use super::connection::parse_connection;
use super::protocol::{parse_jsonrpc_error, JsonRpcRequest, JsonRpcResponse};

/// Ethereum JSON-RPC client over HTTP(S).
///
/// Holds a single `reqwest::Client` for the connector's lifetime; no
/// pooling beyond what `reqwest` does internally, no reconnection
/// logic, no retries. Safe to share across tasks.
pub struct HttpRpcClient {
    client: reqwest::Client,
    url: String,
    api_key: Option<String>,
    next_id: AtomicU64,
}

impl HttpRpcClient {
    /// Create a new client for an `http://` or `https://` endpoint.
    ///
    /// `api_key`, when set, is sent as a bearer `Authorization` header
    /// on every request. Providers using token-in-URL authentication
    /// need no key here. Construction validates the URL but performs no
    /// network I/O.
    pub fn new(node_url: &str, api_key: Option<&str>) -> Result<Self, CoreError> {
        let url = parse_connection(node_url)?;

        let client = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(10))
            .timeout(Duration::from_secs(30))
            .tcp_nodelay(true)
            .build()
            .expect("reqwest client builder uses valid static config");

        Ok(Self {
            client,
            url,
            api_key: api_key.map(str::to_owned),
            next_id: AtomicU64::new(initial_request_id()),
        })
    }

    async fn rpc_call(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<serde_json::Value, CoreError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        debug!(
            rpc.id = id,
            rpc.method = method,
            rpc.params = params.len(),
            "rpc call"
        );
        let req = JsonRpcRequest {
            jsonrpc: "2.0",
            id,
            method,
            params,
        };

        let mut builder = self
            .client
            .post(&self.url)
            .header(header::CONTENT_TYPE, "application/json")
            .json(&req);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key);
        }

        let response = builder.send().await.map_err(RpcError::Transport)?;
        let status = response.status();

        let body = response.text().await.map_err(RpcError::Transport)?;
        debug!(rpc.id = id, rpc.method = method, %status, body_len = body.len(), "rpc response");
        trace!(rpc.id = id, rpc.method = method, body = %body, "rpc response body");

        let decoded: JsonRpcResponse = serde_json::from_str(&body).map_err(|e| {
            RpcError::InvalidResponse(format!("decode JSON-RPC response: {e}; body={body}"))
        })?;

        if let Some(err) = decoded.error {
            return Err(parse_jsonrpc_error(err));
        }

        Ok(decoded.result.unwrap_or(serde_json::Value::Null))
    }
}

#[async_trait]
impl EthereumRpc for HttpRpcClient {
    async fn client_version(&self) -> Result<String, CoreError> {
        let raw = self.rpc_call("web3_clientVersion", Vec::new()).await?;
        raw.as_str().map(str::to_owned).ok_or_else(|| {
            CoreError::InvalidResponse(format!("non-string web3_clientVersion result: {raw}"))
        })
    }

    async fn latest_block(&self) -> Result<RawBlock, CoreError> {
        let raw = self
            .rpc_call(
                "eth_getBlockByNumber",
                vec![serde_json::json!("latest"), serde_json::json!(true)],
            )
            .await?;
        if raw.is_null() {
            return Err(CoreError::InvalidResponse(
                "node returned no latest block".to_owned(),
            ));
        }
        serde_json::from_value(raw)
            .map_err(|e| CoreError::InvalidResponse(format!("invalid eth_getBlockByNumber result: {e}")))
    }

    async fn transaction_by_hash(
        &self,
        hash: &str,
    ) -> Result<Option<RawTransaction>, CoreError> {
        let raw = self
            .rpc_call("eth_getTransactionByHash", vec![serde_json::json!(hash)])
            .await?;
        if raw.is_null() {
            return Ok(None);
        }
        let tx: RawTransaction = serde_json::from_value(raw).map_err(|e| {
            CoreError::InvalidResponse(format!("invalid eth_getTransactionByHash result: {e}"))
        })?;
        Ok(Some(tx))
    }

    async fn balance(&self, address: &str) -> Result<u128, CoreError> {
        let raw = self
            .rpc_call(
                "eth_getBalance",
                vec![serde_json::json!(address), serde_json::json!("latest")],
            )
            .await?;
        let quantity = raw.as_str().ok_or_else(|| {
            CoreError::InvalidResponse(format!("non-string eth_getBalance result: {raw}"))
        })?;
        parse_quantity(quantity)
    }
}

fn initial_request_id() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
