//! Stdio tool-protocol server.
//!
//! Reads one JSON-RPC 2.0 message per line and answers the MCP tool methods
//! (`initialize`, `ping`, `tools/list`, `tools/call`). Requests are handled
//! one at a time in arrival order; notifications get no reply.

use serde::Serialize;
use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info, warn};

use crate::config::ServerConfig;
use crate::error::{ServerError, ToolError};
use crate::tools::ToolRegistry;
use crate::types::{rpc_codes, CallToolParams, CallToolResult, RpcRequest, RpcResponse};

/// Protocol revision answered when the client does not name one.
pub const DEFAULT_PROTOCOL_VERSION: &str = "2024-11-05";

/// Tool server bound to one registry.
pub struct McpServer {
    registry: ToolRegistry,
    info: ServerConfig,
}

impl McpServer {
    pub fn new(registry: ToolRegistry, info: ServerConfig) -> Self {
        Self { registry, info }
    }

    /// Serve stdin/stdout until stdin closes.
    pub async fn serve_stdio(&self) -> Result<(), ServerError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Serve newline-delimited JSON-RPC from `reader`, replying on `writer`.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!(name = %self.info.name, version = %self.info.version, "serving tools on stdio");
        let mut buf = Vec::new();
        loop {
            buf.clear();
            if reader.read_until(b'\n', &mut buf).await? == 0 {
                break;
            }
            let response = match std::str::from_utf8(&buf) {
                Ok(line) if line.trim().is_empty() => continue,
                Ok(line) => self.handle_line(line.trim_end_matches(['\n', '\r'])).await,
                Err(e) => {
                    warn!(error = %e, "request is not valid UTF-8");
                    Some(RpcResponse::failure(
                        None,
                        rpc_codes::PARSE_ERROR,
                        format!("parse error: {e}"),
                    ))
                }
            };
            let Some(response) = response else {
                continue;
            };
            let mut encoded = serde_json::to_string(&response)
                .map_err(|e| ServerError::Io(std::io::Error::other(e)))?;
            encoded.push('\n');
            writer.write_all(encoded.as_bytes()).await?;
            writer.flush().await?;
        }
        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one raw line. `None` means nothing should be written back.
    pub async fn handle_line(&self, line: &str) -> Option<RpcResponse> {
        match serde_json::from_str::<RpcRequest>(line) {
            Ok(request) => self.handle_request(request).await,
            Err(e) => {
                warn!(error = %e, "unparseable request");
                Some(RpcResponse::failure(
                    None,
                    rpc_codes::PARSE_ERROR,
                    format!("parse error: {e}"),
                ))
            }
        }
    }

    /// Handle one decoded request.
    pub async fn handle_request(&self, request: RpcRequest) -> Option<RpcResponse> {
        debug!(method = %request.method, "request");
        if request.is_notification() {
            return None;
        }
        let id = request.id;
        if request.jsonrpc.as_deref().is_some_and(|v| v != "2.0") {
            return Some(RpcResponse::failure(
                id,
                rpc_codes::INVALID_REQUEST,
                "unsupported jsonrpc version",
            ));
        }

        let response = match request.method.as_str() {
            "initialize" => RpcResponse::success(id, self.initialize_result(request.params)),
            "ping" => RpcResponse::success(id, json!({})),
            "tools/list" => encode(id, &json!({ "tools": self.registry.definitions() })),
            "tools/call" => self.call_tool(id, request.params).await,
            other => RpcResponse::failure(
                id,
                rpc_codes::METHOD_NOT_FOUND,
                format!("method not found: {other}"),
            ),
        };
        Some(response)
    }

    fn initialize_result(&self, params: Option<Value>) -> Value {
        let protocol_version = params
            .as_ref()
            .and_then(|p| p.get("protocolVersion"))
            .and_then(Value::as_str)
            .unwrap_or(DEFAULT_PROTOCOL_VERSION);
        json!({
            "protocolVersion": protocol_version,
            "capabilities": { "tools": {} },
            "serverInfo": {
                "name": self.info.name,
                "version": self.info.version
            }
        })
    }

    async fn call_tool(&self, id: Option<Value>, params: Option<Value>) -> RpcResponse {
        let Some(params) = params else {
            return RpcResponse::failure(id, rpc_codes::INVALID_PARAMS, "missing params");
        };
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return RpcResponse::failure(
                    id,
                    rpc_codes::INVALID_PARAMS,
                    format!("invalid params: {e}"),
                )
            }
        };

        let result = match self.registry.execute(&params.name, params.arguments).await {
            Ok(text) => CallToolResult::text(text),
            Err(err @ ToolError::UnknownTool(_)) => {
                return RpcResponse::failure(id, rpc_codes::INVALID_PARAMS, err.to_string())
            }
            Err(err) => CallToolResult::error(err.to_string()),
        };
        encode(id, &result)
    }
}

fn encode<T: Serialize>(id: Option<Value>, result: &T) -> RpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => RpcResponse::success(id, value),
        Err(e) => RpcResponse::failure(
            id,
            rpc_codes::INTERNAL_ERROR,
            format!("failed to encode result: {e}"),
        ),
    }
}
