// MCP server over newline-delimited JSON-RPC

use crate::dispatcher::Dispatcher;
use crate::protocol::{
    CallToolParams, InitializeParams, InitializeResult, JsonRpcError, JsonRpcRequest,
    JsonRpcResponse, ListToolsResult, ServerCapabilities, ServerInfo, ToolsCapability,
    DEFAULT_PROTOCOL_VERSION,
};
use anyhow::{Context, Result};
use bytes::BytesMut;
use futures_util::{SinkExt, StreamExt};
use serde::Serialize;
use serde_json::Value;
use std::io;
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{Decoder, FramedRead, FramedWrite, LinesCodec, LinesCodecError};
use tracing::{debug, error, info, warn};

pub const SERVER_NAME: &str = "findata-mcp-server";

/// Longest inbound line accepted, in bytes, before it is discarded.
pub const MAX_LINE_LENGTH: usize = 4 * 1024 * 1024;

/// Binds a [`Dispatcher`] to a line-framed JSON-RPC channel
pub struct McpServer {
    dispatcher: Dispatcher,
    max_line_length: usize,
}

impl McpServer {
    pub fn new(dispatcher: Dispatcher) -> Self {
        Self {
            dispatcher,
            max_line_length: MAX_LINE_LENGTH,
        }
    }

    pub fn with_max_line_length(mut self, max_line_length: usize) -> Self {
        self.max_line_length = max_line_length;
        self
    }

    /// Serve on stdin/stdout until stdin closes
    pub async fn start(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve one JSON-RPC message per line until `reader` reaches EOF
    pub async fn serve<R, W>(&self, reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut requests = FramedRead::new(reader, RequestCodec::new(self.max_line_length));
        let mut responses = FramedWrite::new(writer, LinesCodec::new());

        info!("MCP server started, listening on stdin");

        while let Some(frame) = requests.next().await {
            let response = match frame {
                Ok(Inbound::Line(line)) => {
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    debug!("Received request: {}", line);
                    self.process_line(line).await
                }
                Ok(Inbound::Unreadable(reason)) => {
                    warn!(reason, "Discarding unreadable request line");
                    Some(JsonRpcResponse::error(
                        Value::Null,
                        JsonRpcError::parse_error(format!("Parse error: {}", reason)),
                    ))
                }
                Err(e) => {
                    error!("Failed to read request: {}", e);
                    break;
                }
            };

            if let Some(response) = response {
                let json = serde_json::to_string(&response)
                    .context("Failed to serialize response")?;
                debug!("Sending response: {}", json);

                responses
                    .send(json)
                    .await
                    .context("Failed to write response")?;
            }
        }

        info!("MCP server shutting down");
        Ok(())
    }

    /// Handle one inbound line. Notifications yield no response.
    pub async fn process_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let value: Value = match serde_json::from_str(line) {
            Ok(value) => value,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    JsonRpcError::parse_error(format!("Parse error: {}", e)),
                ));
            }
        };

        let id = value.get("id").cloned().unwrap_or(Value::Null);
        let request: JsonRpcRequest = match serde_json::from_value(value) {
            Ok(request) => request,
            Err(e) => {
                return Some(JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_request(format!("Invalid Request: {}", e)),
                ));
            }
        };

        if request.jsonrpc != "2.0" {
            return Some(JsonRpcResponse::error(
                id,
                JsonRpcError::invalid_request("jsonrpc must be '2.0'"),
            ));
        }

        if request.is_notification() {
            debug!(method = %request.method, "Received notification");
            return None;
        }

        Some(self.handle_request(request).await)
    }

    async fn handle_request(&self, request: JsonRpcRequest) -> JsonRpcResponse {
        let id = request.id.unwrap_or(Value::Null);
        let params = request.params.unwrap_or(Value::Null);

        match request.method.as_str() {
            "initialize" => self.handle_initialize(id, params),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => self.handle_tools_list(id),
            "tools/call" => self.handle_tools_call(id, params).await,
            method => JsonRpcResponse::error(id, JsonRpcError::method_not_found(method)),
        }
    }

    fn handle_initialize(&self, id: Value, params: Value) -> JsonRpcResponse {
        let params: InitializeParams = serde_json::from_value(params).unwrap_or_default();

        if let Some(ref client) = params.client_info {
            info!(client = %client.name, version = %client.version, "Client connected");
        }

        let result = InitializeResult {
            protocol_version: params
                .protocol_version
                .unwrap_or_else(|| DEFAULT_PROTOCOL_VERSION.to_string()),
            capabilities: ServerCapabilities {
                tools: Some(ToolsCapability {
                    list_changed: false,
                }),
            },
            server_info: ServerInfo {
                name: SERVER_NAME.to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
        };

        respond(id, &result)
    }

    fn handle_tools_list(&self, id: Value) -> JsonRpcResponse {
        let result = ListToolsResult {
            tools: self.dispatcher.list_tools(),
        };
        respond(id, &result)
    }

    async fn handle_tools_call(&self, id: Value, params: Value) -> JsonRpcResponse {
        let params: CallToolParams = match serde_json::from_value(params) {
            Ok(params) => params,
            Err(e) => {
                return JsonRpcResponse::error(
                    id,
                    JsonRpcError::invalid_params(format!("Invalid tools/call params: {}", e)),
                );
            }
        };

        let result = self.dispatcher.handle(params).await;
        respond(id, &result)
    }
}

/// One inbound frame.
#[derive(Debug, PartialEq)]
enum Inbound {
    Line(String),
    /// A line that cannot be a JSON-RPC message; it has already been consumed.
    Unreadable(&'static str),
}

/// [`LinesCodec`] that reports invalid UTF-8 and over-long lines as frames
/// rather than stream errors.
///
/// `FramedRead` ends the stream after any decoder error, so only read
/// failures may surface as `Err`.
struct RequestCodec {
    lines: LinesCodec,
}

impl RequestCodec {
    fn new(max_line_length: usize) -> Self {
        Self {
            lines: LinesCodec::new_with_max_length(max_line_length),
        }
    }
}

impl Decoder for RequestCodec {
    type Item = Inbound;
    type Error = LinesCodecError;

    fn decode(&mut self, buf: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        recover(self.lines.decode(buf))
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Inbound>, LinesCodecError> {
        recover(self.lines.decode_eof(buf))
    }
}

fn recover(
    decoded: Result<Option<String>, LinesCodecError>,
) -> Result<Option<Inbound>, LinesCodecError> {
    match decoded {
        Ok(line) => Ok(line.map(Inbound::Line)),
        // LinesCodec discards the rest of the line on its own
        Err(LinesCodecError::MaxLineLengthExceeded) => {
            Ok(Some(Inbound::Unreadable("line exceeds maximum length")))
        }
        // Raised by the decoder itself after splitting the line off
        Err(LinesCodecError::Io(e)) if e.kind() == io::ErrorKind::InvalidData => {
            Ok(Some(Inbound::Unreadable("line is not valid UTF-8")))
        }
        Err(e) => Err(e),
    }
}

fn respond<T: Serialize>(id: Value, result: &T) -> JsonRpcResponse {
    match serde_json::to_value(result) {
        Ok(value) => JsonRpcResponse::success(id, value),
        Err(e) => JsonRpcResponse::error(
            id,
            JsonRpcError::internal_error(format!("Serialization error: {}", e)),
        ),
    }
}
