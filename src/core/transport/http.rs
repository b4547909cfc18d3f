//! HTTP transport implementation.
//!
//! JSON-RPC 2.0 over HTTP POST, so plain HTTP clients (curl, browsers) can
//! query the catalog. The endpoint is stateless: every request is answered
//! from the immutable catalog, no session is tracked.

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use rmcp::ErrorData as McpError;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::{info, instrument, warn};

use super::{TransportError, TransportResult, config::HttpConfig};
use crate::core::McpServer;
use crate::core::error::Error;
use crate::domains::catalog::Domain;

/// MCP protocol revision announced on initialize.
const PROTOCOL_VERSION: &str = "2024-11-05";

/// HTTP transport handler.
pub struct HttpTransport {
    config: HttpConfig,
}

/// JSON-RPC request structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcRequest {
    pub jsonrpc: String,
    #[serde(default)]
    pub id: Option<Value>,
    pub method: String,
    #[serde(default)]
    pub params: Option<Value>,
}

/// JSON-RPC response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcResponse {
    pub jsonrpc: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<JsonRpcError>,
}

/// JSON-RPC error structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JsonRpcError {
    pub code: i32,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl JsonRpcResponse {
    /// Create a success response.
    pub fn success(id: Option<Value>, result: Value) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: Some(result),
            error: None,
        }
    }

    /// Create an error response.
    pub fn error(id: Option<Value>, code: i32, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }

    /// Create an error response from a protocol error.
    pub fn from_mcp_error(id: Option<Value>, err: McpError) -> Self {
        Self {
            jsonrpc: "2.0".to_string(),
            id,
            result: None,
            error: Some(JsonRpcError {
                code: err.code.0,
                message: err.message.into_owned(),
                data: err.data,
            }),
        }
    }

    /// Method not found error.
    pub fn method_not_found(id: Option<Value>) -> Self {
        Self::error(id, -32601, "Method not found")
    }

    /// Invalid request error.
    pub fn invalid_request(id: Option<Value>) -> Self {
        Self::error(id, -32600, "Invalid Request")
    }

    /// Invalid params error.
    pub fn invalid_params(id: Option<Value>, msg: impl Into<String>) -> Self {
        Self::error(id, -32602, msg)
    }
}

impl HttpTransport {
    /// Create a new HTTP transport with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Build the axum router for `server`.
    pub fn router(&self, server: McpServer) -> Router {
        let mut app = Router::new()
            .route(&self.config.rpc_path, post(handle_rpc))
            .route("/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(server);

        if self.config.enable_cors {
            let cors = CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any);
            app = app.layer(cors);
        }

        app
    }

    /// Run the HTTP transport.
    pub async fn run(self, server: McpServer) -> TransportResult<()> {
        let addr = self.address();
        let app = self.router(server);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| TransportError::bind(&addr, e))?;

        info!(
            "Ready - listening on {} (JSON-RPC over HTTP, CORS {})",
            addr,
            if self.config.enable_cors { "enabled" } else { "disabled" }
        );
        info!("  → JSON-RPC: POST {}", self.config.rpc_path);
        info!("  → Health:   GET /health");

        axum::serve(listener, app)
            .await
            .map_err(|e| TransportError::http(e.to_string()))?;

        Ok(())
    }
}

/// Health check endpoint.
async fn health_check(State(server): State<McpServer>) -> impl IntoResponse {
    let catalog = server.catalog();
    Json(json!({
        "status": "healthy",
        "server": server.name(),
        "version": server.version(),
        "catalog": {
            "rules": catalog.len(Domain::Rules),
            "prompts": catalog.len(Domain::Prompts),
            "instructions": catalog.len(Domain::Instructions),
        },
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

/// Handle JSON-RPC requests.
#[instrument(skip_all, fields(method))]
async fn handle_rpc(
    State(server): State<McpServer>,
    Json(request): Json<JsonRpcRequest>,
) -> Response {
    tracing::Span::current().record("method", request.method.as_str());
    info!("Received JSON-RPC request: {}", request.method);

    match process_request(&server, request) {
        Some(response) => (StatusCode::OK, Json(response)).into_response(),
        None => StatusCode::ACCEPTED.into_response(),
    }
}

/// Process a JSON-RPC request and return the response.
///
/// Notifications get no response: `None` is returned for them.
pub fn process_request(server: &McpServer, request: JsonRpcRequest) -> Option<JsonRpcResponse> {
    if request.jsonrpc != "2.0" {
        return Some(JsonRpcResponse::invalid_request(request.id));
    }

    if request.method.starts_with("notifications/") {
        info!("Received notification: {}", request.method);
        return None;
    }

    Some(dispatch(server, request))
}

/// Answer a request that expects a response.
fn dispatch(server: &McpServer, request: JsonRpcRequest) -> JsonRpcResponse {
    let id = request.id.clone();
    let params = request.params.unwrap_or_else(|| json!({}));

    let outcome: Result<Value, McpError> = match request.method.as_str() {
        "initialize" => Ok(json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {
                "tools": {},
                "resources": {}
            },
            "serverInfo": {
                "name": server.name(),
                "version": server.version()
            },
            "instructions": server.instructions()
        })),

        "ping" => Ok(json!({})),

        "tools/list" => Ok(json!({ "tools": server.list_tools() })),

        "tools/call" => {
            let Some(name) = params.get("name").and_then(Value::as_str) else {
                return JsonRpcResponse::invalid_params(id, "Missing tool name");
            };
            let arguments = match params.get("arguments") {
                None | Some(Value::Null) => None,
                Some(Value::Object(arguments)) => Some(arguments.clone()),
                Some(_) => {
                    return JsonRpcResponse::invalid_params(id, "Tool arguments must be an object");
                }
            };
            server
                .call_tool(name, arguments)
                .map_err(|e| Error::from(e).into())
                .and_then(|result| to_value(&result))
        }

        "resources/list" => Ok(json!({ "resources": server.list_resources() })),

        "resources/read" => {
            let Some(uri) = params.get("uri").and_then(Value::as_str) else {
                return JsonRpcResponse::invalid_params(id, "Missing resource URI");
            };
            server
                .read_resource(uri)
                .map_err(|e| Error::from(e).into())
                .and_then(|result| to_value(&result))
        }

        other => {
            warn!("Unknown method: {}", other);
            return JsonRpcResponse::method_not_found(id);
        }
    };

    match outcome {
        Ok(result) => JsonRpcResponse::success(id, result),
        Err(err) => JsonRpcResponse::from_mcp_error(id, err),
    }
}

fn to_value<T: Serialize>(value: &T) -> Result<Value, McpError> {
    serde_json::to_value(value).map_err(|e| Error::from(e).into())
}
