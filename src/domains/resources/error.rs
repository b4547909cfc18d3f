//! Resource-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during resource operations.
#[derive(Debug, Error)]
pub enum ResourceError {
    /// The requested URI is not one of the catalog resources.
    #[error("Unknown resource: {0}")]
    UnknownResource(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ResourceError {
    /// Create a new "unknown resource" error.
    pub fn unknown_resource(uri: impl Into<String>) -> Self {
        Self::UnknownResource(uri.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ResourceError> for McpError {
    fn from(err: ResourceError) -> Self {
        match &err {
            ResourceError::UnknownResource(uri) => McpError::resource_not_found(
                err.to_string(),
                Some(serde_json::json!({ "uri": uri })),
            ),
            ResourceError::Internal(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}
