//! Tool-specific error types.

use rmcp::ErrorData as McpError;
use thiserror::Error;

/// Errors that can occur during tool operations.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not one of the catalog operations.
    #[error("Unknown tool: {0}")]
    UnknownOperation(String),

    /// Invalid arguments were provided to the tool.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// An internal error occurred.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl ToolError {
    /// Create a new "unknown operation" error.
    pub fn unknown_operation(name: impl Into<String>) -> Self {
        Self::UnknownOperation(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }

    /// Create a new "internal" error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}

impl From<ToolError> for McpError {
    fn from(err: ToolError) -> Self {
        match &err {
            ToolError::UnknownOperation(name) => McpError::invalid_params(
                err.to_string(),
                Some(serde_json::json!({ "name": name })),
            ),
            ToolError::InvalidArguments(_) => McpError::invalid_params(err.to_string(), None),
            ToolError::Internal(_) => McpError::internal_error(err.to_string(), None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rmcp::model::ErrorCode;

    #[test]
    fn test_unknown_operation_maps_to_invalid_params() {
        let err: McpError = ToolError::unknown_operation("get-everything").into();
        assert_eq!(err.code, ErrorCode::INVALID_PARAMS);
        assert_eq!(err.message, "Unknown tool: get-everything");
        assert_eq!(err.data, Some(serde_json::json!({ "name": "get-everything" })));
    }

    #[test]
    fn test_internal_maps_to_internal_error() {
        let err: McpError = ToolError::internal("boom").into();
        assert_eq!(err.code, ErrorCode::INTERNAL_ERROR);
    }
}
