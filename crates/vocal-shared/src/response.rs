//! Standardized API response envelopes.

use serde::{Deserialize, Serialize};

/// Successful API response wrapper: `{"success": true, "data": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub data: T,
    /// Number of items, for collection responses that report it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            count: None,
        }
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Collection response carrying its length in `count`.
    pub fn counted(data: Vec<T>) -> Self {
        let count = data.len();
        Self {
            success: true,
            data,
            count: Some(count),
        }
    }
}

/// Failure envelope: `{"success": false, "error": "..."}` or
/// `{"success": false, "errors": [...]}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,

    /// A single human-readable failure message.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,

    /// One message per violated validation rule.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            errors: None,
        }
    }

    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            success: false,
            error: None,
            errors: Some(errors),
        }
    }

    pub fn internal_error() -> Self {
        Self::new("Internal server error")
    }
}
