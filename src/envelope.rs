//! The `{ success, message, data }` envelope every backend response uses.

use crate::error::{SdkError, DEFAULT_API_ERROR_MESSAGE};
use serde::{Deserialize, Serialize};

/// Backend response envelope.
///
/// `success: false` is an application-level failure in an otherwise
/// well-formed response. A missing `success` field counts as success.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default = "default_success")]
    pub success: bool,
    // No `#[serde(default)]` on these: it would bound the impl on `T: Default`.
    pub message: Option<String>,
    pub data: Option<T>,
}

fn default_success() -> bool {
    true
}

impl<T> ApiResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn is_success(&self) -> bool {
        self.success
    }

    /// Fail with [`SdkError::Api`] when the envelope reports `success: false`,
    /// using the backend message or `default_message`.
    pub fn ensure_success(self, default_message: &str) -> Result<Self, SdkError> {
        if self.success {
            return Ok(self);
        }
        tracing::warn!(
            backend_message = self.message.as_deref().unwrap_or_default(),
            "backend reported failure"
        );
        Err(SdkError::api(self.message.as_deref(), default_message))
    }

    /// Unwrap the payload of a successful envelope.
    pub fn into_data(self) -> Result<T, SdkError> {
        self.ensure_success(DEFAULT_API_ERROR_MESSAGE)?
            .data
            .ok_or_else(|| SdkError::Validation("response has no data".to_string()))
    }

    /// Reshape the payload, keeping `success` and `message`.
    pub fn map_data<U>(self, f: impl FnOnce(T) -> U) -> ApiResponse<U> {
        ApiResponse {
            success: self.success,
            message: self.message,
            data: self.data.map(f),
        }
    }
}

impl<T: Default> ApiResponse<T> {
    /// Replace a missing payload with `T::default()`.
    pub fn with_default_data(mut self) -> Self {
        if self.data.is_none() {
            self.data = Some(T::default());
        }
        self
    }
}
