use serde::Deserialize;
use serde_json::Value;

use crate::error::ClientError;

/// Response wrapper shared by all attendance endpoints.
///
/// ```json
/// {
///   "success": true,
///   "data": { ... },
///   "message": "Registration successful"
/// }
/// ```
///
/// ```json
/// {
///   "success": false,
///   "error": { "code": "DUPLICATE_ATTENDANCE", "message": "...", "details": "..." }
/// }
/// ```
#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    pub success: bool,
    #[serde(default)]
    pub data: Option<T>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Error object the server attaches to `success: false` responses.
///
/// `code` is a stable machine-readable tag (`INVALID_SESSION_CODE`,
/// `TIME_WINDOW_CLOSED`, ...); rendering uses only `message` and `details`.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub code: Option<String>,
    pub message: String,
    #[serde(default)]
    pub details: Option<Value>,
}

impl<T> Envelope<T> {
    /// Collapses the envelope into a result, keeping the top-level message
    /// for callers that surface it.
    pub fn into_result(self) -> Result<(T, Option<String>), ClientError> {
        if self.success {
            match self.data {
                Some(data) => Ok((data, self.message)),
                None => Err(ClientError::MalformedResponse(
                    "success response without data",
                )),
            }
        } else {
            Err(ClientError::Api(self.api_error()))
        }
    }

    /// The error object of a rejected response, synthesized if the server
    /// omitted it.
    pub fn api_error(self) -> ApiError {
        self.error.unwrap_or(ApiError {
            code: None,
            message: self
                .message
                .unwrap_or_else(|| "Request rejected by the server".to_owned()),
            details: None,
        })
    }
}

impl ApiError {
    /// Flattens `details` into display text: object values joined by ", ",
    /// plain strings verbatim, other scalars via their JSON rendering.
    pub fn detail_text(&self) -> Option<String> {
        match &self.details {
            Some(Value::Object(map)) => Some(
                map.values()
                    .map(|value| match value {
                        Value::String(text) => text.clone(),
                        other => other.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(", "),
            ),
            Some(Value::String(text)) => Some(text.clone()),
            Some(Value::Null) | None => None,
            Some(other) => Some(other.to_string()),
        }
    }
}
