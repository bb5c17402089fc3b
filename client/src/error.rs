use thiserror::Error;

use crate::envelope::ApiError;

/// Failure modes of a single API call.
///
/// Transport and decode problems share one variant: the pages render both
/// as the same generic retry message and only the log carries the cause.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("invalid endpoint url: {0}")]
    Endpoint(#[from] url::ParseError),

    #[error("malformed response: {0}")]
    MalformedResponse(&'static str),

    #[error("{}", .0.message)]
    Api(ApiError),
}

impl ClientError {
    /// The server-reported error, if this is an application-level rejection.
    pub fn as_api(&self) -> Option<&ApiError> {
        match self {
            ClientError::Api(error) => Some(error),
            _ => None,
        }
    }
}
