//! Transport seam between the page and the remote customers service.

use async_trait::async_trait;
use thiserror::Error;

use crate::dto::reply::ApiReply;
use crate::dto::request::CustomerRequest;

#[cfg(test)]
pub(crate) mod gated;
pub mod http;

pub use http::HttpTransport;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Non-2xx status; `message` is the `{message}` field when the body had one.
    #[error("request rejected with status {status}")]
    Rejected {
        status: u16,
        message: Option<String>,
    },

    #[error("transport error: {0}")]
    Transport(String),

    #[error("failed to decode response: {0}")]
    Decode(String),

    #[error("invalid base url: {0}")]
    InvalidBaseUrl(String),
}

impl ApiError {
    /// Server-provided message, if the error body carried one.
    pub fn message(&self) -> Option<&str> {
        match self {
            ApiError::Rejected { message, .. } => message.as_deref(),
            _ => None,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Issues one request and decodes the reply for its action.
///
/// Implementations never retry and never cancel.
#[cfg_attr(any(test, feature = "test-mocks"), mockall::automock)]
#[async_trait]
pub trait CustomerTransport {
    async fn send(&self, request: &CustomerRequest) -> ApiResult<ApiReply>;
}
