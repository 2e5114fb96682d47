//! Reqwest-backed transport.
//!
//! Every request declares a JSON content type, even without a body. No
//! timeout is configured, so a hung server keeps the action pending.

use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Url};
use serde::Deserialize;

use crate::domain::customer::{Customer, CustomerSummary};
use crate::dto::reply::ApiReply;
use crate::dto::request::{Action, CustomerRequest};
use crate::transport::{ApiError, ApiResult, CustomerTransport};

const JSON_CONTENT_TYPE: &str = "application/json";

/// Error body returned by the service on rejection.
#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Transport issuing requests against one service root.
#[derive(Clone, Debug)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Builds a transport for the given service root, e.g. `http://localhost:8080`.
    pub fn new(base_url: &str) -> ApiResult<Self> {
        Url::parse(base_url).map_err(|err| ApiError::InvalidBaseUrl(format!("{base_url}: {err}")))?;
        let client = Client::builder()
            .build()
            .map_err(|err| ApiError::Transport(err.to_string()))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url_for(&self, request: &CustomerRequest) -> String {
        format!("{}{}", self.base_url, request.path())
    }
}

#[async_trait]
impl CustomerTransport for HttpTransport {
    async fn send(&self, request: &CustomerRequest) -> ApiResult<ApiReply> {
        let url = self.url_for(request);
        let mut builder = self
            .client
            .request(request.method(), &url)
            .header(CONTENT_TYPE, JSON_CONTENT_TYPE);
        if let Some(body) = request.body() {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(map_transport_error)?;
        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;

        if !status.is_success() {
            log::warn!(
                "{} {} rejected with status {status}",
                request.method(),
                request.path()
            );
            return Err(ApiError::Rejected {
                status: status.as_u16(),
                message: error_message(&body),
            });
        }

        decode_reply(request.action(), &body)
    }
}

fn map_transport_error(err: reqwest::Error) -> ApiError {
    ApiError::Transport(err.to_string())
}

/// Best-effort extraction of the `{message}` field.
fn error_message(body: &[u8]) -> Option<String> {
    serde_json::from_slice::<ErrorBody>(body)
        .ok()
        .and_then(|body| body.message)
}

fn decode_reply(action: Action, body: &[u8]) -> ApiResult<ApiReply> {
    let decode_error = |err: serde_json::Error| ApiError::Decode(err.to_string());
    match action {
        Action::Delete => Ok(ApiReply::Deleted),
        Action::Search => serde_json::from_slice::<Vec<CustomerSummary>>(body)
            .map(ApiReply::Listing)
            .map_err(decode_error),
        _ => serde_json::from_slice::<Customer>(body)
            .map(ApiReply::Customer)
            .map_err(decode_error),
    }
}
