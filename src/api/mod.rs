//! Backend REST Client
//!
//! Thin wrappers over the pantry backend API, organized by resource.

mod inventory;
mod member;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

pub use inventory::HttpFlushTransport;

/// Characters escaped inside a single path segment
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("{message} (HTTP {status})")]
    Status { status: u16, message: String },
    #[error("unexpected response: {0}")]
    Decode(String),
}

/// REST client bound to one backend and one signed-in member
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            token,
        }
    }

    /// Join percent-encoded path segments onto the base URL
    pub fn endpoint(&self, segments: &[&str]) -> String {
        let mut url = self.base_url.clone();
        for segment in segments {
            url.push('/');
            url.extend(utf8_percent_encode(segment, PATH_SEGMENT));
        }
        url
    }

    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments);
        debug!("[API] GET {}", url);
        let response = self.authorize(self.http.get(&url)).send().await?;
        decode(response).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments);
        debug!("[API] POST {}", url);
        let response = self.authorize(self.http.post(&url)).json(body).send().await?;
        decode(response).await
    }
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(ApiError::Status {
            status: status.as_u16(),
            message: error_message(status, &body),
        });
    }
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

/// Human-readable message for a failed response: the body's `message` or
/// `error` field, else the raw body, else the reason phrase.
fn error_message(status: StatusCode, body: &str) -> String {
    if let Ok(serde_json::Value::Object(fields)) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "error"] {
            if let Some(serde_json::Value::String(text)) = fields.get(key) {
                return text.clone();
            }
        }
    }
    let body = body.trim();
    if !body.is_empty() {
        return body.to_string();
    }
    status
        .canonical_reason()
        .unwrap_or("request failed")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_encodes_segments() {
        let api = ApiClient::new("https://pantry.example/api", None);
        assert_eq!(api.endpoint(&["inventory"]), "https://pantry.example/api/inventory");
        assert_eq!(
            api.endpoint(&["inventory", "olive oil/extra", "adjust"]),
            "https://pantry.example/api/inventory/olive%20oil%2Fextra/adjust"
        );
    }

    #[test]
    fn test_error_message_prefers_json_fields() {
        let status = StatusCode::UNPROCESSABLE_ENTITY;
        assert_eq!(error_message(status, r#"{"message":"quantity cannot be negative"}"#), "quantity cannot be negative");
        assert_eq!(error_message(status, r#"{"error":"item archived"}"#), "item archived");
    }

    #[test]
    fn test_error_message_falls_back_to_body_then_reason() {
        assert_eq!(error_message(StatusCode::BAD_GATEWAY, "upstream down\n"), "upstream down");
        assert_eq!(error_message(StatusCode::NOT_FOUND, ""), "Not Found");
        assert_eq!(error_message(StatusCode::FORBIDDEN, r#"{"code":7}"#), r#"{"code":7}"#);
    }

    #[test]
    fn test_status_error_display() {
        let err = ApiError::Status { status: 409, message: "stale item".into() };
        assert_eq!(err.to_string(), "stale item (HTTP 409)");
    }
}
