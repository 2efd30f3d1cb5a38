//! API gateway seam.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: `HttpTransport` refuses every request;
//! tests substitute a recording mock through the `Transport` trait.
//!
//! ERROR HANDLING
//! ==============
//! The transport only reports what the wire said (status + raw body) or that
//! the wire failed. Interpreting the body is the repository's job.

#![allow(clippy::unused_async)]

use crate::net::error::ApiError;

/// HTTP verbs used by the authors API.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

/// One outgoing call, relative to the API base URL.
#[derive(Clone, Debug, PartialEq)]
pub struct ApiRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<serde_json::Value>,
    pub token: Option<String>,
}

impl ApiRequest {
    #[must_use]
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self { method, path: path.into(), body: None, token: None }
    }

    #[must_use]
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    #[must_use]
    pub fn with_token(mut self, token: Option<String>) -> Self {
        self.token = token;
        self
    }
}

/// Status and unparsed body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    #[must_use]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Issues requests against the authors API. Enables mocking in tests.
#[async_trait::async_trait(?Send)]
pub trait Transport {
    /// Send one request and return the raw response.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when the request never produced a
    /// readable response.
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError>;
}

/// `Authorization` header value for a bearer token.
#[must_use]
pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}

/// Join the API base URL and a request path without doubling slashes.
#[must_use]
pub fn join_url(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Browser HTTP transport rooted at an API base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpTransport {
    #[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
    base: String,
}

impl HttpTransport {
    #[must_use]
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl Default for HttpTransport {
    fn default() -> Self {
        Self::new(crate::config::API_BASE)
    }
}

#[async_trait::async_trait(?Send)]
impl Transport for HttpTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let url = join_url(&self.base, &request.path);
            let mut builder = match request.method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(token) = request.token.as_deref() {
                builder = builder.header("Authorization", &bearer(token));
            }
            let sent = match request.body.as_ref() {
                Some(body) => builder.json(body).map_err(transport_error)?.send().await,
                None => builder.send().await,
            };
            let resp = sent.map_err(transport_error)?;
            let status = resp.status();
            let body = resp.text().await.map_err(transport_error)?;
            Ok(RawResponse { status, body })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = request;
            Err(ApiError::Transport("not available on server".to_owned()))
        }
    }
}

#[cfg(feature = "hydrate")]
fn transport_error(e: gloo_net::Error) -> ApiError {
    ApiError::Transport(e.to_string())
}

#[cfg(test)]
#[path = "transport_test.rs"]
mod transport_test;
