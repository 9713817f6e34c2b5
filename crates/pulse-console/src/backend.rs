//! API endpoints and the transport that reaches them.
//!
//! [`Backend`] is the seam between the controller and the network. It
//! takes an [`ApiRequest`] and yields the response body as raw JSON; the
//! controller decides how to decode it. [`HttpBackend`] is the `reqwest`
//! implementation used in production.
//!
//! HTTP status codes are logged but never change the outcome: a 4xx/5xx
//! response with a JSON body is returned like any other body, because the
//! API reports application errors as `{"error": ...}` on error statuses.

use std::fmt;
use std::future::Future;

use reqwest::Method;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

/// One of the API endpoints the console talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Endpoint {
    /// `GET /api/health`
    Health,
    /// `GET /api/server-info`
    ServerInfo,
    /// `GET /api/generate-data`
    GenerateData,
    /// `POST /api/echo`
    Echo,
    /// `GET /api/messages`
    Messages,
    /// `POST /api/calculate`
    Calculate,
}

impl Endpoint {
    /// Path relative to the configured origin.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Health => "/api/health",
            Self::ServerInfo => "/api/server-info",
            Self::GenerateData => "/api/generate-data",
            Self::Echo => "/api/echo",
            Self::Messages => "/api/messages",
            Self::Calculate => "/api/calculate",
        }
    }

    /// HTTP method the endpoint expects.
    pub fn method(self) -> Method {
        match self {
            Self::Health | Self::ServerInfo | Self::GenerateData | Self::Messages => Method::GET,
            Self::Echo | Self::Calculate => Method::POST,
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.method(), self.path())
    }
}

/// A request ready to be sent: an endpoint plus an optional JSON body.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    /// Target endpoint.
    pub endpoint: Endpoint,
    /// JSON body for POST endpoints.
    pub body: Option<Value>,
}

impl ApiRequest {
    /// A bodiless request.
    pub const fn get(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            body: None,
        }
    }

    /// A request carrying `body` serialized as JSON.
    pub fn post<T: Serialize>(endpoint: Endpoint, body: &T) -> Result<Self, ConsoleError> {
        Ok(Self {
            endpoint,
            body: Some(serde_json::to_value(body)?),
        })
    }
}

/// Sends API requests and returns the decoded JSON body.
///
/// The returned future must be `Send` so handlers can run on spawned
/// tasks (the periodic health check does).
pub trait Backend: Send + Sync {
    /// Perform one round trip.
    ///
    /// # Errors
    ///
    /// [`ConsoleError::Transport`] if the request could not be completed,
    /// [`ConsoleError::Decode`] if the body is not JSON.
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<Value, ConsoleError>> + Send;
}

/// [`Backend`] over HTTP using `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: reqwest::Client,
    base_url: String,
}

impl HttpBackend {
    /// Create a backend targeting the configured origin.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] if the HTTP client cannot be built.
    pub fn new(config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder
            .build()
            .map_err(|e| ConsoleError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Absolute URL of an endpoint.
    pub fn url_for(&self, endpoint: Endpoint) -> String {
        format!("{}{}", self.base_url, endpoint.path())
    }
}

impl Backend for HttpBackend {
    async fn send(&self, request: ApiRequest) -> Result<Value, ConsoleError> {
        let url = self.url_for(request.endpoint);
        debug!(endpoint = %request.endpoint, url = %url, "sending request");

        let mut builder = self.client.request(request.endpoint.method(), &url);
        if let Some(body) = &request.body {
            builder = builder.json(body);
        }

        let response = builder
            .send()
            .await
            .map_err(|e| ConsoleError::Transport(format!("{} failed: {e}", request.endpoint)))?;

        let status = response.status();
        if !status.is_success() {
            warn!(
                endpoint = %request.endpoint,
                status = status.as_u16(),
                "API answered with an error status"
            );
        }

        let text = response
            .text()
            .await
            .map_err(|e| ConsoleError::Transport(format!("failed to read response body: {e}")))?;

        serde_json::from_str(&text).map_err(|e| {
            ConsoleError::Decode(format!("{} returned a non-JSON body: {e}", request.endpoint))
        })
    }
}
