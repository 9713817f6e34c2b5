//! Scripted backend shared by the unit tests.

use std::future::{Future, ready};
use std::sync::{Mutex, PoisonError};

use serde_json::{Value, json};

use crate::backend::{ApiRequest, Backend, Endpoint};
use crate::config::ConsoleConfig;
use crate::error::ConsoleError;

type Responder = Box<dyn Fn(&ApiRequest) -> Result<Value, ConsoleError> + Send + Sync>;

/// Records every request and answers through a closure.
pub struct FakeBackend {
    requests: Mutex<Vec<ApiRequest>>,
    responder: Responder,
}

impl FakeBackend {
    pub fn new<F>(responder: F) -> Self
    where
        F: Fn(&ApiRequest) -> Result<Value, ConsoleError> + Send + Sync + 'static,
    {
        Self {
            requests: Mutex::new(Vec::new()),
            responder: Box::new(responder),
        }
    }

    /// Answers every endpoint the way the demo server does.
    pub fn healthy() -> Self {
        Self::new(server_reply)
    }

    /// Fails every request at the transport level.
    pub fn unreachable() -> Self {
        Self::new(|_| Err(ConsoleError::Transport("connection refused".to_owned())))
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn count(&self, endpoint: Endpoint) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.endpoint == endpoint)
            .count()
    }
}

impl Backend for FakeBackend {
    fn send(
        &self,
        request: ApiRequest,
    ) -> impl Future<Output = Result<Value, ConsoleError>> + Send {
        let reply = (self.responder)(&request);
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(request);
        ready(reply)
    }
}

/// Canned bodies matching what the demo server returns.
pub fn server_reply(request: &ApiRequest) -> Result<Value, ConsoleError> {
    Ok(match request.endpoint {
        Endpoint::Health => json!({
            "status": "healthy",
            "service": "Render Test App",
            "timestamp": "2025-03-01T09:15:00.000001",
            "environment": "development",
            "region": "oregon"
        }),
        Endpoint::ServerInfo => json!({
            "platform": "Render.com",
            "service_type": "Web Service",
            "system": {"pid": 4242}
        }),
        Endpoint::GenerateData => json!({
            "data": [{"id": 1, "name": "Item 1", "value": 37, "category": "B"}],
            "count": 1
        }),
        Endpoint::Echo => json!({
            "echo": request.body.as_ref().and_then(|b| b.get("message")).cloned(),
            "received_at": "2025-03-01T09:15:00",
            "processed_by": "local",
            "random_id": 4821
        }),
        Endpoint::Messages => json!({
            "count": 1,
            "messages": [
                {"id": 4821, "timestamp": "2025-03-01T09:15:00", "message": "hello"}
            ],
            "server": "local"
        }),
        Endpoint::Calculate => json!({
            "operation": "divide",
            "a": 10,
            "b": 2,
            "result": 5.0,
            "calculated_at": "2025-03-01T09:15:00",
            "server_instance": "local"
        }),
    })
}

/// Default configuration with a fixed, locale-independent timestamp
/// pattern.
pub fn test_config() -> ConsoleConfig {
    ConsoleConfig::default()
}

/// Decode the entities `minijinja` writes for auto-escaped text.
pub fn unescape(html: &str) -> String {
    html.replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&quot;", "\"")
        .replace("&#x27;", "'")
        .replace("&#x2f;", "/")
        .replace("&amp;", "&")
}
