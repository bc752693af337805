//! REST API Client
//!
//! Generic request wrapper: attaches the stored credential and folds every
//! outcome (server error, network failure, bad body) into `ApiResult`.

mod transport;
#[cfg(test)]
pub mod testing;

pub use transport::*;

use std::sync::Arc;

use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

use crate::auth::TokenStore;

/// Uniform error shape rendered by the UI
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct ApiError {
    pub detail: String,
    /// HTTP status, `None` when no response arrived
    pub status: Option<u16>,
}

impl ApiError {
    pub fn new(detail: impl Into<String>) -> Self {
        Self { detail: detail.into(), status: None }
    }

    fn network(err: TransportError) -> Self {
        Self::new(format!("Network error: {}", err))
    }

    /// Build from a non-2xx response, preferring the server's `detail`
    fn from_response(response: &HttpResponse) -> Self {
        let detail = serde_json::from_str::<ErrorBody>(&response.body)
            .ok()
            .and_then(|body| body.detail)
            .and_then(detail_text)
            .unwrap_or_else(|| format!("Request failed with status {}", response.status));

        Self { detail, status: Some(response.status) }
    }
}

/// `Ok(None)` means success with an empty body (e.g. 204)
pub type ApiResult<T> = Result<Option<T>, ApiError>;

#[derive(Deserialize)]
struct ErrorBody {
    detail: Option<serde_json::Value>,
}

/// `{"detail": "..."}` or a validation list `{"detail": [{"msg": "..."}]}`
fn detail_text(detail: serde_json::Value) -> Option<String> {
    match detail {
        serde_json::Value::String(text) if !text.is_empty() => Some(text),
        serde_json::Value::Array(entries) => {
            let messages: Vec<&str> = entries
                .iter()
                .filter_map(|entry| entry.get("msg").and_then(|m| m.as_str()))
                .collect();
            (!messages.is_empty()).then(|| messages.join("; "))
        }
        _ => None,
    }
}

fn decode<T: DeserializeOwned>(response: HttpResponse) -> ApiResult<T> {
    if !response.is_success() {
        let err = ApiError::from_response(&response);
        warn!(status = response.status, detail = %err.detail, "request rejected");
        return Err(err);
    }

    if response.body.trim().is_empty() {
        return Ok(None);
    }

    serde_json::from_str(&response.body).map(Some).map_err(|e| {
        warn!(status = response.status, error = %e, "undecodable response body");
        ApiError {
            detail: "Invalid response from server".to_string(),
            status: Some(response.status),
        }
    })
}

#[derive(Clone)]
pub struct ApiClient {
    base_url: Arc<str>,
    transport: Arc<dyn Transport>,
    tokens: TokenStore,
}

impl ApiClient {
    pub fn new(base_url: &str, transport: Arc<dyn Transport>, tokens: TokenStore) -> Self {
        Self {
            base_url: Arc::from(base_url.trim_end_matches('/')),
            transport,
            tokens,
        }
    }

    /// Issue one request; `body` is already JSON-encoded.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<String>,
    ) -> ApiResult<T> {
        let request = HttpRequest {
            method,
            url: format!("{}{}", self.base_url, path),
            bearer: self.tokens.get(),
            body,
        };
        debug!(method = method.as_str(), path, "api request");

        match self.transport.send(request).await {
            Ok(response) => decode(response),
            Err(e) => {
                warn!(method = method.as_str(), path, error = %e, "request did not complete");
                Err(ApiError::network(e))
            }
        }
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::Get, path, None).await
    }

    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.request(Method::Post, path, Some(encode(body)?)).await
    }

    /// POST without a request body
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::Post, path, None).await
    }

    pub async fn put<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> ApiResult<T> {
        self.request(Method::Put, path, Some(encode(body)?)).await
    }

    pub async fn patch<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        self.request(Method::Patch, path, None).await
    }

    /// DELETE; any response body is ignored
    pub async fn delete(&self, path: &str) -> Result<(), ApiError> {
        self.request::<IgnoredAny>(Method::Delete, path, None).await.map(|_| ())
    }
}

fn encode<B: Serialize>(body: &B) -> Result<String, ApiError> {
    serde_json::to_string(body).map_err(|e| ApiError::new(format!("Could not encode request: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::testing::ScriptedTransport;
    use super::*;
    use crate::models::{Task, TaskListResponse, TaskPayload};

    fn client(transport: &Arc<ScriptedTransport>, tokens: &TokenStore) -> ApiClient {
        ApiClient::new("http://api.test/", transport.clone(), tokens.clone())
    }

    #[tokio::test]
    async fn test_attaches_bearer_when_signed_in() {
        let transport = Arc::new(ScriptedTransport::new());
        let tokens = TokenStore::in_memory();
        let api = client(&transport, &tokens);

        transport.respond(200, r#"{"tasks": [], "total": 0}"#);
        transport.respond(200, r#"{"tasks": [], "total": 0}"#);

        let _ = api.get::<TaskListResponse>("/api/tasks").await;
        tokens.set("tok-1");
        let _ = api.get::<TaskListResponse>("/api/tasks").await;

        let requests = transport.requests();
        assert_eq!(requests[0].bearer, None);
        assert_eq!(requests[1].bearer.as_deref(), Some("tok-1"));
        assert_eq!(requests[1].url, "http://api.test/api/tasks");
        assert_eq!(requests[1].method, Method::Get);
    }

    #[tokio::test]
    async fn test_json_body_and_decode() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(201, r#"{"id": "t1", "title": "Buy milk", "is_completed": false}"#);

        let task: Option<Task> = api
            .post("/api/tasks", &TaskPayload { title: "Buy milk", description: None })
            .await
            .unwrap();

        assert_eq!(task.unwrap().title, "Buy milk");
        let sent = transport.requests().remove(0);
        assert_eq!(sent.method, Method::Post);
        assert_eq!(sent.body.as_deref(), Some(r#"{"title":"Buy milk","description":null}"#));
    }

    #[tokio::test]
    async fn test_server_detail_surfaced() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(409, r#"{"detail": "Email already registered"}"#);

        let err = api.post_empty::<Task>("/api/auth/signup").await.unwrap_err();
        assert_eq!(err.detail, "Email already registered");
        assert_eq!(err.status, Some(409));
    }

    #[tokio::test]
    async fn test_validation_list_detail() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(
            422,
            r#"{"detail": [{"loc": ["body", "title"], "msg": "String should have at least 1 character"}]}"#,
        );

        let err = api.post_empty::<Task>("/api/tasks").await.unwrap_err();
        assert_eq!(err.detail, "String should have at least 1 character");
    }

    #[tokio::test]
    async fn test_generic_message_without_detail() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(502, "<html>Bad Gateway</html>");

        let err = api.get::<TaskListResponse>("/api/tasks").await.unwrap_err();
        assert_eq!(err.detail, "Request failed with status 502");
        assert_eq!(err.status, Some(502));
    }

    #[tokio::test]
    async fn test_empty_success_body() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(204, "");
        transport.respond(200, "");

        assert_eq!(api.delete("/api/tasks/t1").await, Ok(()));
        assert_eq!(api.get::<TaskListResponse>("/api/tasks").await, Ok(None));
    }

    #[tokio::test]
    async fn test_network_failure_normalized() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.fail("connection refused");

        let err = api.get::<TaskListResponse>("/api/tasks").await.unwrap_err();
        assert_eq!(err.detail, "Network error: connection refused");
        assert_eq!(err.status, None);
    }

    #[tokio::test]
    async fn test_bad_success_body() {
        let transport = Arc::new(ScriptedTransport::new());
        let api = client(&transport, &TokenStore::in_memory());
        transport.respond(200, r#"{"unexpected": true}"#);

        let err = api.get::<TaskListResponse>("/api/tasks").await.unwrap_err();
        assert_eq!(err.detail, "Invalid response from server");
        assert_eq!(err.status, Some(200));
    }
}
