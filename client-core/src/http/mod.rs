//! Generic authenticated request helper.
//!
//! Every backend call in the client goes through [`ApiClient::request`]:
//! one attempt per call, bearer token attached when the session has one,
//! JSON in and JSON out. Non-2xx responses become
//! [`ClientError::Api`] carrying the server's `message` field.

use crate::error::ClientError;
use crate::session::{keys, SessionStore};
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, session: Arc<dyn SessionStore>) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.into(),
            session,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> Arc<dyn SessionStore> {
        self.session.clone()
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        self.request(Method::GET, path, None, cancel).await
    }

    pub async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        self.request(Method::POST, path, Some(body), cancel).await
    }

    pub async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: serde_json::Value,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        self.request(Method::PUT, path, Some(body), cancel).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        self.request(Method::DELETE, path, None, cancel).await
    }

    /// Send a single request and decode the JSON response.
    ///
    /// The cancellation token is tied to the consuming view's lifetime:
    /// cancelling it drops the in-flight request and resolves the call to
    /// [`ClientError::Cancelled`] instead of writing into a dead view.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        cancel: &CancellationToken,
    ) -> Result<T, ClientError> {
        tokio::select! {
            _ = cancel.cancelled() => Err(ClientError::Cancelled),
            result = self.execute(method, path, body) => result,
        }
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
    ) -> Result<T, ClientError> {
        let url = format!("{}{}", self.base_url, path);

        let mut request = self.http.request(method.clone(), &url);
        if let Some(token) = self.session.get(keys::TOKEN)? {
            request = request.bearer_auth(token);
        }
        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let raw = response.text().await?;

        tracing::debug!(method = %method, url = %url, status = %status, "backend response");

        if status.is_success() {
            Ok(serde_json::from_str(&raw)?)
        } else {
            Err(ClientError::Api {
                status: status.as_u16(),
                message: extract_error_message(status, &raw),
            })
        }
    }
}

/// Pull the `message` field out of an error body, falling back to a
/// generic string when the body is not the expected JSON object.
fn extract_error_message(status: StatusCode, raw: &str) -> String {
    serde_json::from_str::<serde_json::Value>(raw)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(|message| message.as_str())
                .map(str::to_owned)
        })
        .unwrap_or_else(|| format!("Request failed with status {}", status.as_u16()))
}
