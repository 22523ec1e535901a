// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Authenticated HTTP client for the inventory backend.
//!
//! Every resource call attaches `Authorization: Bearer <token>` read from the
//! session store at call time, and maps non-success statuses onto
//! [`ResourceError`].

use std::sync::Arc;

use reqwest::{Method, RequestBuilder, StatusCode};
use serde_json::Value;
use shelfsense_config::model::ApiConfig;
use shelfsense_core::{ResourceError, ShelfError};
use shelfsense_security::build_client;
use shelfsense_session::SessionStore;
use tracing::{debug, error, warn};

/// Header the backend requires on every delete.
pub const CONFIRM_DELETE_HEADER: &str = "X-Confirm-Delete";

/// HTTP client bound to one backend and one session.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    session: Arc<SessionStore>,
}

impl ApiClient {
    /// Creates a client for the backend at `config.base_url`.
    pub fn new(config: &ApiConfig, session: Arc<SessionStore>) -> Result<Self, ShelfError> {
        let http = build_client(config)?;
        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn session(&self) -> &Arc<SessionStore> {
        &self.session
    }

    pub(crate) fn http(&self) -> &reqwest::Client {
        &self.http
    }

    /// Absolute URL for an `/api/...` path.
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// GETs `path` and returns the decoded JSON body.
    pub async fn get_json(&self, path: &str) -> Result<Value, ResourceError> {
        let response = self.execute(Method::GET, path, None, false).await?;
        response
            .json::<Value>()
            .await
            .map_err(|e| ResourceError::server(format!("failed to parse response body: {e}")))
    }

    /// Sends `body` with `method` (POST or PUT) and discards the answer.
    pub async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: &Value,
    ) -> Result<(), ResourceError> {
        self.execute(method, path, Some(body), false).await.map(drop)
    }

    /// DELETEs `path` with the confirmation header.
    pub async fn delete(&self, path: &str) -> Result<(), ResourceError> {
        self.execute(Method::DELETE, path, None, true).await.map(drop)
    }

    fn bearer(&self) -> Result<String, ResourceError> {
        match self.session.access_token() {
            Some(token) => Ok(token),
            None => {
                error!("resource call attempted without an access token");
                Err(ResourceError::MissingToken)
            }
        }
    }

    async fn execute(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
        confirm_delete: bool,
    ) -> Result<reqwest::Response, ResourceError> {
        let token = self.bearer()?;
        let url = self.url(path);

        let mut request: RequestBuilder = self
            .http
            .request(method.clone(), &url)
            .bearer_auth(token);
        if confirm_delete {
            request = request.header(CONFIRM_DELETE_HEADER, "true");
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(|e| {
            warn!(%method, path, error = %e, "request failed");
            ResourceError::NetworkFailure(e.to_string())
        })?;

        let status = response.status();
        debug!(%method, path, status = %status, "response received");
        if status.is_success() {
            return Ok(response);
        }

        let text = response.text().await.unwrap_or_default();
        Err(status_error(status, &text))
    }
}

/// Maps a non-success status and its body onto a [`ResourceError`].
pub fn status_error(status: StatusCode, body: &str) -> ResourceError {
    let message = error_message(body)
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("request failed").to_string());
    match status {
        StatusCode::NOT_FOUND => ResourceError::NotFound,
        StatusCode::CONFLICT => ResourceError::Conflict { message },
        _ => ResourceError::ServerError {
            status: Some(status.as_u16()),
            message,
        },
    }
}

/// Pulls a human-readable message out of an error body.
///
/// Prefers a JSON `message` (then `title`, as in problem-details bodies);
/// short plain-text bodies are used as-is; HTML and empty bodies yield
/// `None`.
pub fn error_message(body: &str) -> Option<String> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(Value::Object(object)) = serde_json::from_str::<Value>(trimmed) {
        return ["message", "title"]
            .iter()
            .find_map(|key| object.get(*key).and_then(Value::as_str))
            .filter(|m| !m.trim().is_empty())
            .map(str::to_string);
    }
    if trimmed.starts_with('<') || trimmed.len() > 200 {
        return None;
    }
    Some(trimmed.to_string())
}
