// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP implementation of the login exchange.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use shelfsense_core::AuthError;
use shelfsense_session::{AuthGateway, Credentials, Session};
use tracing::{debug, info, warn};

use crate::client::{ApiClient, error_message};

/// Path of the login endpoint.
pub const LOGIN_PATH: &str = "/api/auth/login";

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct LoginResponse {
    #[serde(default, alias = "token")]
    access_token: Option<String>,
    #[serde(default)]
    refresh_token: Option<String>,
}

/// Posts credentials to `/api/auth/login`.
///
/// One request per call, no retries. The returned session is not stored.
#[derive(Debug, Clone)]
pub struct HttpAuthGateway {
    http: reqwest::Client,
    login_url: String,
}

impl HttpAuthGateway {
    /// Shares the connection pool and base URL of `client`.
    pub fn new(client: &ApiClient) -> Self {
        Self {
            http: client.http().clone(),
            login_url: client.url(LOGIN_PATH),
        }
    }
}

#[async_trait]
impl AuthGateway for HttpAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        let body = LoginRequest {
            email: credentials.email.trim(),
            password: &credentials.password,
        };

        let response = self
            .http
            .post(&self.login_url)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "login request failed");
                AuthError::NetworkFailure(e.to_string())
            })?;

        let status = response.status();
        debug!(status = %status, "login response received");

        if matches!(
            status,
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN | StatusCode::CONFLICT
        ) {
            info!(email = %body.email, "login rejected");
            return Err(AuthError::InvalidCredentials);
        }

        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            let message = error_message(&text)
                .unwrap_or_else(|| format!("login failed with status {}", status.as_u16()));
            warn!(status = %status, "login endpoint error");
            return Err(AuthError::ServerError(message));
        }

        let parsed: LoginResponse = response
            .json()
            .await
            .map_err(|e| AuthError::ServerError(format!("failed to parse login response: {e}")))?;

        let access_token = parsed
            .access_token
            .filter(|t| !t.is_empty())
            .ok_or_else(|| AuthError::ServerError("login response carried no access token".into()))?;

        let session = Session::new(access_token, parsed.refresh_token);
        info!(email = %body.email, role = %session.role, "login accepted");
        Ok(session)
    }
}
