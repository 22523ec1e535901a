// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted auth gateway.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use shelfsense_core::AuthError;
use shelfsense_session::{AuthGateway, Credentials, Session};
use tokio::sync::Mutex;

use crate::tokens::test_token;

/// Returns queued outcomes in order. An empty queue answers with
/// [`AuthError::InvalidCredentials`].
#[derive(Clone, Default)]
pub struct MockAuthGateway {
    outcomes: Arc<Mutex<VecDeque<Result<Session, AuthError>>>>,
    attempts: Arc<Mutex<Vec<String>>>,
}

impl MockAuthGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a successful login for `role`.
    pub async fn succeed_as(&self, role: &str) {
        let session = Session::new(test_token(role), Some(format!("refresh-{role}")));
        self.outcomes.lock().await.push_back(Ok(session));
    }

    pub async fn fail_with(&self, error: AuthError) {
        self.outcomes.lock().await.push_back(Err(error));
    }

    /// Emails of every login attempt, in order.
    pub async fn attempts(&self) -> Vec<String> {
        self.attempts.lock().await.clone()
    }
}

#[async_trait]
impl AuthGateway for MockAuthGateway {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError> {
        self.attempts.lock().await.push(credentials.email.clone());
        self.outcomes
            .lock()
            .await
            .pop_front()
            .unwrap_or(Err(AuthError::InvalidCredentials))
    }
}
