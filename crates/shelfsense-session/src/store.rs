// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The session store: one owned holder of the current credentials.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use shelfsense_core::{Role, ShelfError, TokenStore};
use tracing::{info, warn};

use crate::claims::role_from_token;
use crate::token_store::{ACCESS_TOKEN_KEY, ISSUED_AT_KEY, MemoryTokenStore, REFRESH_TOKEN_KEY};

/// Snapshot of the authenticated session.
///
/// The role is derived from `access_token` when the snapshot is taken.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub role: Role,
    pub issued_locally: Option<DateTime<Utc>>,
}

impl Session {
    /// Builds a session from freshly issued tokens.
    pub fn new(access_token: impl Into<String>, refresh_token: Option<String>) -> Self {
        let access_token = access_token.into();
        Self {
            role: role_from_token(&access_token),
            access_token,
            refresh_token,
            issued_locally: None,
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("access_token", &"[REDACTED]")
            .field(
                "refresh_token",
                &self.refresh_token.as_ref().map(|_| "[REDACTED]"),
            )
            .field("role", &self.role)
            .field("issued_locally", &self.issued_locally)
            .finish()
    }
}

/// Holds, reads and clears the persisted credentials.
///
/// Shared through `Arc`; all state lives in the backing [`TokenStore`], so
/// the role is recomputed from the stored token on every read.
pub struct SessionStore {
    store: Arc<dyn TokenStore>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn TokenStore>) -> Self {
        Self { store }
    }

    /// A store backed by process memory only.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryTokenStore::new()))
    }

    /// Persists both tokens and the local issue time in one write.
    pub fn set_session(&self, access_token: &str, refresh_token: &str) -> Result<(), ShelfError> {
        let issued_at = Utc::now().to_rfc3339();
        self.store.put_all(&[
            (ACCESS_TOKEN_KEY, access_token),
            (REFRESH_TOKEN_KEY, refresh_token),
            (ISSUED_AT_KEY, &issued_at),
        ])?;
        info!(role = %role_from_token(access_token), "session stored");
        Ok(())
    }

    /// Stores the tokens carried by `session`.
    pub fn open(&self, session: &Session) -> Result<(), ShelfError> {
        self.set_session(
            &session.access_token,
            session.refresh_token.as_deref().unwrap_or_default(),
        )
    }

    pub fn access_token(&self) -> Option<String> {
        self.read(ACCESS_TOKEN_KEY)
    }

    pub fn refresh_token(&self) -> Option<String> {
        self.read(REFRESH_TOKEN_KEY)
    }

    /// Role of the stored access token; [`Role::Unknown`] without one.
    pub fn role(&self) -> Role {
        self.access_token()
            .map(|token| role_from_token(&token))
            .unwrap_or(Role::Unknown)
    }

    /// When the current session was stored on this client, if recorded.
    pub fn issued_locally(&self) -> Option<DateTime<Utc>> {
        let raw = self.read(ISSUED_AT_KEY)?;
        match DateTime::parse_from_rfc3339(&raw) {
            Ok(ts) => Some(ts.with_timezone(&Utc)),
            Err(e) => {
                warn!(error = %e, "ignoring unparseable session timestamp");
                None
            }
        }
    }

    /// The current session, present iff an access token is stored.
    pub fn session(&self) -> Option<Session> {
        let access_token = self.access_token()?;
        Some(Session {
            role: role_from_token(&access_token),
            access_token,
            refresh_token: self.refresh_token(),
            issued_locally: self.issued_locally(),
        })
    }

    pub fn is_authenticated(&self) -> bool {
        self.access_token().is_some()
    }

    /// Removes every session key in one step.
    pub fn clear(&self) -> Result<(), ShelfError> {
        self.store
            .remove_all(&[ACCESS_TOKEN_KEY, REFRESH_TOKEN_KEY, ISSUED_AT_KEY])?;
        info!("session cleared");
        Ok(())
    }

    /// Token values that must never appear in log output.
    pub fn secret_values(&self) -> Vec<String> {
        [self.access_token(), self.refresh_token()]
            .into_iter()
            .flatten()
            .filter(|v| !v.is_empty())
            .collect()
    }

    fn read(&self, key: &str) -> Option<String> {
        match self.store.get(key) {
            Ok(value) => value.filter(|v| !v.is_empty()),
            Err(e) => {
                warn!(key, error = %e, "token store read failed; treating as absent");
                None
            }
        }
    }
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .finish()
    }
}
