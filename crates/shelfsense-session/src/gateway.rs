// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Credential exchange contract and post-login routing.

use async_trait::async_trait;
use shelfsense_core::form::{self, FieldRule, FieldSpec};
use shelfsense_core::{AuthError, FieldMap, Role, ValidationError};
use strum::Display;

use crate::store::Session;

const LOGIN_SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("email", &[FieldRule::Required, FieldRule::Email]),
    FieldSpec::text("password", &[FieldRule::Required, FieldRule::MinLength(6)]),
];

/// Email and password as typed on the login screen.
#[derive(Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Checks the login form rules without touching the network.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let fields = FieldMap::new()
            .with("email", self.email.trim())
            .with("password", &self.password);
        form::validate(LOGIN_SCHEMA, &fields)
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// Exchanges credentials for a session.
///
/// Implementations perform exactly one request per call and never retry.
/// They do not write the session store; callers pass the returned session to
/// [`SessionStore::open`](crate::SessionStore::open).
#[async_trait]
pub trait AuthGateway: Send + Sync {
    async fn login(&self, credentials: &Credentials) -> Result<Session, AuthError>;
}

/// Where the client goes after a successful login.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "kebab-case")]
pub enum Landing {
    Home,
    WarehouseDashboard,
    /// The token carried no usable role; stay on the login screen.
    Denied,
}

impl Landing {
    pub fn for_role(role: Role) -> Landing {
        match role {
            Role::Admin | Role::Manager | Role::Staff => Landing::Home,
            Role::Warehouse => Landing::WarehouseDashboard,
            Role::Unknown => Landing::Denied,
        }
    }
}
