// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error taxonomy for the ShelfSense dashboard client.
//!
//! Three recoverable families exist, one per boundary:
//! - [`ValidationError`]: local form checks, never reaches the network.
//! - [`AuthError`]: credential exchange with the auth endpoint.
//! - [`ResourceError`]: list/create/update/delete against a resource endpoint.
//!
//! [`ShelfError`] aggregates them together with configuration, storage and
//! internal failures.

use thiserror::Error;

use crate::form::FieldViolation;
use crate::types::{Capability, Role};

/// The primary error type used across the workspace.
#[derive(Debug, Error)]
pub enum ShelfError {
    /// Configuration errors (invalid TOML, missing values, bad URLs).
    #[error("configuration error: {0}")]
    Config(String),

    /// Client-local storage errors (token store unreadable or unwritable).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A form failed local validation.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Credential exchange failed.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// A resource endpoint call failed.
    #[error(transparent)]
    Resource(#[from] ResourceError),

    /// No session is stored.
    #[error("not signed in")]
    Unauthenticated,

    /// The signed-in role lacks the capability an action needs.
    #[error("role '{role}' lacks capability '{capability}'")]
    Forbidden { role: Role, capability: Capability },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

/// One or more form fields violate their rules.
///
/// Raised before any network call; the form stays editable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} field(s) invalid: {}", .violations.len(), summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<FieldViolation>,
}

impl ValidationError {
    /// Returns true if `field` has at least one violation.
    pub fn has_field(&self, field: &str) -> bool {
        self.violations.iter().any(|v| v.field == field)
    }
}

fn summarize(violations: &[FieldViolation]) -> String {
    violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Failure to exchange credentials for a session.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// The backend rejected the email/password pair.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// The auth endpoint could not be reached.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// The auth endpoint answered with an unexpected error.
    #[error("server error: {0}")]
    ServerError(String),
}

/// Failure of a resource adapter call.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResourceError {
    /// The addressed record does not exist (HTTP 404).
    #[error("resource not found")]
    NotFound,

    /// The backend refused the write because it collides with existing data (HTTP 409).
    #[error("conflict: {message}")]
    Conflict { message: String },

    /// Any other non-success answer from the backend.
    #[error("server error: {message}")]
    ServerError {
        status: Option<u16>,
        message: String,
    },

    /// The endpoint could not be reached.
    #[error("network failure: {0}")]
    NetworkFailure(String),

    /// No access token was present when the call was attempted.
    ///
    /// Navigation guards should make this unreachable; the request is never sent.
    #[error("no access token in session; refusing to send an unauthenticated request")]
    MissingToken,

    /// The call was aborted because a newer request superseded it.
    #[error("request cancelled")]
    Cancelled,
}

impl ResourceError {
    /// Builds a server error without an HTTP status (e.g. an unparseable body).
    pub fn server(message: impl Into<String>) -> Self {
        ResourceError::ServerError {
            status: None,
            message: message.into(),
        }
    }
}
