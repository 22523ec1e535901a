// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport security and log hygiene for the ShelfSense client.
//!
//! Provides the TLS-enforcing HTTP client builder and redaction of access
//! tokens from log output.

pub mod redact;
pub mod tls;

pub use redact::{RedactingWriter, SecretList, redact};
pub use tls::{build_client, is_localhost, validate_url};
