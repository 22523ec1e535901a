// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Unsigned access tokens for tests.

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use serde_json::{Value, json};
use shelfsense_session::ROLE_CLAIM;

/// A `header.payload.signature` token whose payload carries `role`.
pub fn test_token(role: &str) -> String {
    test_token_with_claims(&json!({ "sub": "test-user", ROLE_CLAIM: role }))
}

/// A token with an arbitrary JSON payload.
pub fn test_token_with_claims(claims: &Value) -> String {
    let header = URL_SAFE_NO_PAD.encode(r#"{"alg":"none","typ":"JWT"}"#);
    let payload = URL_SAFE_NO_PAD.encode(claims.to_string());
    format!("{header}.{payload}.unsigned")
}
