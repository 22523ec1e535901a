// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Role extraction from an unsigned view of the access token.
//!
//! The token is never verified here; the backend does that. The client only
//! reads the payload segment to decide which screens to offer.

use base64::Engine;
use base64::engine::general_purpose::{STANDARD_NO_PAD, URL_SAFE_NO_PAD};
use serde_json::{Map, Value};
use shelfsense_core::Role;

/// Claim key under which the backend issues the user's role.
pub const ROLE_CLAIM: &str = "http://schemas.microsoft.com/ws/2008/06/identity/claims/role";

/// Decodes the payload (middle) segment of a three-part token.
///
/// Returns `None` for anything that is not `header.payload.signature` with a
/// base64url JSON object in the middle. Trailing `=` padding is tolerated.
pub fn decode_claims(token: &str) -> Option<Map<String, Value>> {
    let mut segments = token.trim().split('.');
    let (_header, payload) = (segments.next()?, segments.next()?);
    segments.next()?;
    if segments.next().is_some() {
        return None;
    }

    let payload = payload.trim_end_matches('=');
    let bytes = URL_SAFE_NO_PAD
        .decode(payload)
        .or_else(|_| STANDARD_NO_PAD.decode(payload))
        .ok()?;

    match serde_json::from_slice::<Value>(&bytes).ok()? {
        Value::Object(claims) => Some(claims),
        _ => None,
    }
}

/// Derives the role carried by `token`.
///
/// Missing, malformed or unrecognized claims all yield [`Role::Unknown`].
/// An array claim resolves to its first element naming a known role.
pub fn role_from_token(token: &str) -> Role {
    let Some(claims) = decode_claims(token) else {
        return Role::Unknown;
    };

    match claims.get(ROLE_CLAIM) {
        Some(Value::String(value)) => Role::from_claim(value),
        Some(Value::Array(values)) => values
            .iter()
            .filter_map(Value::as_str)
            .map(Role::from_claim)
            .find(Role::is_known)
            .unwrap_or(Role::Unknown),
        _ => Role::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn token_with(payload: &Value) -> String {
        let body = URL_SAFE_NO_PAD.encode(payload.to_string());
        format!("eyJhbGciOiJub25lIn0.{body}.sig")
    }

    #[test]
    fn reads_string_role_claim() {
        let token = token_with(&json!({ ROLE_CLAIM: "Manager" }));
        assert_eq!(role_from_token(&token), Role::Manager);
    }

    #[test]
    fn array_claim_takes_first_known_role() {
        let token = token_with(&json!({ ROLE_CLAIM: ["Auditor", "Warehouse", "Admin"] }));
        assert_eq!(role_from_token(&token), Role::Warehouse);

        let token = token_with(&json!({ ROLE_CLAIM: ["Auditor", 3] }));
        assert_eq!(role_from_token(&token), Role::Unknown);
    }

    #[test]
    fn padded_payload_is_accepted() {
        let body = base64::engine::general_purpose::URL_SAFE
            .encode(json!({ ROLE_CLAIM: "staff" }).to_string());
        let token = format!("h.{body}.s");
        assert_eq!(role_from_token(&token), Role::Staff);
    }

    #[test]
    fn claimless_token_is_unknown() {
        let token = token_with(&json!({ "sub": "42" }));
        assert_eq!(role_from_token(&token), Role::Unknown);

        let token = token_with(&json!({ ROLE_CLAIM: null }));
        assert_eq!(role_from_token(&token), Role::Unknown);
    }

    #[test]
    fn malformed_tokens_are_unknown() {
        for token in ["", "abc", "a.b", "a.b.c.d", "a.!!!.c", "a.bm90IGpzb24.c"] {
            assert_eq!(role_from_token(token), Role::Unknown, "token: {token:?}");
        }
        // Valid JSON that is not an object.
        let body = URL_SAFE_NO_PAD.encode("[1,2,3]");
        assert_eq!(role_from_token(&format!("h.{body}.s")), Role::Unknown);
    }

    proptest::proptest! {
        #[test]
        fn arbitrary_input_never_panics(token in ".{0,200}") {
            let _ = role_from_token(&token);
        }

        #[test]
        fn arbitrary_segments_never_panic(a in "[A-Za-z0-9_-]{0,40}", b in "[A-Za-z0-9_=-]{0,80}") {
            let _ = role_from_token(&format!("{a}.{b}.sig"));
        }
    }
}
