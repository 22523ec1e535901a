// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! TLS policy for the backend connection.
//!
//! Access tokens travel in every request header, so remote backends must be
//! reached over HTTPS. Plain HTTP and self-signed certificates are tolerated
//! only for a backend on the local machine.

use std::time::Duration;

use shelfsense_config::model::ApiConfig;
use shelfsense_core::ShelfError;
use tracing::{error, warn};

/// Builds the HTTP client used for every backend call.
///
/// - Minimum TLS 1.2.
/// - Per-request timeout from `[api].timeout_secs`.
/// - Invalid certificates accepted only when configured and the backend is
///   local.
pub fn build_client(config: &ApiConfig) -> Result<reqwest::Client, ShelfError> {
    let url = validate_url(&config.base_url)?;
    let local = url.host_str().is_some_and(is_localhost);

    if config.accept_invalid_certs && !local {
        error!(base_url = %config.base_url, "refusing to skip certificate checks for a remote backend");
        return Err(ShelfError::Config(
            "api.accept_invalid_certs is only allowed for a localhost backend".to_string(),
        ));
    }

    let mut builder = reqwest::Client::builder()
        .min_tls_version(reqwest::tls::Version::TLS_1_2)
        .timeout(Duration::from_secs(config.timeout_secs));

    if config.accept_invalid_certs {
        warn!(base_url = %config.base_url, "certificate verification disabled for local backend");
        builder = builder.danger_accept_invalid_certs(true);
    }

    builder.build().map_err(|e| {
        error!("failed to build HTTP client: {e}");
        ShelfError::Config(format!("failed to build HTTP client: {e}"))
    })
}

/// Parses `url` and enforces the transport policy.
///
/// - Localhost URLs may use `http` or `https`.
/// - Remote URLs must use `https`.
pub fn validate_url(url: &str) -> Result<url::Url, ShelfError> {
    let parsed =
        url::Url::parse(url).map_err(|e| ShelfError::Config(format!("invalid URL {url:?}: {e}")))?;

    match (parsed.scheme(), parsed.host_str()) {
        (_, None) => Err(ShelfError::Config(format!("URL {url:?} has no host"))),
        ("https", Some(_)) => Ok(parsed),
        ("http", Some(host)) if is_localhost(host) => Ok(parsed),
        ("http", Some(_)) => {
            error!(url = %url, "TLS required for remote backends");
            Err(ShelfError::Config(
                "TLS required for remote backends -- use https".to_string(),
            ))
        }
        (scheme, Some(_)) => Err(ShelfError::Config(format!(
            "unsupported URL scheme {scheme:?}"
        ))),
    }
}

/// Check if a host refers to the local machine.
pub fn is_localhost(host: &str) -> bool {
    matches!(host, "localhost" | "::1" | "[::1]") || host.starts_with("127.")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn api(base_url: &str, accept_invalid_certs: bool) -> ApiConfig {
        ApiConfig {
            base_url: base_url.to_string(),
            timeout_secs: 5,
            accept_invalid_certs,
        }
    }

    #[test]
    fn https_remote_is_allowed() {
        assert!(validate_url("https://inventory.example.com").is_ok());
    }

    #[test]
    fn http_remote_is_rejected() {
        let err = validate_url("http://inventory.example.com").unwrap_err();
        assert!(err.to_string().contains("TLS required"));
    }

    #[test]
    fn http_localhost_is_allowed() {
        assert!(validate_url("http://localhost:5000").is_ok());
        assert!(validate_url("http://127.0.0.1:5000").is_ok());
        assert!(validate_url("http://[::1]:5000").is_ok());
    }

    #[test]
    fn garbage_and_odd_schemes_are_rejected() {
        assert!(validate_url("not a url").is_err());
        assert!(validate_url("ftp://localhost/").is_err());
    }

    #[test]
    fn localhost_detection() {
        assert!(is_localhost("localhost"));
        assert!(is_localhost("127.0.0.2"));
        assert!(!is_localhost("10.0.0.1"));
        assert!(!is_localhost("localhost.example.com"));
    }

    #[test]
    fn client_builds_for_default_config() {
        assert!(build_client(&ApiConfig::default()).is_ok());
    }

    #[test]
    fn invalid_certs_only_for_localhost() {
        assert!(build_client(&api("https://localhost:7098", true)).is_ok());
        assert!(matches!(
            build_client(&api("https://inventory.example.com", true)),
            Err(ShelfError::Config(_))
        ));
    }
}
