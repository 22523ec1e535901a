// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the ShelfSense dashboard client.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level ShelfSense configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable overrides.
/// All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShelfsenseConfig {
    /// Process-wide settings.
    #[serde(default)]
    pub app: AppConfig,

    /// Inventory API connection settings.
    #[serde(default)]
    pub api: ApiConfig,

    /// Client-local session persistence.
    #[serde(default)]
    pub session: SessionConfig,

    /// Sidebar layout settings.
    #[serde(default)]
    pub navigation: NavigationConfig,
}

/// Process-wide configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AppConfig {
    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Inventory API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ApiConfig {
    /// Scheme, host and port of the backend, without a trailing `/api`.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Per-request timeout in seconds.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Accept self-signed certificates (local development backends only).
    #[serde(default)]
    pub accept_invalid_certs: bool,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            accept_invalid_certs: false,
        }
    }
}

fn default_base_url() -> String {
    "https://localhost:7098".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

/// Session persistence configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Path of the JSON file holding the access and refresh tokens.
    #[serde(default = "default_store_path")]
    pub store_path: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            store_path: default_store_path(),
        }
    }
}

fn default_store_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("shelfsense").join("session.json"))
        .and_then(|p| p.to_str().map(String::from))
        .unwrap_or_else(|| "shelfsense-session.json".to_string())
}

/// Sidebar layout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct NavigationConfig {
    /// Viewport width (in columns or pixels) below which the collapsed mobile layout applies.
    #[serde(default = "default_mobile_breakpoint")]
    pub mobile_breakpoint: u32,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            mobile_breakpoint: default_mobile_breakpoint(),
        }
    }
}

fn default_mobile_breakpoint() -> u32 {
    768
}
