// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./shelfsense.toml` > `~/.config/shelfsense/shelfsense.toml`
//! > `/etc/shelfsense/shelfsense.toml` with `SHELFSENSE_` environment overrides.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ShelfsenseConfig;

/// Config file name looked up in each directory of the hierarchy.
pub const CONFIG_FILE: &str = "shelfsense.toml";

/// System-wide config location.
pub const SYSTEM_CONFIG_PATH: &str = "/etc/shelfsense/shelfsense.toml";

/// Sections whose env var keys are mapped to dotted paths.
const SECTIONS: &[&str] = &["app", "api", "session", "navigation"];

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/shelfsense/shelfsense.toml`
/// 3. `~/.config/shelfsense/shelfsense.toml`
/// 4. `./shelfsense.toml`
/// 5. `SHELFSENSE_*` environment variables
pub fn load_config() -> Result<ShelfsenseConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<ShelfsenseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShelfsenseConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShelfsenseConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShelfsenseConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for the XDG lookup, before extraction.
pub fn build_figment() -> Figment {
    Figment::new()
        .merge(Serialized::defaults(ShelfsenseConfig::default()))
        .merge(Toml::file(SYSTEM_CONFIG_PATH))
        .merge(Toml::file(user_config_path().unwrap_or_default()))
        .merge(Toml::file(CONFIG_FILE))
        .merge(env_provider())
}

/// `~/.config/shelfsense/shelfsense.toml`, when a config directory exists.
pub fn user_config_path() -> Option<std::path::PathBuf> {
    dirs::config_dir().map(|d| d.join("shelfsense").join(CONFIG_FILE))
}

/// Create the environment variable provider.
///
/// Only the section prefix is turned into a dot, so
/// `SHELFSENSE_API_BASE_URL` maps to `api.base_url`, not `api.base.url`.
/// `SHELFSENSE_*` variables that name a config section. Other variables
/// with the prefix (e.g. `SHELFSENSE_PASSWORD`) are not config keys.
fn env_provider() -> Env {
    Env::prefixed("SHELFSENSE_")
        .filter(|key| is_section_key(key.as_str()))
        .map(|key| map_env_key(key.as_str()).into())
}

fn is_section_key(key: &str) -> bool {
    map_env_key(key).contains('.')
}

fn map_env_key(key: &str) -> String {
    for section in SECTIONS {
        if let Some(rest) = key
            .strip_prefix(section)
            .and_then(|rest| rest.strip_prefix('_'))
        {
            return format!("{section}.{rest}");
        }
    }
    key.to_string()
}
