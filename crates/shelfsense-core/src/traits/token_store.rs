// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Client-local key-value storage for session credentials.

use crate::error::ShelfError;

/// Synchronous key-value store holding opaque credential strings.
///
/// Multi-key writes and removals must be applied as a unit: a reader never
/// observes half of a `put_all` or `remove_all`.
pub trait TokenStore: Send + Sync {
    /// Reads a single value.
    fn get(&self, key: &str) -> Result<Option<String>, ShelfError>;

    /// Writes every entry in one step.
    fn put_all(&self, entries: &[(&str, &str)]) -> Result<(), ShelfError>;

    /// Removes every listed key in one step. Missing keys are ignored.
    fn remove_all(&self, keys: &[&str]) -> Result<(), ShelfError>;
}
