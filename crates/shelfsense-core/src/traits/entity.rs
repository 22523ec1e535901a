// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Record types managed by a resource screen.

use crate::form::{FieldMap, FieldSpec};
use crate::types::{EntityId, FormMode};

/// A backend record shown and edited by one dashboard screen.
///
/// The resource controller only reads the identifier; the remaining methods
/// feed the form and the delete confirmation prompt.
pub trait Entity: Clone + std::fmt::Debug + Send + Sync + 'static {
    /// Singular display name, e.g. `"product"`.
    const KIND: &'static str;

    /// Plural display name, e.g. `"products"`.
    const PLURAL: &'static str;

    /// Stable numeric identifier.
    fn id(&self) -> EntityId;

    /// Human-readable label used in confirmations.
    fn label(&self) -> String;

    /// Current values of the editable fields, used to seed an edit form.
    fn form_fields(&self) -> FieldMap;

    /// Form fields and their rules for the given mode.
    fn schema(mode: FormMode) -> &'static [FieldSpec];
}
