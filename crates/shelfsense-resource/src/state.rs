// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Observable state of one resource screen.

use shelfsense_core::{Entity, EntityId, FieldMap, FormMode, ResourceError};

/// A delete awaiting the user's confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingDelete {
    pub id: EntityId,
    pub label: String,
}

/// Everything a screen renders.
///
/// `mode` and `pending_delete` are independent: a delete may be pending while
/// the form edits another record.
#[derive(Debug, Clone)]
pub struct ControllerState<E> {
    pub items: Vec<E>,
    pub loading: bool,
    pub submitting: bool,
    pub mode: FormMode,
    pub pending_delete: Option<PendingDelete>,
    /// Current form values.
    pub draft: FieldMap,
    /// Failure of the most recent load; cleared when the next load starts.
    pub load_error: Option<ResourceError>,
}

impl<E> Default for ControllerState<E> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            loading: false,
            submitting: false,
            mode: FormMode::Create,
            pending_delete: None,
            draft: FieldMap::new(),
            load_error: None,
        }
    }
}

impl<E: Entity> ControllerState<E> {
    pub fn find(&self, id: EntityId) -> Option<&E> {
        self.items.iter().find(|item| item.id() == id)
    }

    /// True when no load is running, the last one did not fail, and no
    /// records are held.
    pub fn is_empty_result(&self) -> bool {
        !self.loading && self.load_error.is_none() && self.items.is_empty()
    }
}
