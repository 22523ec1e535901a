// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the session, policy and resource layers.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Stable numeric identifier of a backend record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntityId(pub i64);

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for EntityId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(EntityId)
    }
}

impl From<i64> for EntityId {
    fn from(id: i64) -> Self {
        EntityId(id)
    }
}

/// Whether a resource form creates a new record or edits an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormMode {
    #[default]
    Create,
    Edit(EntityId),
}

impl FormMode {
    /// Returns the record being edited, if any.
    pub fn editing(&self) -> Option<EntityId> {
        match self {
            FormMode::Create => None,
            FormMode::Edit(id) => Some(*id),
        }
    }
}

/// Permission class of the signed-in user, decoded from the access token.
///
/// `Unknown` stands for a missing or unrecognized claim and grants nothing.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Manager,
    Staff,
    Warehouse,
    Unknown,
}

impl Role {
    /// Maps a raw claim value to a role. Unrecognized values become `Unknown`.
    pub fn from_claim(value: &str) -> Role {
        value.trim().parse().unwrap_or(Role::Unknown)
    }

    /// Returns true for every role except `Unknown`.
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Unknown)
    }
}

/// A named, checkable permission.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize, Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
pub enum Capability {
    /// Products, categories, shelves and product-shelf mappings menu.
    ViewInventoryMenu,
    /// Stock request menu.
    ViewStockRequestMenu,
    /// Restock task menu.
    ViewRestockTaskMenu,
    /// The warehouse landing dashboard.
    ManageWarehouseDashboard,
    /// Create, update and delete inventory records.
    ManageInventory,
    /// Register new dashboard users.
    RegisterUsers,
}

/// Severity of a one-shot user notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum NoticeLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// A one-shot notification for the presentation layer (toast, status line).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            level,
            title: title.into(),
            message: message.into(),
        }
    }

    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, title, message)
    }

    pub fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, title, message)
    }

    pub fn warning(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, title, message)
    }

    pub fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, title, message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_from_claim_is_case_insensitive() {
        assert_eq!(Role::from_claim("Manager"), Role::Manager);
        assert_eq!(Role::from_claim("  WAREHOUSE "), Role::Warehouse);
        assert_eq!(Role::from_claim("admin"), Role::Admin);
    }

    #[test]
    fn unrecognized_claims_are_unknown() {
        assert_eq!(Role::from_claim(""), Role::Unknown);
        assert_eq!(Role::from_claim("superuser"), Role::Unknown);
        assert!(!Role::from_claim("root").is_known());
    }

    #[test]
    fn entity_id_parses_and_displays() {
        let id: EntityId = " 42 ".parse().expect("numeric id");
        assert_eq!(id, EntityId(42));
        assert_eq!(id.to_string(), "42");
        assert!("abc".parse::<EntityId>().is_err());
    }

    #[test]
    fn form_mode_reports_edit_target() {
        assert_eq!(FormMode::default(), FormMode::Create);
        assert_eq!(FormMode::Create.editing(), None);
        assert_eq!(FormMode::Edit(EntityId(5)).editing(), Some(EntityId(5)));
    }

    #[test]
    fn capability_display_is_kebab_case() {
        assert_eq!(Capability::ViewInventoryMenu.to_string(), "view-inventory-menu");
        let parsed: Capability = "manage-warehouse-dashboard".parse().expect("known capability");
        assert_eq!(parsed, Capability::ManageWarehouseDashboard);
    }
}
