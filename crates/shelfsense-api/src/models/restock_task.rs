// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Restock tasks and their status views.

use serde::{Deserialize, Serialize};
use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};
use strum::{Display, EnumIter};

use crate::adapter::ApiResource;

use FieldRule::{MaxLength, Min, Required};

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::integer("productId", &[Required, Min(1)]),
    FieldSpec::integer("shelfId", &[Required, Min(1)]),
    FieldSpec::integer("quantity", &[Required, Min(1)]),
    FieldSpec::text("status", &[Required, MaxLength(20)]),
];

/// Coarse classification of the free-text task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum TaskStatus {
    Pending,
    Completed,
    Delayed,
    Other,
}

impl TaskStatus {
    /// Case-insensitive; anything unrecognized is `Other`.
    pub fn classify(status: &str) -> TaskStatus {
        match status.trim().to_ascii_lowercase().as_str() {
            "pending" => TaskStatus::Pending,
            "completed" => TaskStatus::Completed,
            "delayed" => TaskStatus::Delayed,
            _ => TaskStatus::Other,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestockTask {
    pub task_id: EntityId,
    #[serde(default)]
    pub product_id: Option<i64>,
    #[serde(default)]
    pub shelf_id: Option<i64>,
    #[serde(default)]
    pub quantity: Option<i64>,
    #[serde(default)]
    pub status: String,
}

impl RestockTask {
    pub fn status_kind(&self) -> TaskStatus {
        TaskStatus::classify(&self.status)
    }
}

/// Tasks whose status equals `filter`, ignoring case. A blank filter keeps
/// every task.
pub fn filter_by_status<'a>(tasks: &'a [RestockTask], filter: &str) -> Vec<&'a RestockTask> {
    let filter = filter.trim();
    tasks
        .iter()
        .filter(|t| filter.is_empty() || t.status.trim().eq_ignore_ascii_case(filter))
        .collect()
}

/// Tasks with id `id`. `None` or id 0 keeps every task.
pub fn filter_by_id(tasks: &[RestockTask], id: Option<EntityId>) -> Vec<&RestockTask> {
    let id = id.filter(|id| id.0 != 0);
    tasks
        .iter()
        .filter(|t| id.is_none_or(|id| t.task_id == id))
        .collect()
}

impl Entity for RestockTask {
    const KIND: &'static str = "restock task";
    const PLURAL: &'static str = "restock tasks";

    fn id(&self) -> EntityId {
        self.task_id
    }

    fn label(&self) -> String {
        format!("task #{} ({})", self.task_id, self.status)
    }

    fn form_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new().with("status", &self.status);
        fields.set_opt("productId", self.product_id);
        fields.set_opt("shelfId", self.shelf_id);
        fields.set_opt("quantity", self.quantity);
        fields
    }

    fn schema(_mode: FormMode) -> &'static [FieldSpec] {
        SCHEMA
    }
}

impl ApiResource for RestockTask {
    const PATH: &'static str = "/api/RestockTask";
}
