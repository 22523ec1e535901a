// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};

use crate::adapter::ApiResource;

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("categoryName", &[FieldRule::Required, FieldRule::MaxLength(100)]),
    FieldSpec::text("description", &[FieldRule::MaxLength(255)]),
];

/// Some backend versions call the key `categoryId`, and the name `name`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "categoryId")]
    pub id: EntityId,
    #[serde(default, alias = "name")]
    pub category_name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl Entity for Category {
    const KIND: &'static str = "category";
    const PLURAL: &'static str = "categories";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> String {
        self.category_name.clone()
    }

    fn form_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new().with("categoryName", &self.category_name);
        fields.set_opt("description", self.description.as_deref());
        fields
    }

    fn schema(_mode: FormMode) -> &'static [FieldSpec] {
        SCHEMA
    }
}

impl ApiResource for Category {
    const PATH: &'static str = "/api/Category";
}
