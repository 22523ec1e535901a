// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};

use crate::adapter::ApiResource;

use FieldRule::{MaxLength, Min, Required};

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("shelfCode", &[Required, MaxLength(50)]),
    FieldSpec::integer("storeId", &[Required, Min(1)]),
    FieldSpec::integer("categoryId", &[Required, Min(1)]),
    FieldSpec::text("locationDescription", &[MaxLength(100)]),
    FieldSpec::integer("capacity", &[Required, Min(1)]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shelf {
    pub shelf_id: EntityId,
    #[serde(default)]
    pub shelf_code: String,
    #[serde(default)]
    pub store_id: Option<i64>,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub location_description: Option<String>,
    #[serde(default)]
    pub capacity: Option<i64>,
}

impl Entity for Shelf {
    const KIND: &'static str = "shelf";
    const PLURAL: &'static str = "shelves";

    fn id(&self) -> EntityId {
        self.shelf_id
    }

    fn label(&self) -> String {
        self.shelf_code.clone()
    }

    fn form_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new().with("shelfCode", &self.shelf_code);
        fields.set_opt("storeId", self.store_id);
        fields.set_opt("categoryId", self.category_id);
        fields.set_opt("locationDescription", self.location_description.as_deref());
        fields.set_opt("capacity", self.capacity);
        fields
    }

    fn schema(_mode: FormMode) -> &'static [FieldSpec] {
        SCHEMA
    }
}

impl ApiResource for Shelf {
    const PATH: &'static str = "/api/Shelf";
}
