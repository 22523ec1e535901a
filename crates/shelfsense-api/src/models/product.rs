// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use serde::{Deserialize, Serialize};
use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};

use crate::adapter::ApiResource;

use FieldRule::{MaxLength, Required};

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("stockKeepingUnit", &[Required, MaxLength(50)]),
    FieldSpec::text("productName", &[Required, MaxLength(100)]),
    FieldSpec::integer("categoryId", &[Required]),
    FieldSpec::text("packageSize", &[MaxLength(50)]),
    FieldSpec::text("unit", &[MaxLength(20)]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: EntityId,
    #[serde(default)]
    pub stock_keeping_unit: String,
    #[serde(default)]
    pub product_name: String,
    #[serde(default)]
    pub category_id: Option<i64>,
    #[serde(default)]
    pub package_size: Option<String>,
    #[serde(default)]
    pub unit: Option<String>,
}

impl Entity for Product {
    const KIND: &'static str = "product";
    const PLURAL: &'static str = "products";

    fn id(&self) -> EntityId {
        self.product_id
    }

    fn label(&self) -> String {
        self.product_name.clone()
    }

    fn form_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new()
            .with("stockKeepingUnit", &self.stock_keeping_unit)
            .with("productName", &self.product_name);
        fields.set_opt("categoryId", self.category_id);
        fields.set_opt("packageSize", self.package_size.as_deref());
        fields.set_opt("unit", self.unit.as_deref());
        fields
    }

    fn schema(_mode: FormMode) -> &'static [FieldSpec] {
        SCHEMA
    }
}

impl ApiResource for Product {
    const PATH: &'static str = "/api/Product";
}
