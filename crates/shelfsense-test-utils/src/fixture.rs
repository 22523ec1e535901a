// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! A minimal entity for driving generic resource code in tests.

use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};

const SCHEMA: &[FieldSpec] = &[
    FieldSpec::text("name", &[FieldRule::Required, FieldRule::MaxLength(20)]),
    FieldSpec::integer("quantity", &[FieldRule::Min(0)]),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestItem {
    pub id: EntityId,
    pub name: String,
    pub quantity: Option<i64>,
}

impl TestItem {
    pub fn new(id: i64, name: &str) -> Self {
        Self {
            id: EntityId(id),
            name: name.to_string(),
            quantity: None,
        }
    }
}

impl Entity for TestItem {
    const KIND: &'static str = "item";
    const PLURAL: &'static str = "items";

    fn id(&self) -> EntityId {
        self.id
    }

    fn label(&self) -> String {
        self.name.clone()
    }

    fn form_fields(&self) -> FieldMap {
        let mut fields = FieldMap::new().with("name", &self.name);
        fields.set_opt("quantity", self.quantity);
        fields
    }

    fn schema(_mode: FormMode) -> &'static [FieldSpec] {
        SCHEMA
    }
}
