// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Product-to-shelf mappings.
//!
//! New mappings are not placed by hand: the backend picks a shelf for the
//! product's category (`POST /api/ProductShelf/auto-assign`). Editing an
//! existing mapping names the shelf directly.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use shelfsense_core::{Entity, EntityId, FieldMap, FieldRule, FieldSpec, FormMode};

use crate::adapter::ApiResource;

use FieldRule::{Min, Required};

const CREATE_SCHEMA: &[FieldSpec] = &[
    FieldSpec::integer("productId", &[Required, Min(1)]),
    FieldSpec::integer("categoryId", &[Required, Min(1)]),
    FieldSpec::integer("initialQuantity", &[Required, Min(1)]),
];

const EDIT_SCHEMA: &[FieldSpec] = &[
    FieldSpec::integer("productId", &[Required, Min(1)]),
    FieldSpec::integer("shelfId", &[Required, Min(1)]),
    FieldSpec::integer("initialQuantity", &[Required, Min(1)]),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductShelf {
    pub product_shelf_id: EntityId,
    pub product_id: i64,
    pub shelf_id: i64,
    #[serde(default)]
    pub quantity: i64,
    #[serde(default)]
    pub last_restocked_at: Option<String>,
}

impl Entity for ProductShelf {
    const KIND: &'static str = "mapping";
    const PLURAL: &'static str = "mappings";

    fn id(&self) -> EntityId {
        self.product_shelf_id
    }

    fn label(&self) -> String {
        format!("product #{} on shelf #{}", self.product_id, self.shelf_id)
    }

    /// The quantity is edited through the `initialQuantity` field.
    fn form_fields(&self) -> FieldMap {
        FieldMap::new()
            .with("productId", self.product_id)
            .with("shelfId", self.shelf_id)
            .with("initialQuantity", self.quantity)
    }

    fn schema(mode: FormMode) -> &'static [FieldSpec] {
        match mode {
            FormMode::Create => CREATE_SCHEMA,
            FormMode::Edit(_) => EDIT_SCHEMA,
        }
    }
}

impl ApiResource for ProductShelf {
    const PATH: &'static str = "/api/ProductShelf";

    fn create_path() -> String {
        format!("{}/auto-assign", Self::PATH)
    }

    fn update_payload(_id: EntityId, fields: &FieldMap) -> Value {
        json!({
            "productId": fields.integer("productId"),
            "shelfId": fields.integer("shelfId"),
            "quantity": fields.integer("initialQuantity"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shelfsense_core::form::validate;

    fn fields() -> FieldMap {
        FieldMap::new()
            .with("productId", "3")
            .with("categoryId", "2")
            .with("shelfId", "9")
            .with("initialQuantity", "25")
    }

    #[test]
    fn create_goes_to_auto_assign_with_category() {
        assert_eq!(ProductShelf::create_path(), "/api/ProductShelf/auto-assign");
        assert_eq!(
            ProductShelf::create_payload(&fields()),
            json!({ "productId": 3, "categoryId": 2, "initialQuantity": 25 })
        );
    }

    #[test]
    fn update_renames_quantity_and_names_shelf() {
        assert_eq!(
            ProductShelf::update_payload(EntityId(1), &fields()),
            json!({ "productId": 3, "shelfId": 9, "quantity": 25 })
        );
    }

    #[test]
    fn schemas_differ_by_mode() {
        let no_shelf = FieldMap::new()
            .with("productId", "3")
            .with("categoryId", "2")
            .with("initialQuantity", "1");
        assert!(validate(ProductShelf::schema(FormMode::Create), &no_shelf).is_ok());
        let err = validate(ProductShelf::schema(FormMode::Edit(EntityId(1))), &no_shelf)
            .unwrap_err();
        assert!(err.has_field("shelfId"));
    }

    #[test]
    fn edit_form_carries_quantity_as_initial_quantity() {
        let mapping = ProductShelf {
            product_shelf_id: EntityId(8),
            product_id: 3,
            shelf_id: 9,
            quantity: 14,
            last_restocked_at: None,
        };
        assert_eq!(mapping.form_fields().get("initialQuantity"), Some("14"));
        assert_eq!(mapping.label(), "product #3 on shelf #9");
    }
}
