// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the ShelfSense dashboard client.
//!
//! This crate provides the error taxonomy, the role and capability
//! enumerations, form validation, and the trait seams ([`Entity`],
//! [`ResourceAdapter`], [`TokenStore`]) that the session and resource
//! crates are written against.

pub mod error;
pub mod form;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::{AuthError, ResourceError, ShelfError, ValidationError};
pub use form::{FieldKind, FieldMap, FieldRule, FieldSpec, FieldViolation, Violation};
pub use types::{Capability, EntityId, FormMode, Notice, NoticeLevel, Role};

pub use traits::{Entity, ResourceAdapter, TokenStore};

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn shelf_error_has_all_variants() {
        let _config = ShelfError::Config("test".into());
        let _storage = ShelfError::Storage {
            source: Box::new(std::io::Error::other("test")),
        };
        let _validation = ShelfError::Validation(ValidationError { violations: vec![] });
        let _auth = ShelfError::Auth(AuthError::InvalidCredentials);
        let _resource = ShelfError::Resource(ResourceError::NotFound);
        let _unauthenticated = ShelfError::Unauthenticated;
        let _forbidden = ShelfError::Forbidden {
            role: Role::Unknown,
            capability: Capability::RegisterUsers,
        };
        let _internal = ShelfError::Internal("test".into());
    }

    #[test]
    fn role_has_five_variants() {
        use std::str::FromStr;

        let roles: Vec<Role> = Role::iter().collect();
        assert_eq!(roles.len(), 5, "Role must have exactly 5 variants");

        for role in roles {
            let s = role.to_string();
            let parsed = Role::from_str(&s).expect("should parse back");
            assert_eq!(role, parsed);
        }
    }

    #[test]
    fn role_serialization() {
        let json = serde_json::to_string(&Role::Warehouse).expect("should serialize");
        assert_eq!(json, "\"warehouse\"");
        let parsed: Role = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(parsed, Role::Warehouse);
    }

    #[test]
    fn notice_constructors_set_level() {
        assert_eq!(Notice::success("t", "m").level, NoticeLevel::Success);
        assert_eq!(Notice::info("t", "m").level, NoticeLevel::Info);
        assert_eq!(Notice::warning("t", "m").level, NoticeLevel::Warning);
        assert_eq!(Notice::error("t", "m").level, NoticeLevel::Error);
    }

    #[test]
    fn all_trait_modules_are_exported() {
        // Compiles only if every trait seam is reachable from the crate root.
        fn _assert_entity<T: Entity>() {}
        fn _assert_adapter<E: Entity, T: ResourceAdapter<E>>() {}
        fn _assert_token_store<T: TokenStore>() {}
    }
}
