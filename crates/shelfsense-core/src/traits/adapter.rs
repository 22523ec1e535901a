// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Transport-independent CRUD contract consumed by the resource controller.

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::ResourceError;
use crate::form::FieldMap;
use crate::traits::entity::Entity;
use crate::types::EntityId;

/// Adapter through which a resource controller reaches its backend.
///
/// Every call yields a tagged outcome; an empty list is `Ok(vec![])`, never a
/// swallowed failure. Implementations attach the current access credential
/// and return [`ResourceError::MissingToken`] without sending anything when
/// there is none.
#[async_trait]
pub trait ResourceAdapter<E: Entity>: Send + Sync {
    /// Fetches every record. Resolves to [`ResourceError::Cancelled`] once
    /// `cancel` fires.
    async fn list(&self, cancel: &CancellationToken) -> Result<Vec<E>, ResourceError>;

    /// Creates a record from the submitted form fields.
    async fn create(&self, fields: &FieldMap) -> Result<(), ResourceError>;

    /// Replaces the record `id` with the submitted form fields.
    async fn update(&self, id: EntityId, fields: &FieldMap) -> Result<(), ResourceError>;

    /// Deletes the record `id`.
    async fn delete(&self, id: EntityId) -> Result<(), ResourceError>;
}

