// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! REST resource adapter shared by every dashboard screen.

use std::marker::PhantomData;

use async_trait::async_trait;
use reqwest::Method;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shelfsense_core::{Entity, EntityId, FieldMap, FormMode, ResourceAdapter, ResourceError};
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::client::ApiClient;
use crate::envelope;

/// An entity served by a conventional REST collection.
///
/// `GET PATH` lists, `PUT PATH/{id}` updates and `DELETE PATH/{id}` deletes.
/// Creation posts to [`create_path`](Self::create_path), which defaults to
/// `PATH`.
pub trait ApiResource: Entity + DeserializeOwned {
    /// Collection path, e.g. `/api/Product`.
    const PATH: &'static str;

    fn create_path() -> String {
        Self::PATH.to_string()
    }

    fn create_payload(fields: &FieldMap) -> Value {
        fields.to_payload(Self::schema(FormMode::Create))
    }

    fn update_payload(id: EntityId, fields: &FieldMap) -> Value {
        fields.to_payload(Self::schema(FormMode::Edit(id)))
    }
}

/// [`ResourceAdapter`] over [`ApiClient`].
pub struct HttpAdapter<E> {
    client: ApiClient,
    _entity: PhantomData<fn() -> E>,
}

impl<E: ApiResource> HttpAdapter<E> {
    pub fn new(client: ApiClient) -> Self {
        Self {
            client,
            _entity: PhantomData,
        }
    }

    fn item_path(id: EntityId) -> String {
        format!("{}/{id}", E::PATH)
    }
}

#[async_trait]
impl<E: ApiResource> ResourceAdapter<E> for HttpAdapter<E> {
    async fn list(&self, cancel: &CancellationToken) -> Result<Vec<E>, ResourceError> {
        let body = tokio::select! {
            biased;
            _ = cancel.cancelled() => {
                debug!(kind = E::KIND, "list cancelled");
                return Err(ResourceError::Cancelled);
            }
            body = self.client.get_json(E::PATH) => body?,
        };
        envelope::items(body)
    }

    async fn create(&self, fields: &FieldMap) -> Result<(), ResourceError> {
        self.client
            .send_json(Method::POST, &E::create_path(), &E::create_payload(fields))
            .await
    }

    async fn update(&self, id: EntityId, fields: &FieldMap) -> Result<(), ResourceError> {
        self.client
            .send_json(Method::PUT, &Self::item_path(id), &E::update_payload(id, fields))
            .await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ResourceError> {
        self.client.delete(&Self::item_path(id)).await
    }
}
