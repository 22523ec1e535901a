// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock resource adapter for deterministic controller tests.
//!
//! `MockAdapter` implements `ResourceAdapter` with scripted outcomes and
//! records every call so tests can assert exactly what reached the backend.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use shelfsense_core::{Entity, EntityId, FieldMap, ResourceAdapter, ResourceError};
use tokio::sync::{Mutex, Notify};
use tokio_util::sync::CancellationToken;

/// One recorded adapter call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdapterCall {
    List,
    Create(FieldMap),
    Update(EntityId, FieldMap),
    Delete(EntityId),
}

/// Scripted list/create/update/delete backend.
///
/// `list` answers from the queued list outcomes, falling back to the current
/// item set when the queue is empty. Writes answer from the queued write
/// outcomes, falling back to `Ok(())`.
pub struct MockAdapter<E> {
    items: Arc<Mutex<Vec<E>>>,
    list_outcomes: Arc<Mutex<VecDeque<Result<Vec<E>, ResourceError>>>>,
    list_delays: Arc<Mutex<VecDeque<Duration>>>,
    write_outcomes: Arc<Mutex<VecDeque<Result<(), ResourceError>>>>,
    write_gates: Arc<Mutex<VecDeque<Arc<Notify>>>>,
    calls: Arc<Mutex<Vec<AdapterCall>>>,
}

impl<E: Entity> MockAdapter<E> {
    pub fn new() -> Self {
        Self::with_items(Vec::new())
    }

    pub fn with_items(items: Vec<E>) -> Self {
        Self {
            items: Arc::new(Mutex::new(items)),
            list_outcomes: Arc::new(Mutex::new(VecDeque::new())),
            list_delays: Arc::new(Mutex::new(VecDeque::new())),
            write_outcomes: Arc::new(Mutex::new(VecDeque::new())),
            write_gates: Arc::new(Mutex::new(VecDeque::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub async fn set_items(&self, items: Vec<E>) {
        *self.items.lock().await = items;
    }

    /// Queues the outcome of the next unscripted `list`.
    pub async fn push_list(&self, outcome: Result<Vec<E>, ResourceError>) {
        self.list_outcomes.lock().await.push_back(outcome);
    }

    /// Delays the next `list` call. The delay is cut short by cancellation.
    pub async fn delay_next_list(&self, delay: Duration) {
        self.list_delays.lock().await.push_back(delay);
    }

    /// Queues the outcome of the next create, update or delete.
    pub async fn push_write(&self, outcome: Result<(), ResourceError>) {
        self.write_outcomes.lock().await.push_back(outcome);
    }

    /// Holds the next write, after it is recorded, until `gate` is notified.
    pub async fn hold_next_write(&self, gate: Arc<Notify>) {
        self.write_gates.lock().await.push_back(gate);
    }

    pub async fn calls(&self) -> Vec<AdapterCall> {
        self.calls.lock().await.clone()
    }

    pub async fn list_calls(&self) -> usize {
        self.count(|c| matches!(c, AdapterCall::List)).await
    }

    /// Number of create, update and delete calls.
    pub async fn write_calls(&self) -> usize {
        self.count(|c| !matches!(c, AdapterCall::List)).await
    }

    async fn count(&self, pred: impl Fn(&AdapterCall) -> bool) -> usize {
        self.calls.lock().await.iter().filter(|c| pred(c)).count()
    }

    async fn record(&self, call: AdapterCall) {
        self.calls.lock().await.push(call);
    }

    async fn next_write(&self) -> Result<(), ResourceError> {
        let gate = self.write_gates.lock().await.pop_front();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        self.write_outcomes.lock().await.pop_front().unwrap_or(Ok(()))
    }
}

impl<E: Entity> Default for MockAdapter<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<E: Entity> ResourceAdapter<E> for MockAdapter<E> {
    async fn list(&self, cancel: &CancellationToken) -> Result<Vec<E>, ResourceError> {
        self.record(AdapterCall::List).await;

        let delay = self.list_delays.lock().await.pop_front();
        if let Some(delay) = delay {
            tokio::select! {
                _ = cancel.cancelled() => return Err(ResourceError::Cancelled),
                _ = tokio::time::sleep(delay) => {}
            }
        }

        let scripted = self.list_outcomes.lock().await.pop_front();
        match scripted {
            Some(outcome) => outcome,
            None => Ok(self.items.lock().await.clone()),
        }
    }

    async fn create(&self, fields: &FieldMap) -> Result<(), ResourceError> {
        self.record(AdapterCall::Create(fields.clone())).await;
        self.next_write().await
    }

    async fn update(&self, id: EntityId, fields: &FieldMap) -> Result<(), ResourceError> {
        self.record(AdapterCall::Update(id, fields.clone())).await;
        self.next_write().await
    }

    async fn delete(&self, id: EntityId) -> Result<(), ResourceError> {
        self.record(AdapterCall::Delete(id)).await;
        self.next_write().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixture::TestItem;

    #[tokio::test]
    async fn list_falls_back_to_items() {
        let adapter = MockAdapter::with_items(vec![TestItem::new(1, "a")]);
        adapter.push_list(Err(ResourceError::NotFound)).await;

        let cancel = CancellationToken::new();
        assert_eq!(adapter.list(&cancel).await, Err(ResourceError::NotFound));
        assert_eq!(adapter.list(&cancel).await.unwrap().len(), 1);
        assert_eq!(adapter.list_calls().await, 2);
    }

    #[tokio::test(start_paused = true)]
    async fn delayed_list_honors_cancellation() {
        let adapter = MockAdapter::<TestItem>::new();
        adapter.delay_next_list(Duration::from_secs(5)).await;

        let cancel = CancellationToken::new();
        cancel.cancel();
        assert_eq!(adapter.list(&cancel).await, Err(ResourceError::Cancelled));
    }

    #[tokio::test]
    async fn writes_are_recorded_in_order() {
        let adapter = MockAdapter::<TestItem>::new();
        adapter.push_write(Err(ResourceError::Conflict { message: "dup".into() })).await;

        let fields = FieldMap::new().with("name", "x");
        assert!(adapter.create(&fields).await.is_err());
        assert!(adapter.delete(EntityId(3)).await.is_ok());
        assert_eq!(
            adapter.calls().await,
            vec![AdapterCall::Create(fields), AdapterCall::Delete(EntityId(3))]
        );
        assert_eq!(adapter.write_calls().await, 2);
    }

    #[tokio::test]
    async fn held_write_waits_for_gate() {
        let adapter = Arc::new(MockAdapter::<TestItem>::new());
        let gate = Arc::new(Notify::new());
        adapter.hold_next_write(Arc::clone(&gate)).await;

        let task = tokio::spawn({
            let adapter = Arc::clone(&adapter);
            async move { adapter.delete(EntityId(4)).await }
        });
        while adapter.write_calls().await == 0 {
            tokio::task::yield_now().await;
        }
        assert!(!task.is_finished());

        gate.notify_one();
        assert_eq!(task.await.unwrap(), Ok(()));
    }
}
