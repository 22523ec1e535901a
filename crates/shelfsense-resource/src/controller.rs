// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The resource controller state machine.
//!
//! One controller drives one screen. All mutations go through the watch
//! sender, so every transition is visible to subscribers, and no lock is held
//! while an adapter call is pending.

use std::marker::PhantomData;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

use shelfsense_core::form;
use shelfsense_core::{
    Entity, EntityId, FieldMap, FormMode, Notice, ResourceAdapter, ResourceError, ShelfError,
};
use tokio::sync::watch;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::state::{ControllerState, PendingDelete};

/// Generic list/create/update/delete controller.
///
/// Parameterized by the record type and the adapter that reaches its
/// backend. Items are only ever replaced by a completed [`load`](Self::load);
/// mutations never patch the list locally.
pub struct ResourceController<E: Entity, A: ResourceAdapter<E> + ?Sized> {
    adapter: Arc<A>,
    state: watch::Sender<ControllerState<E>>,
    notices: Mutex<Vec<Notice>>,
    load_generation: AtomicU64,
    current_load: Mutex<Option<CancellationToken>>,
    _entity: PhantomData<fn() -> E>,
}

impl<E: Entity, A: ResourceAdapter<E> + ?Sized> ResourceController<E, A> {
    pub fn new(adapter: Arc<A>) -> Self {
        let (state, _) = watch::channel(ControllerState::default());
        Self {
            adapter,
            state,
            notices: Mutex::new(Vec::new()),
            load_generation: AtomicU64::new(0),
            current_load: Mutex::new(None),
            _entity: PhantomData,
        }
    }

    /// A copy of the current state.
    pub fn snapshot(&self) -> ControllerState<E> {
        self.state.borrow().clone()
    }

    /// Receives every subsequent state transition.
    pub fn subscribe(&self) -> watch::Receiver<ControllerState<E>> {
        self.state.subscribe()
    }

    /// Drains queued notices, oldest first.
    pub fn take_notices(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.notices.lock().unwrap_or_else(PoisonError::into_inner))
    }

    /// Replaces `items` with a fresh listing.
    ///
    /// A newer call cancels this one; the superseded call then returns
    /// [`ResourceError::Cancelled`] and leaves the state to the newer load.
    pub async fn load(&self) -> Result<usize, ResourceError> {
        let cancel = CancellationToken::new();
        let generation = self.load_generation.fetch_add(1, Ordering::SeqCst) + 1;
        if let Some(previous) = self.lock_current_load().replace(cancel.clone()) {
            debug!(kind = E::KIND, "cancelling superseded load");
            previous.cancel();
        }

        self.state.send_modify(|s| {
            s.loading = true;
            s.items.clear();
            s.load_error = None;
        });

        let result = self.adapter.list(&cancel).await;

        if self.load_generation.load(Ordering::SeqCst) != generation {
            debug!(kind = E::KIND, generation, "discarding superseded load result");
            return Err(ResourceError::Cancelled);
        }
        self.lock_current_load().take();

        match result {
            Ok(items) => {
                let count = items.len();
                self.state.send_modify(|s| {
                    s.items = items;
                    s.loading = false;
                });
                info!(kind = E::KIND, count, "loaded");
                self.notify(Notice::info("Info", format!("Loaded {count} {}.", E::PLURAL)));
                Ok(count)
            }
            Err(e) => {
                self.state.send_modify(|s| {
                    s.loading = false;
                    s.load_error = Some(e.clone());
                });
                warn!(kind = E::KIND, error = %e, "load failed");
                self.notify(Notice::error(
                    "Error",
                    format!("Failed to load {}.", E::PLURAL),
                ));
                Err(e)
            }
        }
    }

    /// Switches the form to create mode with an empty draft.
    pub fn begin_create(&self) {
        self.state.send_modify(|s| {
            s.mode = FormMode::Create;
            s.draft = FieldMap::new();
        });
    }

    /// Switches the form to edit `entity`, seeding the draft from it.
    pub fn begin_edit(&self, entity: &E) {
        let id = entity.id();
        let draft = entity.form_fields();
        self.state.send_modify(|s| {
            s.mode = FormMode::Edit(id);
            s.draft = draft;
        });
    }

    /// Edits the loaded record `id`. Returns false if it is not loaded.
    pub fn begin_edit_id(&self, id: EntityId) -> bool {
        let entity = self.state.borrow().find(id).cloned();
        match entity {
            Some(entity) => {
                self.begin_edit(&entity);
                true
            }
            None => false,
        }
    }

    /// Validates and sends the form.
    ///
    /// Invalid fields fail with [`ShelfError::Validation`] before any adapter
    /// call. On success the form returns to create mode and exactly one
    /// reload follows; its outcome is reported through the state. On adapter
    /// failure the mode and draft are kept.
    pub async fn submit(&self, fields: FieldMap) -> Result<(), ShelfError> {
        let mode = self.state.borrow().mode;

        if let Err(e) = form::validate(E::schema(mode), &fields) {
            debug!(kind = E::KIND, error = %e, "form rejected locally");
            self.state.send_modify(|s| s.draft = fields);
            self.notify(Notice::warning(
                "Validation Error",
                "Please fix the errors in the form.",
            ));
            return Err(e.into());
        }

        self.state.send_modify(|s| {
            s.submitting = true;
            s.draft = fields.clone();
        });

        let result = match mode {
            FormMode::Edit(id) => self.adapter.update(id, &fields).await,
            FormMode::Create => self.adapter.create(&fields).await,
        };

        match result {
            Ok(()) => {
                self.state.send_modify(|s| {
                    s.mode = FormMode::Create;
                    s.submitting = false;
                    s.draft = FieldMap::new();
                });
                let verb = if mode.editing().is_some() { "updated" } else { "created" };
                info!(kind = E::KIND, ?mode, "{verb}");
                self.notify(Notice::success(
                    "Success",
                    format!("{} {verb}!", capitalize(E::KIND)),
                ));
                // Outcome lands in state and notices.
                let _ = self.load().await;
                Ok(())
            }
            Err(e) => {
                self.state.send_modify(|s| s.submitting = false);
                warn!(kind = E::KIND, ?mode, error = %e, "submit failed");
                self.notify(Notice::error("Error", failure_message::<E>(&e)));
                Err(e.into())
            }
        }
    }

    /// Marks `id` for deletion, replacing any earlier request.
    pub fn request_delete(&self, id: EntityId, label: impl Into<String>) {
        let pending = PendingDelete {
            id,
            label: label.into(),
        };
        self.state.send_modify(|s| s.pending_delete = Some(pending));
    }

    pub fn cancel_delete(&self) {
        self.state.send_modify(|s| s.pending_delete = None);
    }

    /// Deletes the pending record.
    ///
    /// Returns `Ok(false)` without calling the adapter when nothing is
    /// pending. Either way the confirmed request is cleared once the adapter
    /// answers, unless a newer request replaced it meanwhile; a successful
    /// delete is followed by one reload.
    pub async fn confirm_delete(&self) -> Result<bool, ResourceError> {
        let pending = self.state.borrow().pending_delete.clone();
        let Some(pending) = pending else {
            return Ok(false);
        };

        let result = self.adapter.delete(pending.id).await;
        // A request made while the delete was in flight stays pending.
        self.state.send_if_modified(|s| s.pending_delete.take_if(|p| *p == pending).is_some());

        match result {
            Ok(()) => {
                info!(kind = E::KIND, id = %pending.id, "deleted");
                self.notify(Notice::success(
                    "Deleted",
                    format!("{} deleted.", capitalize(E::KIND)),
                ));
                let _ = self.load().await;
                Ok(true)
            }
            Err(e) => {
                warn!(kind = E::KIND, id = %pending.id, error = %e, "delete failed");
                self.notify(Notice::error(
                    "Error",
                    format!("Failed to delete {}: {}", E::KIND, detail(&e)),
                ));
                Err(e)
            }
        }
    }

    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn lock_current_load(&self) -> std::sync::MutexGuard<'_, Option<CancellationToken>> {
        self.current_load
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn detail(error: &ResourceError) -> String {
    match error {
        ResourceError::Conflict { message } | ResourceError::ServerError { message, .. }
            if !message.is_empty() =>
        {
            message.clone()
        }
        ResourceError::NotFound => "not found".to_string(),
        _ => "Server error".to_string(),
    }
}

fn failure_message<E: Entity>(error: &ResourceError) -> String {
    match error {
        ResourceError::Conflict { .. } => format!("{} already exists.", capitalize(E::KIND)),
        ResourceError::ServerError { message, .. } if !message.is_empty() => message.clone(),
        _ => "Operation failed.".to_string(),
    }
}
