// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trait seams between the core state machines and their collaborators.
//!
//! Remote calls go through `#[async_trait]` traits so implementations can be
//! swapped behind `Arc<dyn ...>`; the client-local token store is synchronous.

pub mod adapter;
pub mod entity;
pub mod token_store;

pub use adapter::ResourceAdapter;
pub use entity::Entity;
pub use token_store::TokenStore;
