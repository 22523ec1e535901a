// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Generic resource controller for the ShelfSense dashboard screens.
//!
//! Every screen (products, categories, shelves, product-shelf mappings,
//! restock tasks) runs the same lifecycle: list, edit-mode toggle, reload
//! after a mutation, and a two-step delete confirmation. The controller owns
//! that lifecycle and reaches the backend only through
//! [`shelfsense_core::ResourceAdapter`].

pub mod controller;
pub mod state;

pub use controller::ResourceController;
pub use state::{ControllerState, PendingDelete};
