// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Records served by the inventory backend.

pub mod category;
pub mod product;
pub mod product_shelf;
pub mod restock_task;
pub mod shelf;

pub use category::Category;
pub use product::Product;
pub use product_shelf::ProductShelf;
pub use restock_task::{RestockTask, TaskStatus};
pub use shelf::Shelf;
