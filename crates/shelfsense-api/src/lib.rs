// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP transport for the ShelfSense inventory backend.
//!
//! Provides [`ApiClient`] (bearer authentication and status mapping),
//! [`HttpAuthGateway`] for the login endpoint, and [`HttpAdapter`], the
//! `ResourceAdapter` used by every dashboard screen.

pub mod adapter;
pub mod auth;
pub mod client;
pub mod envelope;
pub mod models;

pub use adapter::{ApiResource, HttpAdapter};
pub use auth::HttpAuthGateway;
pub use client::ApiClient;
pub use models::{Category, Product, ProductShelf, RestockTask, Shelf, TaskStatus};
