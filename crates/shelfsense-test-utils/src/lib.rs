// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for ShelfSense integration tests.
//!
//! Provides mock collaborators for fast, deterministic tests without a
//! backend.
//!
//! # Components
//!
//! - [`MockAdapter`] - Scripted resource adapter that records every call
//! - [`MockAuthGateway`] - Scripted auth gateway
//! - [`TestItem`] - Minimal entity for exercising generic code
//! - [`test_token`] - Unsigned access tokens carrying a role claim

pub mod fixture;
pub mod mock_adapter;
pub mod mock_gateway;
pub mod tokens;

pub use fixture::TestItem;
pub use mock_adapter::{AdapterCall, MockAdapter};
pub use mock_gateway::MockAuthGateway;
pub use tokens::{test_token, test_token_with_claims};
