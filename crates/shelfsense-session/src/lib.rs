// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session handling for the ShelfSense dashboard client.
//!
//! Holds the persisted credentials, derives the user's role from the access
//! token, and decides which parts of the dashboard that role may reach.

pub mod claims;
pub mod gateway;
pub mod navigation;
pub mod policy;
pub mod store;
pub mod token_store;

pub use claims::{ROLE_CLAIM, role_from_token};
pub use gateway::{AuthGateway, Credentials, Landing};
pub use navigation::{DEFAULT_MOBILE_BREAKPOINT, Layout, NavigationGate, Page, Section};
pub use policy::can_access;
pub use store::{Session, SessionStore};
pub use token_store::{FileTokenStore, MemoryTokenStore};
