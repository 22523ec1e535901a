// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Static role to capability table.

use shelfsense_core::{Capability, Role};

/// Returns whether `role` holds `capability`.
///
/// Total over both enums; [`Role::Unknown`] holds nothing.
pub fn can_access(role: Role, capability: Capability) -> bool {
    use Capability::*;
    use Role::*;

    match capability {
        ViewInventoryMenu | ManageInventory => matches!(role, Admin | Manager),
        ViewStockRequestMenu => matches!(role, Admin | Manager | Staff),
        ViewRestockTaskMenu => matches!(role, Admin | Manager | Staff | Warehouse),
        ManageWarehouseDashboard => matches!(role, Warehouse),
        RegisterUsers => matches!(role, Admin),
    }
}

/// Every capability held by `role`.
pub fn capabilities(role: Role) -> Vec<Capability> {
    use strum::IntoEnumIterator;
    Capability::iter().filter(|c| can_access(role, *c)).collect()
}
