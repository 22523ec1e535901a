// SPDX-FileCopyrightText: 2026 ShelfSense Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Sidebar visibility and layout state.
//!
//! The gate never stores a list of sections; it recomputes visibility from
//! the current role through [`can_access`] on every query, so a role change
//! can never leave a stale section behind.

use std::collections::BTreeSet;

use shelfsense_core::{Capability, Role};
use strum::{Display, EnumIter, IntoEnumIterator};
use tracing::debug;

use crate::policy::can_access;

/// Default viewport width below which the sidebar collapses.
pub const DEFAULT_MOBILE_BREAKPOINT: u32 = 768;

/// Top-level sidebar entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum Section {
    Inventory,
    StockRequests,
    RestockTasks,
    WarehouseDashboard,
    RegisterUser,
}

impl Section {
    /// The capability a role needs to see this section.
    pub fn capability(self) -> Capability {
        match self {
            Section::Inventory => Capability::ViewInventoryMenu,
            Section::StockRequests => Capability::ViewStockRequestMenu,
            Section::RestockTasks => Capability::ViewRestockTaskMenu,
            Section::WarehouseDashboard => Capability::ManageWarehouseDashboard,
            Section::RegisterUser => Capability::RegisterUsers,
        }
    }

    /// Whether the section is a collapsible group.
    pub fn is_group(self) -> bool {
        matches!(
            self,
            Section::Inventory | Section::StockRequests | Section::RestockTasks
        )
    }

    /// Pages reachable from this section.
    pub fn pages(self) -> &'static [Page] {
        match self {
            Section::Inventory => &[
                Page::Products,
                Page::Categories,
                Page::Shelves,
                Page::ProductShelf,
            ],
            Section::StockRequests => &[Page::StockRequests],
            Section::RestockTasks => &[Page::RestockTasks],
            Section::WarehouseDashboard => &[Page::WarehouseDashboard],
            Section::RegisterUser => &[Page::RegisterUser],
        }
    }
}

/// A navigable screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "title_case")]
pub enum Page {
    Products,
    Categories,
    Shelves,
    ProductShelf,
    StockRequests,
    RestockTasks,
    WarehouseDashboard,
    RegisterUser,
}

impl Page {
    pub fn section(self) -> Section {
        match self {
            Page::Products | Page::Categories | Page::Shelves | Page::ProductShelf => {
                Section::Inventory
            }
            Page::StockRequests => Section::StockRequests,
            Page::RestockTasks => Section::RestockTasks,
            Page::WarehouseDashboard => Section::WarehouseDashboard,
            Page::RegisterUser => Section::RegisterUser,
        }
    }

    /// Route path of the page.
    pub fn route(self) -> &'static str {
        match self {
            Page::Products => "/dashboard/products",
            Page::Categories => "/dashboard/categories",
            Page::Shelves => "/dashboard/shelves",
            Page::ProductShelf => "/dashboard/product-shelf",
            Page::StockRequests => "/dashboard/stock-requests",
            Page::RestockTasks => "/dashboard/restock-tasks",
            Page::WarehouseDashboard => "/warehouse",
            Page::RegisterUser => "/register",
        }
    }
}

/// Sidebar presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Layout {
    Mobile,
    Expanded,
}

impl Layout {
    pub fn for_width(width: u32, breakpoint: u32) -> Layout {
        if width < breakpoint {
            Layout::Mobile
        } else {
            Layout::Expanded
        }
    }
}

/// Role-driven sidebar state.
#[derive(Debug, Clone)]
pub struct NavigationGate {
    role: Role,
    breakpoint: u32,
    layout: Layout,
    mobile_menu_open: bool,
    open_groups: BTreeSet<Section>,
}

impl NavigationGate {
    pub fn new(role: Role, width: u32, breakpoint: u32) -> Self {
        Self {
            role,
            breakpoint,
            layout: Layout::for_width(width, breakpoint),
            mobile_menu_open: false,
            open_groups: BTreeSet::new(),
        }
    }

    pub fn role(&self) -> Role {
        self.role
    }

    pub fn layout(&self) -> Layout {
        self.layout
    }

    pub fn is_mobile_menu_open(&self) -> bool {
        self.mobile_menu_open
    }

    pub fn is_group_open(&self, section: Section) -> bool {
        self.open_groups.contains(&section)
    }

    /// Sections the current role may see, in sidebar order.
    pub fn visible_sections(&self) -> Vec<Section> {
        Section::iter()
            .filter(|s| can_access(self.role, s.capability()))
            .collect()
    }

    pub fn is_visible(&self, section: Section) -> bool {
        can_access(self.role, section.capability())
    }

    /// Pages the current role may open.
    pub fn visible_pages(&self) -> Vec<Page> {
        self.visible_sections()
            .into_iter()
            .flat_map(|s| s.pages().iter().copied())
            .collect()
    }

    pub fn on_role_change(&mut self, role: Role) {
        if role == self.role {
            return;
        }
        debug!(from = %self.role, to = %role, "navigation role changed");
        self.role = role;
        self.open_groups.retain(|s| can_access(role, s.capability()));
    }

    /// Applies a viewport resize. Returns true when the layout changed.
    pub fn on_resize(&mut self, width: u32) -> bool {
        let layout = Layout::for_width(width, self.breakpoint);
        if layout == self.layout {
            return false;
        }
        debug!(width, %layout, "navigation layout changed");
        self.layout = layout;
        if layout == Layout::Expanded {
            self.mobile_menu_open = false;
        }
        true
    }

    /// Records a navigation to `page`. Returns false, changing nothing, when
    /// the role may not open it.
    pub fn on_navigate(&mut self, page: Page) -> bool {
        if !self.is_visible(page.section()) {
            return false;
        }
        if self.layout == Layout::Mobile {
            self.mobile_menu_open = false;
        }
        true
    }

    /// Flips the mobile menu. Returns the new state.
    pub fn toggle_mobile_menu(&mut self) -> bool {
        self.mobile_menu_open = !self.mobile_menu_open;
        self.mobile_menu_open
    }

    /// Flips a collapsible group. Returns whether it is now open.
    ///
    /// Hidden sections and non-group sections stay closed.
    pub fn toggle_group(&mut self, section: Section) -> bool {
        if !section.is_group() || !self.is_visible(section) {
            return false;
        }
        if !self.open_groups.remove(&section) {
            self.open_groups.insert(section);
        }
        self.is_group_open(section)
    }

    /// Resets the gate to the signed-out state.
    pub fn logout(&mut self) {
        self.role = Role::Unknown;
        self.mobile_menu_open = false;
        self.open_groups.clear();
    }
}
