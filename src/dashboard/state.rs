//! Dashboard state snapshot and derived view data.

use std::collections::BTreeMap;

use crate::catalog::{Module, ModuleKey};
use crate::models::{Notification, Record};

/// Complete UI state. Only the reducer produces new snapshots.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub active_module: ModuleKey,
    /// Kept across module switches, even when the new module lacks the page.
    pub active_page: Option<String>,
    pub search_query: String,
    /// Reserved for the filter popover; nothing writes or reads it yet.
    pub selected_filters: BTreeMap<String, String>,
    /// Newest first.
    pub rows: Vec<Record>,
    pub loading: bool,
    pub notification: Option<Notification>,
    pub(crate) notification_serial: u64,
}

impl DashboardState {
    pub fn active(&self) -> &'static Module {
        self.active_module.module()
    }

    pub fn table_headers(&self) -> &'static [&'static str] {
        self.active_module.table_headers()
    }

    /// Toolbar, table and action buttons only render once a page is chosen.
    pub fn detail_visible(&self) -> bool {
        self.active_page.is_some()
    }

    pub fn shows_barcode(&self) -> bool {
        self.active_module == ModuleKey::Retail
    }

    /// Breadcrumb segments: module title, then the page if any.
    pub fn breadcrumb(&self) -> Vec<&str> {
        let mut crumbs = vec![self.active().title];
        if let Some(page) = &self.active_page {
            crumbs.push(page.as_str());
        }
        crumbs
    }
}
