//! GUI panels and application state.

pub mod action_buttons;
pub mod components;
pub mod data_table;
pub mod header;
pub mod main_app;
pub mod sidebar;
pub mod toolbar;

pub use main_app::DashboardApp;
