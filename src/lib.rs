pub mod catalog;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod print;
pub mod scheduler;
pub mod store;
pub mod ui;

pub use error::{AppError, Result};
