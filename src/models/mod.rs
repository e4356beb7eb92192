//! Data models for table rows and notifications.

pub mod notification;
pub mod record;

pub use notification::{Notification, NotificationKind};
pub use record::{Record, RecordDraft};
