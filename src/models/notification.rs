//! Transient status messages shown after a simulated action.

/// Banner severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationKind {
    #[default]
    Success,
    Warning,
}

impl NotificationKind {
    /// Banner title.
    pub fn title(&self) -> &'static str {
        match self {
            NotificationKind::Success => "Success",
            NotificationKind::Warning => "Warning",
        }
    }
}

/// A notification currently on screen.
///
/// `serial` identifies which expiry timer may clear it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub message: String,
    pub kind: NotificationKind,
    pub serial: u64,
}
