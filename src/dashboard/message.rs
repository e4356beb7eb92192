//! Messages consumed by the reducer and effects it hands back.

use std::time::Duration;

use crate::catalog::ModuleKey;
use crate::models::RecordDraft;

/// Simulated record operation behind an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    New,
    Save,
    Delete,
    Export,
    Print,
}

impl Action {
    /// Buttons in toolbar order.
    pub const ALL: [Action; 5] = [Action::New, Action::Save, Action::Delete, Action::Export, Action::Print];

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Action::New => "New",
            Action::Save => "Save",
            Action::Delete => "Delete",
            Action::Export => "Export",
            Action::Print => "Print",
        }
    }
}

/// Everything that can change dashboard state.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // Navigation
    SelectModule(ModuleKey),
    SelectPage(String),

    // Toolbar
    SearchChanged(String),

    // Actions
    Dispatch {
        action: Action,
        draft: Option<RecordDraft>,
    },
    ActionElapsed {
        action: Action,
        draft: Option<RecordDraft>,
    },

    // Notification banner
    NotificationExpired { serial: u64 },
    DismissNotification,
}

impl Message {
    /// Dispatch an action without a payload, as the buttons do.
    pub fn dispatch(action: Action) -> Self {
        Message::Dispatch { action, draft: None }
    }
}

/// Slot a scheduled timer occupies. Scheduling a slot replaces its timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKey {
    Action,
    Notification,
}

/// Side effect requested by the reducer.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    Schedule {
        key: TimerKey,
        delay: Duration,
        message: Message,
    },
    Cancel(TimerKey),
    Print,
}
