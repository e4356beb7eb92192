//! Pure state transitions.

use tracing::{debug, info};

use super::message::{Action, Effect, Message, TimerKey};
use super::state::DashboardState;
use crate::config::TimingConfig;
use crate::models::{Notification, NotificationKind, Record};

/// Inputs the reducer needs from outside the state.
#[derive(Debug, Clone)]
pub struct UpdateContext {
    /// Wall clock in milliseconds, used to stamp new records.
    pub now_ms: i64,
    pub timing: TimingConfig,
}

/// Next state plus the effects the runtime must carry out.
#[derive(Debug, Clone, PartialEq)]
pub struct Transition {
    pub state: DashboardState,
    pub effects: Vec<Effect>,
}

/// Apply one message to a state snapshot.
pub fn update(state: &DashboardState, msg: Message, ctx: &UpdateContext) -> Transition {
    let mut next = state.clone();
    let mut effects = Vec::new();

    match msg {
        Message::SelectModule(key) => {
            debug!("Module selected: {}", key.as_str());
            next.active_module = key;
        }
        Message::SelectPage(page) => {
            debug!("Page selected: {}", page);
            next.active_page = Some(page);
        }
        Message::SearchChanged(query) => {
            next.search_query = query;
        }
        Message::Dispatch { action, draft } => {
            if next.loading {
                debug!("Ignoring {:?}: another action is in flight", action);
            } else {
                info!("Dispatching {:?}", action);
                next.loading = true;
                effects.push(Effect::Schedule {
                    key: TimerKey::Action,
                    delay: ctx.timing.action_delay(),
                    message: Message::ActionElapsed { action, draft },
                });
            }
        }
        Message::ActionElapsed { action, draft } => {
            match action {
                Action::New => {
                    next.rows.insert(0, Record::create(ctx.now_ms, draft));
                    show_alert(
                        &mut next,
                        &mut effects,
                        ctx,
                        "New record created successfully",
                        NotificationKind::Success,
                    );
                }
                Action::Save => {
                    show_alert(&mut next, &mut effects, ctx, "Changes saved successfully", NotificationKind::Success);
                }
                Action::Delete => {
                    show_alert(&mut next, &mut effects, ctx, "Record deleted successfully", NotificationKind::Warning);
                }
                Action::Export => {
                    show_alert(
                        &mut next,
                        &mut effects,
                        ctx,
                        "Export started. Check downloads folder.",
                        NotificationKind::Success,
                    );
                }
                Action::Print => effects.push(Effect::Print),
            }
            info!("{:?} completed", action);
            next.loading = false;
        }
        Message::NotificationExpired { serial } => {
            if next.notification.as_ref().is_some_and(|n| n.serial == serial) {
                next.notification = None;
            }
        }
        Message::DismissNotification => {
            if next.notification.take().is_some() {
                effects.push(Effect::Cancel(TimerKey::Notification));
            }
        }
    }

    Transition { state: next, effects }
}

/// Replace the banner and (re)arm its expiry.
fn show_alert(
    state: &mut DashboardState,
    effects: &mut Vec<Effect>,
    ctx: &UpdateContext,
    message: &str,
    kind: NotificationKind,
) {
    state.notification_serial += 1;
    let serial = state.notification_serial;
    state.notification = Some(Notification {
        message: message.to_string(),
        kind,
        serial,
    });
    effects.push(Effect::Schedule {
        key: TimerKey::Notification,
        delay: ctx.timing.notification_ttl(),
        message: Message::NotificationExpired { serial },
    });
}
