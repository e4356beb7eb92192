//! Owns the live state and runs the reducer's effects.

use chrono::Utc;

use crate::config::TimingConfig;
use crate::dashboard::{DashboardState, Effect, Message, UpdateContext, update};
use crate::print::{PrintHost, PrintJob};
use crate::scheduler::Scheduler;

/// Single owner of dashboard state on the UI thread.
pub struct Store {
    state: DashboardState,
    scheduler: Scheduler,
    printer: Box<dyn PrintHost>,
    timing: TimingConfig,
}

impl Store {
    pub fn new(timing: TimingConfig, scheduler: Scheduler, printer: Box<dyn PrintHost>) -> Self {
        Self {
            state: DashboardState::default(),
            scheduler,
            printer,
            timing,
        }
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    /// Apply a message and carry out the resulting effects.
    pub fn dispatch(&mut self, msg: Message) {
        let ctx = UpdateContext {
            now_ms: Utc::now().timestamp_millis(),
            timing: self.timing.clone(),
        };
        let transition = update(&self.state, msg, &ctx);
        self.state = transition.state;

        for effect in transition.effects {
            self.run_effect(effect);
        }
    }

    fn run_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Schedule { key, delay, message } => {
                self.scheduler.schedule(key, delay, message);
            }
            Effect::Cancel(key) => {
                self.scheduler.cancel(key);
            }
            Effect::Print => {
                let job = PrintJob::from_state(&self.state);
                if let Err(e) = self.printer.print(&job) {
                    tracing::warn!("Print failed: {}", e);
                }
            }
        }
    }

    /// Feed every fired timer back through the reducer. Returns how many ran.
    pub fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(msg) = self.scheduler.try_next() {
            self.dispatch(msg);
            handled += 1;
        }
        handled
    }

    /// Wait for the next timer and apply it. Returns `false` when none is pending.
    pub async fn step(&mut self) -> bool {
        match self.scheduler.next().await {
            Some(msg) => {
                self.dispatch(msg);
                true
            }
            None => false,
        }
    }

    pub fn has_pending_timers(&self) -> bool {
        self.scheduler.has_pending()
    }

    /// Cancel outstanding timers, e.g. when the window closes.
    pub fn shutdown(&mut self) {
        self.scheduler.cancel_all();
    }
}
