//! Cancellable timers that feed messages back into the dashboard.
//!
//! Each timer is a tokio task sleeping on the application runtime. Fired
//! timers land on a channel the UI thread drains once per frame, so state is
//! only ever touched from that thread.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc;
use tokio::task::AbortHandle;

use crate::dashboard::{Message, TimerKey};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct TimerId(u64);

/// Callback run after a timer fires, typically to request a repaint.
pub type Waker = Arc<dyn Fn() + Send + Sync>;

struct Fired {
    key: TimerKey,
    id: TimerId,
    message: Message,
}

struct PendingTimer {
    id: TimerId,
    abort: AbortHandle,
}

/// Keyed timer registry. At most one timer is pending per key.
pub struct Scheduler {
    handle: Handle,
    tx: mpsc::UnboundedSender<Fired>,
    rx: mpsc::UnboundedReceiver<Fired>,
    pending: HashMap<TimerKey, PendingTimer>,
    next_id: u64,
    waker: Option<Waker>,
}

impl Scheduler {
    pub fn new(handle: Handle) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            handle,
            tx,
            rx,
            pending: HashMap::new(),
            next_id: 0,
            waker: None,
        }
    }

    pub fn with_waker(mut self, waker: Waker) -> Self {
        self.waker = Some(waker);
        self
    }

    /// Deliver `message` after `delay`, replacing any timer already under `key`.
    pub fn schedule(&mut self, key: TimerKey, delay: Duration, message: Message) {
        self.cancel(key);

        self.next_id += 1;
        let id = TimerId(self.next_id);
        let tx = self.tx.clone();
        let waker = self.waker.clone();

        let task = self.handle.spawn(async move {
            tokio::time::sleep(delay).await;
            if tx.send(Fired { key, id, message }).is_ok()
                && let Some(wake) = waker
            {
                wake();
            }
        });

        self.pending.insert(
            key,
            PendingTimer {
                id,
                abort: task.abort_handle(),
            },
        );
    }

    /// Abort the timer under `key`. Returns whether one was pending.
    pub fn cancel(&mut self, key: TimerKey) -> bool {
        match self.pending.remove(&key) {
            Some(timer) => {
                timer.abort.abort();
                true
            }
            None => false,
        }
    }

    /// Abort every pending timer.
    pub fn cancel_all(&mut self) {
        for (_, timer) in self.pending.drain() {
            timer.abort.abort();
        }
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Next fired message, without waiting.
    pub fn try_next(&mut self) -> Option<Message> {
        while let Ok(fired) = self.rx.try_recv() {
            if let Some(message) = self.accept(fired) {
                return Some(message);
            }
        }
        None
    }

    /// Wait for the next fired message. Returns `None` when nothing is pending.
    pub async fn next(&mut self) -> Option<Message> {
        loop {
            if let Some(message) = self.try_next() {
                return Some(message);
            }
            if self.pending.is_empty() {
                return None;
            }
            let fired = self.rx.recv().await?;
            if let Some(message) = self.accept(fired) {
                return Some(message);
            }
        }
    }

    /// Only the timer currently registered for its key may deliver.
    fn accept(&mut self, fired: Fired) -> Option<Message> {
        match self.pending.get(&fired.key) {
            Some(timer) if timer.id == fired.id => {
                self.pending.remove(&fired.key);
                Some(fired.message)
            }
            _ => {
                tracing::debug!("Dropping stale {:?} timer {:?}", fired.key, fired.id);
                None
            }
        }
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
