//! Dashboard state machine: messages in, new state and effects out.

pub mod message;
pub mod state;
pub mod update;

pub use message::{Action, Effect, Message, TimerKey};
pub use state::DashboardState;
pub use update::{Transition, UpdateContext, update};
