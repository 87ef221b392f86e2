//! Change notification for encounter state.
//!
//! Each stateful component owns a [`Subscribers`] list for its own event type.
//! Publishing is synchronous: every listener runs before the mutating call
//! returns.

mod bus;
mod types;

pub use bus::{Subscribers, SubscriptionId};
pub use types::{DifficultyChanged, PartyEvent, RosterEvent};
