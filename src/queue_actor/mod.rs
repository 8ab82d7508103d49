//! # Order Queue Actor
//!
//! Owns the [`OrderQueue`] and serialises every read and mutation through
//! one mailbox. All three platforms (QR tables, the mobile app, the
//! dashboard) reach it through cloned [`OrderQueueClient`]s.
//!
//! ## Structure
//!
//! - [`store`] - the pure [`OrderQueue`]: numbering, status machine, skip
//! - [`actor`] - [`QueueActor`], the [`ActorState`](crate::framework::ActorState) wrapper with events and paid skips
//! - [`command`] - [`QueueCommand`]
//! - [`events`] - [`QueueEvent`], broadcast after each successful mutation
//! - [`error`] - [`OrderError`]
//!
//! ## Dependencies
//!
//! The actor runs with `Context = WalletClient`. A paid skip charges the
//! customer from inside the handler, so the charge and the swap either both
//! happen or neither does.
//!
//! ```rust,ignore
//! let (queue_actor, queue_client) = queue_actor::new(OrderQueue::new(45), &config);
//! tokio::spawn(queue_actor.run(wallet_client.clone()));
//! let number = queue_client.add_order(order).await?;
//! ```

pub mod actor;
pub mod command;
pub mod error;
pub mod events;
pub mod store;

pub use actor::QueueActor;
pub use command::QueueCommand;
pub use error::OrderError;
pub use events::QueueEvent;
pub use store::{OrderQueue, PaidSkip, SkipOutcome, SkipSlot, StatusChange};

use crate::clients::OrderQueueClient;
use crate::config::RestaurantConfig;
use crate::framework::Actor;

/// Creates the queue actor around `queue`, plus its client.
pub fn new(queue: OrderQueue, config: &RestaurantConfig) -> (Actor<QueueActor>, OrderQueueClient) {
    let state = QueueActor::new(queue, config.event_capacity, config.skip_cost);
    let (actor, handle) = Actor::new(state, config.mailbox_capacity);
    (actor, OrderQueueClient::new(handle))
}
