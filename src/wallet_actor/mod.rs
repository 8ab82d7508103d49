//! # Wallet Actor
//!
//! Owns every [`User`](crate::model::User) and their coin balance. Coins are
//! earned through the cooking game, check-ins, reviews and member bonuses,
//! and spent on skipping the queue.
//!
//! ## Structure
//!
//! - [`state`] - the [`Wallet`] store and its [`ActorState`](crate::framework::ActorState) impl
//! - [`command`] - the [`WalletCommand`] message enum
//! - [`error`] - [`WalletError`]
//! - [`new()`] - creates the actor and its [`WalletClient`]
//!
//! The wallet has no dependencies, so it runs with `Context = ()`.

pub mod command;
pub mod error;
pub mod state;

pub use command::WalletCommand;
pub use error::WalletError;
pub use state::Wallet;

use crate::clients::WalletClient;
use crate::framework::Actor;

/// Creates the wallet actor around an already seeded store, plus its client.
pub fn new(wallet: Wallet, mailbox_capacity: usize) -> (Actor<Wallet>, WalletClient) {
    let (actor, handle) = Actor::new(wallet, mailbox_capacity);
    (actor, WalletClient::new(handle))
}
