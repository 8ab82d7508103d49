//! # Community Actor
//!
//! Owns the mobile app's community feed and the reviews customers leave
//! once their order is ready. Both lists are kept newest first.
//!
//! ## Structure
//!
//! - [`state`] - the [`Community`] store and its [`ActorState`](crate::framework::ActorState) impl
//! - [`command`] - [`CommunityCommand`]
//! - [`error`] - [`CommunityError`]
//!
//! Like the wallet, it has no dependencies and runs with `Context = ()`.
//! Review rewards are paid by
//! [`RestaurantSystem::submit_review`](crate::RestaurantSystem::submit_review).

pub mod command;
pub mod error;
pub mod state;

pub use command::CommunityCommand;
pub use error::CommunityError;
pub use state::Community;

use crate::clients::CommunityClient;
use crate::framework::Actor;

pub fn new(community: Community, mailbox_capacity: usize) -> (Actor<Community>, CommunityClient) {
    let (actor, handle) = Actor::new(community, mailbox_capacity);
    (actor, CommunityClient::new(handle))
}
