//! Typed clients over the actor handles. These are the only way the rest of
//! the crate talks to an actor.

mod community_client;
mod order_queue_client;
mod wallet_client;

pub use community_client::CommunityClient;
pub use order_queue_client::OrderQueueClient;
pub use wallet_client::WalletClient;
