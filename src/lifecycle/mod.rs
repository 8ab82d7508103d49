//! # System Lifecycle
//!
//! Wiring, seeding and shutdown of the whole restaurant back end.
//!
//! [`RestaurantSystem::new`] creates the queue, wallet and community actors,
//! injects the wallet client into the order queue (`run(wallet_client)`), and
//! spawns them. Actors are created without dependencies and receive them when
//! they start, so the construction order has no cycles.
//!
//! ## Graceful Shutdown
//!
//! 1. Stop the kitchen simulator, which holds its own queue client
//! 2. Drop the queue client; the queue actor's mailbox closes and it stops,
//!    releasing the wallet client it held as context
//! 3. Drop the wallet client; the wallet stops
//! 4. Drop the community client; the community actor stops
//!
//! Each task is awaited right after its client is dropped. The dependency
//! graph (queue -> wallet) is acyclic, so dropping clients is enough to end
//! every receive loop.

pub mod restaurant_system;
pub mod tracing;

pub use self::restaurant_system::{RestaurantSystem, SystemError};
pub use self::tracing::setup_tracing;
