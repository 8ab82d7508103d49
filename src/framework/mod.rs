//! Generic mailbox-actor building blocks.
//!
//! # Main Components
//!
//! - [`ActorState`] - Trait a store implements to be driven by an actor
//! - [`Actor`] - Owns the state and runs the receive loop
//! - [`ActorHandle`] - Cloneable sender side, with request/reply via [`Reply`]
//! - [`ActorClient`] - Trait for domain clients wrapping a handle
//! - [`FrameworkError`] - Mailbox closed or reply dropped
//!
//! # Testing
//!
//! See [`mock`] for scripted stand-ins that replace an actor in tests.

pub mod actor;
pub mod client_trait;
pub mod error;
pub mod handle;
pub mod mock;

pub use actor::{Actor, ActorState};
pub use client_trait::ActorClient;
pub use error::FrameworkError;
pub use handle::{ActorHandle, Reply};
