//! # ActorClient Trait
//!
//! Common plumbing for the domain clients (`OrderQueueClient`, `WalletClient`):
//! a default `request` that sends a command and maps transport failures into
//! the client's own error type.

use crate::framework::{ActorHandle, ActorState, FrameworkError, Reply};
use async_trait::async_trait;

/// Trait for domain-specific clients wrapping an [`ActorHandle`].
#[async_trait]
pub trait ActorClient<S: ActorState>: Send + Sync {
    /// The domain error type. Mailbox failures must convert into it.
    type Error: From<FrameworkError> + Send;

    /// Access the inner handle.
    fn handle(&self) -> &ActorHandle<S>;

    /// Send one command and wait for its reply.
    async fn request<R, F>(&self, build: F) -> Result<R, Self::Error>
    where
        R: Send + 'static,
        F: FnOnce(Reply<R>) -> S::Command + Send + 'static,
    {
        self.handle().ask(build).await.map_err(Self::Error::from)
    }
}
