//! # Actor Handle
//!
//! The cloneable sending half of an actor's mailbox.

use crate::framework::actor::ActorState;
use crate::framework::error::FrameworkError;
use tokio::sync::{mpsc, oneshot};

/// One-shot channel an actor answers a single command on.
pub type Reply<T> = oneshot::Sender<T>;

/// A type-safe handle for sending commands to an [`Actor`](crate::framework::Actor).
///
/// Cloning is cheap: it only clones the mpsc sender. The actor stops once the
/// last clone is dropped.
pub struct ActorHandle<S: ActorState> {
    sender: mpsc::Sender<S::Command>,
}

impl<S: ActorState> Clone for ActorHandle<S> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<S: ActorState> ActorHandle<S> {
    pub fn new(sender: mpsc::Sender<S::Command>) -> Self {
        Self { sender }
    }

    /// Sends a command built around a fresh reply channel and waits for the answer.
    ///
    /// ```rust,ignore
    /// let order = handle
    ///     .ask(|respond_to| QueueCommand::Get { id, respond_to })
    ///     .await?;
    /// ```
    pub async fn ask<R, F>(&self, build: F) -> Result<R, FrameworkError>
    where
        F: FnOnce(Reply<R>) -> S::Command,
    {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| FrameworkError::ActorClosed)?;
        response.await.map_err(|_| FrameworkError::ActorDropped)
    }

    /// True once the actor's receive loop has ended.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }
}
