//! # Mailbox Actor
//!
//! [`Actor<S>`] owns a piece of state `S` and the receiving end of its mailbox.
//! Commands are processed one at a time, in arrival order, so the state needs
//! no `Mutex` or `RwLock`: exclusive ownership inside the task is the lock.
//!
//! The split between [`ActorState`] (what a command *does*) and [`Actor`]
//! (how commands *arrive*) means the receive loop, logging and shutdown are
//! written once and shared by the order queue and the wallet.

use crate::framework::handle::ActorHandle;
use async_trait::async_trait;
use std::fmt::Debug;
use tokio::sync::mpsc;
use tracing::{debug, info};

/// State that can be driven by an [`Actor`].
///
/// # Context Injection
/// `Context` is handed to every [`handle`](ActorState::handle) call. It carries
/// dependencies that only exist once the whole system is wired, such as the
/// wallet client the order queue charges for a paid skip. Passing it to
/// [`Actor::run`] instead of [`Actor::new`] keeps construction order free of
/// cycles.
#[async_trait]
pub trait ActorState: Send + 'static {
    /// The command enum accepted by this actor. Each variant carries its own
    /// [`Reply`](crate::framework::Reply) sender.
    type Command: Send + Debug;

    /// Dependencies injected when the actor starts. Use `()` for none.
    type Context: Send + Sync;

    /// Short name used as the `actor` field in every log line.
    const NAME: &'static str;

    /// Apply one command to the state and answer through its reply sender.
    async fn handle(&mut self, command: Self::Command, ctx: &Self::Context);

    /// Number of records held, reported on shutdown.
    fn size(&self) -> usize {
        0
    }
}

/// The server half of an actor: the state plus the mailbox receiver.
pub struct Actor<S: ActorState> {
    receiver: mpsc::Receiver<S::Command>,
    state: S,
}

impl<S: ActorState> Actor<S> {
    /// Creates the actor and the first handle to it.
    ///
    /// `buffer_size` is the mailbox capacity. When it is full, senders wait.
    pub fn new(state: S, buffer_size: usize) -> (Self, ActorHandle<S>) {
        let (sender, receiver) = mpsc::channel(buffer_size.max(1));
        (Self { receiver, state }, ActorHandle::new(sender))
    }

    /// Runs the receive loop until every handle has been dropped, then hands
    /// the final state back to whoever awaits the task.
    pub async fn run(mut self, context: S::Context) -> S {
        let actor = S::NAME;
        info!(actor, size = self.state.size(), "Actor started");

        while let Some(command) = self.receiver.recv().await {
            debug!(actor, ?command, "Command");
            self.state.handle(command, &context).await;
        }

        info!(actor, size = self.state.size(), "Shutdown");
        self.state
    }
}
