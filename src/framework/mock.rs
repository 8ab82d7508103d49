//! # Mock Actors
//!
//! Utilities for testing a client, or an actor that depends on another actor,
//! without spawning the real dependency.
//!
//! | Pattern | Use |
//! |---------|-----|
//! | [`create_mock_handle`] + [`next_command`] | step through each command by hand and answer it |
//! | [`MockActor`] | queue scripted answers up front, then [`verify`](MockActor::verify) |
//!
//! The second pattern is what `tests/queue_actor_test.rs` uses to run the real
//! order queue against a scripted wallet.

use crate::framework::{ActorHandle, ActorState};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::mpsc;

type Expectation<S> = Box<dyn FnOnce(<S as ActorState>::Command) + Send>;

/// A scripted stand-in for an actor.
///
/// Every incoming command is handed to the next queued expectation, which is
/// responsible for answering through the command's reply sender.
///
/// ```rust,ignore
/// let wallet = MockActor::<Wallet>::new();
/// wallet.expect(|command| match command {
///     WalletCommand::Spend { respond_to, .. } => { let _ = respond_to.send(Ok(950)); }
///     other => panic!("unexpected {other:?}"),
/// });
/// let client = WalletClient::new(wallet.handle());
/// // ...
/// wallet.verify();
/// ```
pub struct MockActor<S: ActorState> {
    handle: ActorHandle<S>,
    expectations: Arc<Mutex<VecDeque<Expectation<S>>>>,
    unexpected: Arc<Mutex<Vec<String>>>,
    _task: tokio::task::JoinHandle<()>,
}

impl<S: ActorState> Default for MockActor<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ActorState> MockActor<S> {
    /// Creates a mock with no expectations. Must be called inside a Tokio runtime.
    pub fn new() -> Self {
        let (sender, mut receiver) = mpsc::channel::<S::Command>(100);
        let expectations: Arc<Mutex<VecDeque<Expectation<S>>>> = Arc::default();
        let unexpected: Arc<Mutex<Vec<String>>> = Arc::default();

        let queued = expectations.clone();
        let strays = unexpected.clone();
        let task = tokio::spawn(async move {
            while let Some(command) = receiver.recv().await {
                let next = queued
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .pop_front();
                match next {
                    Some(answer) => answer(command),
                    None => strays
                        .lock()
                        .unwrap_or_else(PoisonError::into_inner)
                        .push(format!("{command:?}")),
                }
            }
        });

        Self {
            handle: ActorHandle::new(sender),
            expectations,
            unexpected,
            _task: task,
        }
    }

    /// A handle that talks to this mock.
    pub fn handle(&self) -> ActorHandle<S> {
        self.handle.clone()
    }

    /// Queues the answer for the next command received.
    pub fn expect(&self, answer: impl FnOnce(S::Command) + Send + 'static) -> &Self {
        self.expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push_back(Box::new(answer));
        self
    }

    /// Panics if an expectation was never consumed or a command arrived with none queued.
    pub fn verify(&self) {
        let remaining = self
            .expectations
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len();
        let strays = self
            .unexpected
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        if remaining > 0 || !strays.is_empty() {
            panic!("Mock expectations not met: {remaining} unused, unexpected commands: {strays:?}");
        }
    }
}

/// Creates a handle plus the raw receiver, for tests that answer commands inline.
pub fn create_mock_handle<S: ActorState>(
    buffer_size: usize,
) -> (ActorHandle<S>, mpsc::Receiver<S::Command>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (ActorHandle::new(sender), receiver)
}

/// Waits for the next command sent to a mock handle.
pub async fn next_command<S: ActorState>(
    receiver: &mut mpsc::Receiver<S::Command>,
) -> Option<S::Command> {
    receiver.recv().await
}
