//! # Framework Errors
//!
//! Transport failures between a client handle and its actor. Domain failures
//! (an unknown order, an empty wallet) never show up here: they travel inside
//! the reply itself.

/// Errors raised by the mailbox plumbing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FrameworkError {
    /// The actor's receive loop has ended, so the mailbox no longer accepts commands.
    #[error("Actor closed")]
    ActorClosed,
    /// The actor accepted the command but dropped the reply sender without answering.
    #[error("Actor dropped response channel")]
    ActorDropped,
}
