//! Error types for the wallet actor.

use crate::framework::FrameworkError;
use crate::model::UserId;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WalletError {
    #[error("User not found: {0}")]
    UserNotFound(UserId),

    /// The balance is below the amount requested. Nothing was deducted.
    #[error("Insufficient coins: required {required}, available {available}")]
    InsufficientCoins { required: u64, available: u64 },

    #[error("Coin balance of {0} would overflow")]
    BalanceOverflow(UserId),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for WalletError {
    fn from(e: FrameworkError) -> Self {
        WalletError::ActorCommunicationError(e.to_string())
    }
}
