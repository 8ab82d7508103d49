//! Error types for the order queue.

use crate::framework::FrameworkError;
use crate::model::{OrderId, OrderStatus};
use crate::wallet_actor::WalletError;
use thiserror::Error;

/// Errors that can occur during queue operations.
///
/// Every variant is recoverable. A failed operation leaves the queue exactly
/// as it was.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(OrderId),

    #[error("Order {0} is already in the queue")]
    DuplicateId(OrderId),

    #[error("Order has no items")]
    EmptyOrder,

    #[error("Order {id} cannot move from {from} to {to}")]
    InvalidTransition {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Only orders still waiting can pay to skip.
    #[error("Order {id} is {status} and can no longer skip the queue")]
    NotSkippable { id: OrderId, status: OrderStatus },

    #[error("Queue numbers exhausted")]
    QueueNumbersExhausted,

    /// The wallet refused the skip payment.
    #[error("Payment failed: {0}")]
    Payment(#[from] WalletError),

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for OrderError {
    fn from(e: FrameworkError) -> Self {
        OrderError::ActorCommunicationError(e.to_string())
    }
}
