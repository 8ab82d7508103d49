use crate::model::{Order, OrderId, OrderStatus};
use serde::Serialize;

/// Published after every successful queue mutation.
///
/// Subscribers that fall behind by more than the channel capacity miss the
/// oldest events and should re-read the queue.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum QueueEvent {
    OrderAdded {
        order: Order,
    },
    StatusChanged {
        id: OrderId,
        from: OrderStatus,
        to: OrderStatus,
    },
    QueueSkipped {
        id: OrderId,
        queue_number: u32,
        /// The order that was bumped back, with its new number.
        swapped_with: Option<(OrderId, u32)>,
    },
}
