use crate::framework::Reply;
use crate::model::{NewOrder, Order, OrderId, OrderStatus, UserId};
use crate::queue_actor::{OrderError, PaidSkip, QueueEvent, SkipOutcome};
use tokio::sync::broadcast;

/// Messages understood by the order queue actor.
#[derive(Debug)]
pub enum QueueCommand {
    /// Answers with the assigned queue number.
    Add {
        order: NewOrder,
        respond_to: Reply<Result<u32, OrderError>>,
    },
    Get {
        id: OrderId,
        respond_to: Reply<Option<Order>>,
    },
    /// All orders in serving order.
    List {
        respond_to: Reply<Vec<Order>>,
    },
    UpdateStatus {
        id: OrderId,
        status: OrderStatus,
        respond_to: Reply<Result<Order, OrderError>>,
    },
    SkipQueue {
        id: OrderId,
        respond_to: Reply<Result<SkipOutcome, OrderError>>,
    },
    /// Charges the user through the wallet, then skips.
    PaidSkip {
        id: OrderId,
        user_id: UserId,
        respond_to: Reply<Result<PaidSkip, OrderError>>,
    },
    NextQueueNumber {
        respond_to: Reply<u32>,
    },
    Subscribe {
        respond_to: Reply<broadcast::Receiver<QueueEvent>>,
    },
}
