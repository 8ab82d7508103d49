//! # Order Queue Client
//!
//! The typed API every platform uses to talk to the order queue actor.

use crate::framework::{ActorClient, ActorHandle};
use crate::model::{NewOrder, Order, OrderId, OrderStatus, UserId};
use crate::queue_actor::{OrderError, PaidSkip, QueueActor, QueueCommand, QueueEvent, SkipOutcome};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct OrderQueueClient {
    handle: ActorHandle<QueueActor>,
}

impl OrderQueueClient {
    pub fn new(handle: ActorHandle<QueueActor>) -> Self {
        Self { handle }
    }

    /// Appends the order and returns the queue number it was given.
    #[instrument(skip(self, order), fields(id = %order.id))]
    pub async fn add_order(&self, order: NewOrder) -> Result<u32, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::Add { order, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn get(&self, id: OrderId) -> Result<Option<Order>, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::Get { id, respond_to })
            .await
    }

    /// Every order, in serving order.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::List { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn update_status(&self, id: OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::UpdateStatus {
            id,
            status,
            respond_to,
        })
        .await?
    }

    /// Staff-side skip: no charge.
    #[instrument(skip(self))]
    pub async fn skip_queue(&self, id: OrderId) -> Result<SkipOutcome, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::SkipQueue { id, respond_to })
            .await?
    }

    /// Customer-side skip, paid for with wallet coins.
    #[instrument(skip(self))]
    pub async fn paid_skip(&self, id: OrderId, user_id: UserId) -> Result<PaidSkip, OrderError> {
        debug!("Sending request");
        self.request(move |respond_to| QueueCommand::PaidSkip {
            id,
            user_id,
            respond_to,
        })
        .await?
    }

    #[instrument(skip(self))]
    pub async fn next_queue_number(&self) -> Result<u32, OrderError> {
        self.request(move |respond_to| QueueCommand::NextQueueNumber { respond_to })
            .await
    }

    /// Events published after this call returns.
    #[instrument(skip(self))]
    pub async fn subscribe(&self) -> Result<broadcast::Receiver<QueueEvent>, OrderError> {
        self.request(move |respond_to| QueueCommand::Subscribe { respond_to })
            .await
    }
}

#[async_trait]
impl ActorClient<QueueActor> for OrderQueueClient {
    type Error = OrderError;

    fn handle(&self) -> &ActorHandle<QueueActor> {
        &self.handle
    }
}
