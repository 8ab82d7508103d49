use crate::clients::WalletClient;
use crate::framework::ActorState;
use crate::model::{CoinReason, OrderId, UserId};
use crate::queue_actor::{OrderError, OrderQueue, PaidSkip, QueueCommand, QueueEvent};
use async_trait::async_trait;
use tokio::sync::broadcast;
use tracing::{debug, info, warn};

/// The order queue as driven by its actor: the store, the event channel and
/// the price of a paid skip.
///
/// The only [`broadcast::Sender`] lives here, so subscribers see the channel
/// close once the actor stops.
pub struct QueueActor {
    queue: OrderQueue,
    events: broadcast::Sender<QueueEvent>,
    skip_cost: u64,
}

impl QueueActor {
    pub fn new(queue: OrderQueue, event_capacity: usize, skip_cost: u64) -> Self {
        let (events, _) = broadcast::channel(event_capacity.max(1));
        Self {
            queue,
            events,
            skip_cost,
        }
    }

    pub fn queue(&self) -> &OrderQueue {
        &self.queue
    }

    fn publish(&self, event: QueueEvent) {
        // No subscribers is fine.
        let _ = self.events.send(event);
    }

    /// Validates, charges, then swaps. The mailbox is not read while the
    /// wallet is awaited, so the validated slot still holds when the swap is
    /// applied and the swap itself cannot fail.
    async fn paid_skip(
        &mut self,
        id: OrderId,
        user_id: UserId,
        wallet: &WalletClient,
    ) -> Result<PaidSkip, OrderError> {
        let slot = self.queue.check_paid_skip(&id)?;

        let remaining_balance = wallet
            .spend_coins(user_id, self.skip_cost, CoinReason::SkipQueue)
            .await?;

        let outcome = self.queue.apply_skip(slot);
        self.publish(QueueEvent::QueueSkipped {
            id: outcome.order_id.clone(),
            queue_number: outcome.queue_number,
            swapped_with: outcome.swapped_with.clone(),
        });
        Ok(PaidSkip {
            outcome,
            remaining_balance,
        })
    }
}

#[async_trait]
impl ActorState for QueueActor {
    type Command = QueueCommand;
    type Context = WalletClient;
    const NAME: &'static str = "OrderQueue";

    async fn handle(&mut self, command: QueueCommand, wallet: &WalletClient) {
        match command {
            QueueCommand::Add { order, respond_to } => {
                let id = order.id.clone();
                let result = self.queue.add(order).cloned();
                let reply = match result {
                    Ok(order) => {
                        info!(%id, queue_number = order.queue_number, size = self.queue.len(), "Added");
                        let queue_number = order.queue_number;
                        self.publish(QueueEvent::OrderAdded { order });
                        Ok(queue_number)
                    }
                    Err(e) => {
                        warn!(%id, error = %e, "Add failed");
                        Err(e)
                    }
                };
                let _ = respond_to.send(reply);
            }
            QueueCommand::Get { id, respond_to } => {
                let order = self.queue.get(&id).cloned();
                debug!(%id, found = order.is_some(), "Get");
                let _ = respond_to.send(order);
            }
            QueueCommand::List { respond_to } => {
                let _ = respond_to.send(self.queue.orders().to_vec());
            }
            QueueCommand::UpdateStatus {
                id,
                status,
                respond_to,
            } => {
                let reply = match self.queue.update_status(&id, status) {
                    Ok(change) => {
                        info!(%id, from = %change.from, to = %status, "Status updated");
                        self.publish(QueueEvent::StatusChanged {
                            id,
                            from: change.from,
                            to: status,
                        });
                        Ok(change.order)
                    }
                    Err(e) => {
                        warn!(%id, error = %e, "Status update rejected");
                        Err(e)
                    }
                };
                let _ = respond_to.send(reply);
            }
            QueueCommand::SkipQueue { id, respond_to } => {
                let result = self.queue.skip(&id);
                match &result {
                    Ok(outcome) => {
                        info!(%id, queue_number = outcome.queue_number, swapped = ?outcome.swapped_with, "Skipped");
                        self.publish(QueueEvent::QueueSkipped {
                            id: outcome.order_id.clone(),
                            queue_number: outcome.queue_number,
                            swapped_with: outcome.swapped_with.clone(),
                        });
                    }
                    Err(e) => warn!(%id, error = %e, "Skip rejected"),
                }
                let _ = respond_to.send(result);
            }
            QueueCommand::PaidSkip {
                id,
                user_id,
                respond_to,
            } => {
                let result = self.paid_skip(id.clone(), user_id, wallet).await;
                match &result {
                    Ok(paid) => info!(
                        %id,
                        %user_id,
                        cost = self.skip_cost,
                        queue_number = paid.outcome.queue_number,
                        balance = paid.remaining_balance,
                        "Paid skip"
                    ),
                    Err(e) => warn!(%id, %user_id, error = %e, "Paid skip rejected"),
                }
                let _ = respond_to.send(result);
            }
            QueueCommand::NextQueueNumber { respond_to } => {
                let _ = respond_to.send(self.queue.next_queue_number());
            }
            QueueCommand::Subscribe { respond_to } => {
                debug!(subscribers = self.events.receiver_count() + 1, "Subscribe");
                let _ = respond_to.send(self.events.subscribe());
            }
        }
    }

    fn size(&self) -> usize {
        self.queue.len()
    }
}
