//! # Kitchen Simulator
//!
//! Stands in for kitchen staff: every new order is moved from pending to
//! cooking to ready, one step per `step_delay`.
//!
//! The simulator is an ordinary queue client. It learns about orders from
//! [`QueueEvent::OrderAdded`] and advances them with
//! [`OrderQueueClient::update_status`], so it follows the same rules as
//! staff. Staff or a skip may move an order first; the rejected step is
//! logged and the timer tries the next one.
//!
//! Each order gets its own timer task in a [`JoinSet`]. Stopping or dropping
//! the simulator aborts the listener, which drops the set and aborts every
//! pending timer with it.

use crate::clients::OrderQueueClient;
use crate::model::{OrderId, OrderStatus};
use crate::queue_actor::{OrderError, QueueEvent};
use std::time::Duration;
use tokio::sync::broadcast::{self, error::RecvError};
use tokio::task::{JoinHandle, JoinSet};
use tracing::{debug, info, warn};

pub struct KitchenSimulator {
    task: JoinHandle<()>,
}

impl KitchenSimulator {
    /// Subscribes before returning, so every order added afterwards is picked up.
    pub async fn start(client: OrderQueueClient, step_delay: Duration) -> Result<Self, OrderError> {
        let events = client.subscribe().await?;
        info!(delay_secs = step_delay.as_secs(), "Kitchen simulator started");
        let task = tokio::spawn(listen(client, events, step_delay));
        Ok(Self { task })
    }

    pub fn is_running(&self) -> bool {
        !self.task.is_finished()
    }

    /// Aborts the listener and every outstanding timer, and waits for the
    /// listener to be gone.
    pub async fn shutdown(mut self) {
        self.task.abort();
        let _ = (&mut self.task).await;
        info!("Kitchen simulator stopped");
    }
}

impl Drop for KitchenSimulator {
    fn drop(&mut self) {
        self.task.abort();
    }
}

async fn listen(
    client: OrderQueueClient,
    mut events: broadcast::Receiver<QueueEvent>,
    step_delay: Duration,
) {
    let mut timers = JoinSet::new();
    loop {
        tokio::select! {
            event = events.recv() => match event {
                Ok(QueueEvent::OrderAdded { order }) => {
                    if matches!(order.status, OrderStatus::Pending | OrderStatus::Cooking) {
                        debug!(id = %order.id, "Timer scheduled");
                        timers.spawn(progress(client.clone(), order.id, step_delay));
                    }
                }
                Ok(_) => {}
                Err(RecvError::Lagged(skipped)) => {
                    warn!(skipped, "Kitchen simulator lagged, some new orders were missed");
                }
                Err(RecvError::Closed) => {
                    info!("Queue closed, kitchen simulator shutting down");
                    break;
                }
            },
            Some(finished) = timers.join_next(), if !timers.is_empty() => {
                match finished {
                    Ok(Ok(())) => {}
                    Ok(Err(e)) => warn!(error = %e, "Kitchen timer failed"),
                    Err(e) if e.is_cancelled() => {}
                    Err(e) => warn!(error = %e, "Kitchen timer panicked"),
                }
            }
        }
    }
}

/// Advances one order until it is ready, gone, or past the kitchen.
async fn progress(client: OrderQueueClient, id: OrderId, step_delay: Duration) -> Result<(), OrderError> {
    loop {
        tokio::time::sleep(step_delay).await;

        let Some(order) = client.get(id.clone()).await? else {
            return Ok(());
        };
        let next = match order.status {
            OrderStatus::Pending => OrderStatus::Cooking,
            OrderStatus::Cooking => OrderStatus::Ready,
            OrderStatus::Ready | OrderStatus::Completed => return Ok(()),
        };

        match client.update_status(id.clone(), next).await {
            Ok(updated) => {
                info!(%id, status = %updated.status, "Kitchen advanced order");
                if updated.status == OrderStatus::Ready {
                    return Ok(());
                }
            }
            Err(OrderError::InvalidTransition { from, .. }) => {
                debug!(%id, %from, "Order already moved, retrying next step");
            }
            Err(e) => return Err(e),
        }
    }
}
