//! # Order Queue Store
//!
//! The single source of truth for orders and the next queue number.
//!
//! Orders are kept in serving order, which starts out as insertion order.
//! Skipping swaps an order with the one directly ahead of it: both the
//! `queue_number` values and the positions trade places. Repeated skips walk
//! an order toward the front one slot per call, and queue numbers keep
//! increasing along the sequence. Orders are never removed.
//!
//! Every operation validates before it mutates, so an `Err` always means the
//! store is unchanged.

use crate::model::{NewOrder, Order, OrderId, OrderStatus};
use crate::queue_actor::OrderError;
use serde::Serialize;

/// Result of a successful skip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipOutcome {
    pub order_id: OrderId,
    /// The skipping order's queue number after the skip.
    pub queue_number: u32,
    pub previous_status: OrderStatus,
    /// The neighbour that was bumped back, with the number it now holds.
    /// `None` when the order was already first in the sequence.
    pub swapped_with: Option<(OrderId, u32)>,
}

/// A skip that has passed validation and can be applied with
/// [`OrderQueue::apply_skip`]. Only valid until the queue next changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkipSlot {
    index: usize,
}

/// Result of a successful status update.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatusChange {
    pub order: Order,
    pub from: OrderStatus,
}

/// Result of a paid skip: the skip itself plus what the customer has left.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PaidSkip {
    pub outcome: SkipOutcome,
    pub remaining_balance: u64,
}

#[derive(Debug, Clone)]
pub struct OrderQueue {
    orders: Vec<Order>,
    next_queue_number: u32,
}

impl OrderQueue {
    /// An empty queue that hands out `starting_number` first.
    pub fn new(starting_number: u32) -> Self {
        Self {
            orders: Vec::new(),
            next_queue_number: starting_number,
        }
    }

    /// A queue pre-filled with already numbered orders, e.g. starter data.
    ///
    /// The counter never starts at or below a number already handed out.
    pub fn with_orders(orders: Vec<Order>, next_queue_number: u32) -> Self {
        let floor = orders
            .iter()
            .map(|order| order.queue_number.saturating_add(1))
            .max()
            .unwrap_or(0);
        Self {
            orders,
            next_queue_number: next_queue_number.max(floor),
        }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn next_queue_number(&self) -> u32 {
        self.next_queue_number
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    fn position(&self, id: &OrderId) -> Result<usize, OrderError> {
        self.orders
            .iter()
            .position(|order| &order.id == id)
            .ok_or_else(|| OrderError::NotFound(id.clone()))
    }

    /// Stamps the current counter value on the order, appends it and advances
    /// the counter. Returns the stored order.
    pub fn add(&mut self, order: NewOrder) -> Result<&Order, OrderError> {
        if order.items.is_empty() {
            return Err(OrderError::EmptyOrder);
        }
        if self.get(&order.id).is_some() {
            return Err(OrderError::DuplicateId(order.id));
        }
        let queue_number = self.next_queue_number;
        self.next_queue_number = queue_number
            .checked_add(1)
            .ok_or(OrderError::QueueNumbersExhausted)?;

        self.orders.push(Order::from_new(order, queue_number));
        let index = self.orders.len() - 1;
        Ok(&self.orders[index])
    }

    /// Moves an order one step along `Pending -> Cooking -> Ready -> Completed`.
    pub fn update_status(&mut self, id: &OrderId, to: OrderStatus) -> Result<StatusChange, OrderError> {
        let index = self.position(id)?;
        let order = &mut self.orders[index];
        let from = order.status;
        if !from.can_transition_to(to) {
            return Err(OrderError::InvalidTransition {
                id: id.clone(),
                from,
                to,
            });
        }
        order.status = to;
        Ok(StatusChange {
            order: order.clone(),
            from,
        })
    }

    /// Moves the order one slot toward the front and starts cooking it.
    ///
    /// The order swaps queue number and position with the order directly
    /// ahead. An order that is already first only has its status changed.
    /// Allowed while `Pending` or `Cooking`.
    pub fn skip(&mut self, id: &OrderId) -> Result<SkipOutcome, OrderError> {
        let index = self.position(id)?;
        let status = self.orders[index].status;
        if !matches!(status, OrderStatus::Pending | OrderStatus::Cooking) {
            return Err(OrderError::InvalidTransition {
                id: id.clone(),
                from: status,
                to: OrderStatus::Cooking,
            });
        }
        Ok(self.apply_skip(SkipSlot { index }))
    }

    /// Checks that a paid skip could go ahead, without changing anything.
    ///
    /// Customers may only pay while their order is still waiting.
    pub fn check_paid_skip(&self, id: &OrderId) -> Result<SkipSlot, OrderError> {
        let index = self.position(id)?;
        match self.orders[index].status {
            OrderStatus::Pending => Ok(SkipSlot { index }),
            status => Err(OrderError::NotSkippable {
                id: id.clone(),
                status,
            }),
        }
    }

    /// Applies a validated skip. The slot must come from this queue with no
    /// change in between.
    pub fn apply_skip(&mut self, slot: SkipSlot) -> SkipOutcome {
        let SkipSlot { index } = slot;
        let previous_status = self.orders[index].status;

        let (index, swapped_with) = match index.checked_sub(1) {
            Some(ahead) => {
                let (head, tail) = self.orders.split_at_mut(index);
                let (before, skipper) = (&mut head[ahead], &mut tail[0]);
                std::mem::swap(&mut before.queue_number, &mut skipper.queue_number);
                let bumped = (before.id.clone(), before.queue_number);
                self.orders.swap(ahead, index);
                (ahead, Some(bumped))
            }
            None => (index, None),
        };

        let order = &mut self.orders[index];
        order.status = OrderStatus::Cooking;
        SkipOutcome {
            order_id: order.id.clone(),
            queue_number: order.queue_number,
            previous_status,
            swapped_with,
        }
    }
}
