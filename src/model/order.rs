//! Orders as held by the queue store.
//!
//! A caller builds a [`NewOrder`] (everything except the queue number); the
//! store turns it into an [`Order`] by stamping the next queue number.
use crate::model::{MenuItem, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Caller-supplied order identifier, e.g. `order-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Where an order is in the kitchen.
///
/// The only legal moves are one step forward:
/// `Pending -> Cooking -> Ready -> Completed`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Cooking,
    Ready,
    Completed,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Cooking,
        OrderStatus::Ready,
        OrderStatus::Completed,
    ];

    /// The single status this one may advance to.
    pub fn next(self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Pending => Some(OrderStatus::Cooking),
            OrderStatus::Cooking => Some(OrderStatus::Ready),
            OrderStatus::Ready => Some(OrderStatus::Completed),
            OrderStatus::Completed => None,
        }
    }

    pub fn can_transition_to(self, to: OrderStatus) -> bool {
        self.next() == Some(to)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Cooking => "cooking",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
        }
    }

    /// Text shown to the customer on the QR queue screen.
    pub fn customer_label(self) -> &'static str {
        match self {
            OrderStatus::Pending => "Waiting in Queue",
            OrderStatus::Cooking => "Cooking Now!",
            OrderStatus::Ready => "Ready for Pickup!",
            OrderStatus::Completed => "Processing",
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which QR flow produced the order. Informational only.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Built through the cooking mini-game.
    Game,
    /// Picked directly from the menu builder ("lazy cook").
    #[serde(alias = "lazy")]
    Manual,
}

/// One line of an order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item: MenuItem,
    pub quantity: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customizations: Option<String>,
}

impl OrderItem {
    pub fn new(menu_item: MenuItem, quantity: u32) -> Self {
        Self {
            menu_item,
            quantity,
            customizations: None,
        }
    }

    pub fn with_customizations(mut self, note: impl Into<String>) -> Self {
        self.customizations = Some(note.into());
        self
    }

    pub fn line_total(&self) -> u32 {
        self.menu_item.price.saturating_mul(self.quantity)
    }
}

/// Sum of `price * quantity` over the given lines.
pub fn items_total(items: &[OrderItem]) -> u32 {
    items
        .iter()
        .fold(0u32, |total, item| total.saturating_add(item.line_total()))
}

/// Payload for adding an order to the queue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewOrder {
    pub id: OrderId,
    pub items: Vec<OrderItem>,
    /// Computed by the caller; the store does not recompute it.
    pub total_price: u32,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub table_number: Option<u32>,
    pub order_type: OrderType,
    #[serde(default)]
    pub user_id: Option<UserId>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub queue_number: u32,
    pub items: Vec<OrderItem>,
    pub total_price: u32,
    pub status: OrderStatus,
    pub timestamp: DateTime<Utc>,
    pub table_number: Option<u32>,
    pub order_type: OrderType,
    pub user_id: Option<UserId>,
}

impl Order {
    pub fn from_new(order: NewOrder, queue_number: u32) -> Self {
        Self {
            id: order.id,
            queue_number,
            items: order.items,
            total_price: order.total_price,
            status: order.status,
            timestamp: order.timestamp,
            table_number: order.table_number,
            order_type: order.order_type,
            user_id: order.user_id,
        }
    }

    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|item| item.quantity).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::MenuItemId;

    #[test]
    fn test_status_machine_only_steps_forward() {
        use OrderStatus::*;
        for from in OrderStatus::ALL {
            for to in OrderStatus::ALL {
                let legal = matches!(
                    (from, to),
                    (Pending, Cooking) | (Cooking, Ready) | (Ready, Completed)
                );
                assert_eq!(from.can_transition_to(to), legal, "{from} -> {to}");
            }
        }
        assert_eq!(Completed.next(), None);
    }

    #[test]
    fn test_customer_labels() {
        let labels: Vec<&str> = OrderStatus::ALL
            .iter()
            .map(|status| status.customer_label())
            .collect();
        assert_eq!(
            labels,
            vec!["Waiting in Queue", "Cooking Now!", "Ready for Pickup!", "Processing"]
        );
    }

    #[test]
    fn test_items_total_multiplies_quantity() {
        let pad_thai = MenuItem::custom(MenuItemId::from("pad-thai"), "Pad Thai", 120, "");
        let rolls = MenuItem::custom(MenuItemId::from("spring-rolls"), "Spring Rolls", 60, "");
        let items = vec![
            OrderItem::new(pad_thai, 2).with_customizations("Extra spicy"),
            OrderItem::new(rolls, 1),
        ];
        assert_eq!(items_total(&items), 300);
    }

    #[test]
    fn test_lazy_order_type_alias() {
        let parsed: OrderType = serde_json::from_str("\"lazy\"").unwrap();
        assert_eq!(parsed, OrderType::Manual);
        assert_eq!(serde_json::to_string(&OrderType::Game).unwrap(), "\"game\"");
    }
}
