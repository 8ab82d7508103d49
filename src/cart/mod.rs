//! # Cart
//!
//! Everything a QR table does before an order reaches the queue: picking
//! menu items, building custom dishes and checking out.
//!
//! - [`Cart`] - order lines with quantities and a running total
//! - [`MainDishSelection`] / [`SnackSelection`] - the manual order builder
//! - [`CookingGame`] - the ingredient mini-game that produces one dish
//!
//! Nothing here touches the queue. [`Cart::checkout`] hands back a
//! [`NewOrder`] for the caller to pass to
//! [`OrderQueueClient::add_order`](crate::clients::OrderQueueClient::add_order).

mod builder;
mod error;
mod game;

pub use builder::{MainDishSelection, SnackSelection, MAX_MEATS};
pub use error::ValidationError;
pub use game::{CookingGame, GAME_DISH_PRICE, STYLE_WORDS};

use crate::model::{
    items_total, MenuItem, MenuItemId, NewOrder, OrderId, OrderItem, OrderStatus, OrderType,
    UserId,
};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone, Default)]
pub struct Cart {
    items: Vec<OrderItem>,
    issued_ids: u32,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// A fresh id for a dish built at this table, e.g. `custom-3`.
    pub fn fresh_item_id(&mut self, prefix: &str) -> MenuItemId {
        self.issued_ids += 1;
        MenuItemId::new(format!("{prefix}-{}", self.issued_ids))
    }

    /// Adds a line. A line for the same menu item with the same customizations
    /// has its quantity raised instead; a different note gets its own line.
    pub fn add(&mut self, item: OrderItem) -> Result<(), ValidationError> {
        if item.quantity == 0 {
            return Err(ValidationError::ZeroQuantity);
        }
        match self.items.iter_mut().find(|line| {
            line.menu_item.id == item.menu_item.id && line.customizations == item.customizations
        }) {
            Some(line) => line.quantity = line.quantity.saturating_add(item.quantity),
            None => self.items.push(item),
        }
        Ok(())
    }

    pub fn add_menu_item(&mut self, menu_item: &MenuItem, quantity: u32) -> Result<(), ValidationError> {
        self.add(OrderItem::new(menu_item.clone(), quantity))
    }

    /// Sets the quantity of the first line for `id`; zero removes it. Returns
    /// false if the item is not in the cart.
    pub fn set_quantity(&mut self, id: &MenuItemId, quantity: u32) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        if quantity == 0 {
            self.items.remove(index);
        } else {
            self.items[index].quantity = quantity;
        }
        true
    }

    /// Removes the first line for `id`.
    pub fn remove(&mut self, id: &MenuItemId) -> Option<OrderItem> {
        self.position(id).map(|index| self.items.remove(index))
    }

    fn position(&self, id: &MenuItemId) -> Option<usize> {
        self.items.iter().position(|line| &line.menu_item.id == id)
    }

    pub fn items(&self) -> &[OrderItem] {
        &self.items
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    pub fn total_price(&self) -> u32 {
        items_total(&self.items)
    }

    /// Turns the cart into a pending order ready for the queue.
    pub fn checkout(
        self,
        id: OrderId,
        table_number: Option<u32>,
        order_type: OrderType,
        user_id: Option<UserId>,
        now: DateTime<Utc>,
    ) -> Result<NewOrder, ValidationError> {
        if self.items.is_empty() {
            return Err(ValidationError::EmptyCart);
        }
        let total_price = self.total_price();
        Ok(NewOrder {
            id,
            items: self.items,
            total_price,
            status: OrderStatus::Pending,
            timestamp: now,
            table_number,
            order_type,
            user_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;

    fn menu(id: &str) -> MenuItem {
        Catalog::builtin()
            .unwrap()
            .menu_item(&MenuItemId::from(id))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_total_tracks_quantities() {
        let mut cart = Cart::new();
        cart.add_menu_item(&menu("pad-thai"), 2).unwrap();
        cart.add_menu_item(&menu("thai-tea"), 1).unwrap();
        cart.add_menu_item(&menu("pad-thai"), 1).unwrap();

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.item_count(), 4);
        assert_eq!(cart.total_price(), 3 * 120 + 45);

        assert!(cart.set_quantity(&MenuItemId::from("thai-tea"), 0));
        assert_eq!(cart.total_price(), 360);
        assert!(!cart.set_quantity(&MenuItemId::from("thai-tea"), 2));
    }

    #[test]
    fn test_different_notes_stay_on_separate_lines() {
        let mut cart = Cart::new();
        let pad_thai = menu("pad-thai");
        cart.add(OrderItem::new(pad_thai.clone(), 1).with_customizations("Extra spicy"))
            .unwrap();
        cart.add(OrderItem::new(pad_thai.clone(), 1).with_customizations("No peanuts"))
            .unwrap();
        cart.add(OrderItem::new(pad_thai, 2).with_customizations("Extra spicy"))
            .unwrap();

        let lines: Vec<(Option<&str>, u32)> = cart
            .items()
            .iter()
            .map(|line| (line.customizations.as_deref(), line.quantity))
            .collect();
        assert_eq!(lines, vec![(Some("Extra spicy"), 3), (Some("No peanuts"), 1)]);
        assert_eq!(cart.total_price(), 4 * 120);
    }

    #[test]
    fn test_remove_line() {
        let mut cart = Cart::new();
        cart.add_menu_item(&menu("spring-rolls"), 2).unwrap();
        cart.add_menu_item(&menu("thai-tea"), 1).unwrap();

        let removed = cart.remove(&MenuItemId::from("spring-rolls")).unwrap();
        assert_eq!(removed.quantity, 2);
        assert_eq!(cart.total_price(), 45);
        assert!(cart.remove(&MenuItemId::from("spring-rolls")).is_none());
    }

    #[test]
    fn test_zero_quantity_rejected() {
        let mut cart = Cart::new();
        assert_eq!(
            cart.add_menu_item(&menu("tom-yum"), 0),
            Err(ValidationError::ZeroQuantity)
        );
        assert!(cart.is_empty());
    }

    #[test]
    fn test_checkout_total_matches_cart() {
        let mut cart = Cart::new();
        cart.add_menu_item(&menu("green-curry"), 1).unwrap();
        cart.add_menu_item(&menu("mango-sticky-rice"), 2).unwrap();
        let expected = cart.total_price();

        let order = cart
            .checkout(OrderId::from("order-9"), Some(4), OrderType::Manual, None, Utc::now())
            .unwrap();
        assert_eq!(order.total_price, expected);
        assert_eq!(order.total_price, 130 + 160);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.table_number, Some(4));
    }

    #[test]
    fn test_empty_checkout_rejected() {
        let result = Cart::new().checkout(
            OrderId::from("order-1"),
            None,
            OrderType::Manual,
            None,
            Utc::now(),
        );
        assert_eq!(result, Err(ValidationError::EmptyCart));
    }

    #[test]
    fn test_fresh_ids_are_distinct() {
        let mut cart = Cart::new();
        let first = cart.fresh_item_id("custom");
        let second = cart.fresh_item_id("snack");
        assert_eq!(first.as_str(), "custom-1");
        assert_eq!(second.as_str(), "snack-2");
    }
}
