//! Staff dashboard: the filtered queue view, per-status counts, the action
//! button for each order and the reviews tab summary.
//!
//! Everything here is a pure function over a snapshot from
//! [`OrderQueueClient::orders`](crate::clients::OrderQueueClient::orders) or
//! [`CommunityClient::reviews`](crate::clients::CommunityClient::reviews).

use crate::model::{Order, OrderStatus, Review};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Which orders the dashboard tab shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    pub fn matches(self, order: &Order) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Only(status) => order.status == status,
        }
    }

    /// Message shown when nothing matches.
    pub fn empty_message(self) -> String {
        match self {
            StatusFilter::All => "No orders yet".to_string(),
            StatusFilter::Only(status) => format!("No {status} orders"),
        }
    }
}

/// Orders matching `filter`, lowest queue number first.
pub fn queue_view(orders: &[Order], filter: StatusFilter) -> Vec<&Order> {
    let mut view: Vec<&Order> = orders.iter().filter(|o| filter.matches(o)).collect();
    view.sort_by_key(|o| o.queue_number);
    view
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub cooking: usize,
    pub ready: usize,
    pub completed: usize,
}

impl StatusCounts {
    pub fn tally(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut counts, order| {
            match order.status {
                OrderStatus::Pending => counts.pending += 1,
                OrderStatus::Cooking => counts.cooking += 1,
                OrderStatus::Ready => counts.ready += 1,
                OrderStatus::Completed => counts.completed += 1,
            }
            counts
        })
    }

    /// Orders still in the kitchen or waiting for pickup.
    pub fn active(&self) -> usize {
        self.pending + self.cooking + self.ready
    }
}

/// Header of the reviews tab.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewSummary {
    pub count: usize,
    /// Mean star rating, `None` without reviews.
    pub average_rating: Option<f32>,
    /// Number of reviews per star rating, one star first.
    pub by_stars: [usize; Review::MAX_RATING as usize],
}

impl ReviewSummary {
    pub fn tally(reviews: &[Review]) -> Self {
        let mut summary = Self::default();
        let mut stars_total = 0u32;
        for review in reviews {
            let Some(slot) = usize::from(review.rating)
                .checked_sub(1)
                .and_then(|index| summary.by_stars.get_mut(index))
            else {
                continue;
            };
            *slot += 1;
            summary.count += 1;
            stars_total += u32::from(review.rating);
        }
        if summary.count > 0 {
            summary.average_rating = Some(stars_total as f32 / summary.count as f32);
        }
        summary
    }
}

/// The button staff press to move an order on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct StaffAction {
    pub label: &'static str,
    pub target: OrderStatus,
}

/// `None` once an order is completed.
pub fn staff_action(status: OrderStatus) -> Option<StaffAction> {
    let label = match status {
        OrderStatus::Pending => "Start Cooking",
        OrderStatus::Cooking => "Mark Ready",
        OrderStatus::Ready => "Complete",
        OrderStatus::Completed => return None,
    };
    status.next().map(|target| StaffAction { label, target })
}

/// "Just now", "12m ago" or "3h ago". Timestamps in the future read as "Just now".
pub fn elapsed_label(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{minutes}m ago")
    } else {
        format!("{}h ago", minutes / 60)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{MenuItem, MenuItemId, OrderId, OrderItem, OrderType};
    use chrono::Duration;

    fn order(id: &str, queue_number: u32, status: OrderStatus) -> Order {
        Order {
            id: OrderId::from(id),
            queue_number,
            items: vec![OrderItem::new(
                MenuItem::custom(MenuItemId::from("thai-tea"), "Thai Iced Tea", 45, ""),
                1,
            )],
            total_price: 45,
            status,
            timestamp: Utc::now(),
            table_number: None,
            order_type: OrderType::Manual,
            user_id: None,
        }
    }

    #[test]
    fn test_view_sorts_by_queue_number() {
        let orders = vec![
            order("a", 47, OrderStatus::Pending),
            order("b", 45, OrderStatus::Cooking),
            order("c", 46, OrderStatus::Pending),
        ];
        let all: Vec<u32> = queue_view(&orders, StatusFilter::All)
            .iter()
            .map(|o| o.queue_number)
            .collect();
        assert_eq!(all, vec![45, 46, 47]);

        let pending: Vec<&str> = queue_view(&orders, StatusFilter::Only(OrderStatus::Pending))
            .iter()
            .map(|o| o.id.0.as_str())
            .collect();
        assert_eq!(pending, vec!["c", "a"]);

        assert!(queue_view(&orders, StatusFilter::Only(OrderStatus::Ready)).is_empty());
        assert_eq!(
            StatusFilter::Only(OrderStatus::Ready).empty_message(),
            "No ready orders"
        );
    }

    #[test]
    fn test_tally() {
        let orders = vec![
            order("a", 1, OrderStatus::Pending),
            order("b", 2, OrderStatus::Pending),
            order("c", 3, OrderStatus::Ready),
            order("d", 4, OrderStatus::Completed),
        ];
        let counts = StatusCounts::tally(&orders);
        assert_eq!(
            counts,
            StatusCounts {
                pending: 2,
                cooking: 0,
                ready: 1,
                completed: 1
            }
        );
        assert_eq!(counts.active(), 3);
    }

    #[test]
    fn test_staff_actions_follow_status_machine() {
        assert_eq!(
            staff_action(OrderStatus::Pending),
            Some(StaffAction {
                label: "Start Cooking",
                target: OrderStatus::Cooking
            })
        );
        assert_eq!(staff_action(OrderStatus::Cooking).unwrap().label, "Mark Ready");
        assert_eq!(staff_action(OrderStatus::Ready).unwrap().target, OrderStatus::Completed);
        assert_eq!(staff_action(OrderStatus::Completed), None);
    }

    #[test]
    fn test_review_summary() {
        assert_eq!(ReviewSummary::tally(&[]), ReviewSummary::default());

        let reviews = crate::seed::starter_reviews(Utc::now());
        let summary = ReviewSummary::tally(&reviews);
        assert_eq!(summary.count, 3);
        assert_eq!(summary.by_stars, [0, 0, 0, 1, 2]);
        let average = summary.average_rating.unwrap();
        assert!((average - 14.0 / 3.0).abs() < 1e-4);
    }

    #[test]
    fn test_elapsed_label() {
        let now = Utc::now();
        assert_eq!(elapsed_label(now - Duration::seconds(30), now), "Just now");
        assert_eq!(elapsed_label(now + Duration::minutes(5), now), "Just now");
        assert_eq!(elapsed_label(now - Duration::minutes(15), now), "15m ago");
        assert_eq!(elapsed_label(now - Duration::minutes(59), now), "59m ago");
        assert_eq!(elapsed_label(now - Duration::minutes(125), now), "2h ago");
    }
}
