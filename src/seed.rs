//! Starter data for the demo: three orders already in the kitchen, one
//! registered member, and a little community activity.
//!
//! | Queue # | Order     | Status  | Table | Placed     |
//! |---------|-----------|---------|-------|------------|
//! | 42      | `order-1` | cooking | 5     | 15 min ago |
//! | 43      | `order-2` | pending | 8     | 5 min ago  |
//! | 44      | `order-3` | ready   | 3     | 25 min ago |
//!
//! New orders continue from the configured starting number (45 by default).

use crate::catalog::{Catalog, CatalogError};
use crate::model::{
    items_total, Category, Comment, CommunityPost, MenuItemId, Order, OrderId, OrderItem,
    OrderStatus, OrderType, PostId, Review, ReviewId, UserCreate, UserId,
};
use chrono::{DateTime, Duration, NaiveDate, Utc};

struct StarterOrder {
    id: &'static str,
    queue_number: u32,
    lines: &'static [(&'static str, u32, Option<&'static str>)],
    status: OrderStatus,
    table_number: u32,
    order_type: OrderType,
    minutes_ago: i64,
    placed_by_member: bool,
}

const STARTER_ORDERS: [StarterOrder; 3] = [
    StarterOrder {
        id: "order-1",
        queue_number: 42,
        lines: &[("pad-thai", 2, Some("Extra spicy")), ("spring-rolls", 1, None)],
        status: OrderStatus::Cooking,
        table_number: 5,
        order_type: OrderType::Game,
        minutes_ago: 15,
        placed_by_member: false,
    },
    StarterOrder {
        id: "order-2",
        queue_number: 43,
        lines: &[("tom-yum", 1, None), ("thai-tea", 2, None)],
        status: OrderStatus::Pending,
        table_number: 8,
        order_type: OrderType::Manual,
        minutes_ago: 5,
        placed_by_member: false,
    },
    StarterOrder {
        id: "order-3",
        queue_number: 44,
        lines: &[("green-curry", 1, None), ("mango-sticky-rice", 1, None)],
        status: OrderStatus::Ready,
        table_number: 3,
        order_type: OrderType::Manual,
        minutes_ago: 25,
        placed_by_member: true,
    },
];

/// The three starter orders, in insertion sequence.
///
/// `member` is the demo user's id, attached to the order they placed.
pub fn starter_orders(
    catalog: &Catalog,
    member: Option<UserId>,
    now: DateTime<Utc>,
) -> Result<Vec<Order>, CatalogError> {
    STARTER_ORDERS
        .iter()
        .map(|starter| {
            let items = starter
                .lines
                .iter()
                .map(|&(menu_id, quantity, note)| {
                    let menu_item = catalog
                        .menu_item(&MenuItemId::from(menu_id))
                        .cloned()
                        .ok_or_else(|| CatalogError::UnknownMenuItem(menu_id.to_string()))?;
                    let item = OrderItem::new(menu_item, quantity);
                    Ok(match note {
                        Some(note) => item.with_customizations(note),
                        None => item,
                    })
                })
                .collect::<Result<Vec<_>, CatalogError>>()?;

            Ok(Order {
                id: OrderId::from(starter.id),
                queue_number: starter.queue_number,
                total_price: items_total(&items),
                items,
                status: starter.status,
                timestamp: now - Duration::minutes(starter.minutes_ago),
                table_number: Some(starter.table_number),
                order_type: starter.order_type,
                user_id: member.filter(|_| starter.placed_by_member),
            })
        })
        .collect()
}

/// The demo member, registered first so they become `user-1`.
pub fn starter_user() -> UserCreate {
    UserCreate {
        name: "Somchai".to_string(),
        coins: 150_000_000_000_000_000,
        member_since: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap_or_default(),
        favorite_items: vec![MenuItemId::from("pad-thai"), MenuItemId::from("tom-yum")],
        total_orders: 23,
    }
}

struct StarterPost {
    id: &'static str,
    author: (u32, &'static str),
    dish: &'static str,
    caption: &'static str,
    likes: u32,
    comment: Option<(&'static str, (u32, &'static str), &'static str, i64)>,
    hours_ago: i64,
    menu_type: Category,
}

const STARTER_POSTS: [StarterPost; 3] = [
    StarterPost {
        id: "post-1",
        author: (2, "Narisa"),
        dish: "pad-thai",
        caption: "Best Pad Thai in town! The balance of flavors is just perfect!",
        likes: 24,
        comment: Some(("comment-1", (3, "Prayut"), "Looks amazing! Need to try this!", 2)),
        hours_ago: 3,
        menu_type: Category::Main,
    },
    StarterPost {
        id: "post-2",
        author: (3, "Prayut"),
        dish: "tom-yum",
        caption: "Tom Yum challenge completed! My mouth is on fire but so worth it!",
        likes: 31,
        comment: None,
        hours_ago: 5,
        menu_type: Category::Main,
    },
    StarterPost {
        id: "post-3",
        author: (4, "Siriporn"),
        dish: "mango-sticky-rice",
        caption: "Perfect ending to a perfect meal. Mango sticky rice is always a win!",
        likes: 18,
        comment: Some(("comment-2", (1, "Somchai"), "This looks so good!", 1)),
        hours_ago: 6,
        menu_type: Category::Dessert,
    },
];

/// The starter feed, newest first. Post pictures come from the menu.
pub fn starter_posts(catalog: &Catalog, now: DateTime<Utc>) -> Result<Vec<CommunityPost>, CatalogError> {
    STARTER_POSTS
        .iter()
        .map(|starter| {
            let dish = catalog
                .menu_item(&MenuItemId::from(starter.dish))
                .ok_or_else(|| CatalogError::UnknownMenuItem(starter.dish.to_string()))?;
            let comments = starter
                .comment
                .iter()
                .map(|&(id, (user, name), text, hours_ago)| Comment {
                    id: id.to_string(),
                    user_id: UserId(user),
                    user_name: name.to_string(),
                    text: text.to_string(),
                    timestamp: now - Duration::hours(hours_ago),
                })
                .collect();
            Ok(CommunityPost {
                id: PostId::from(starter.id),
                user_id: UserId(starter.author.0),
                user_name: starter.author.1.to_string(),
                image: dish.image.clone(),
                caption: starter.caption.to_string(),
                likes: starter.likes,
                comments,
                timestamp: now - Duration::hours(starter.hours_ago),
                menu_type: starter.menu_type,
            })
        })
        .collect()
}

struct StarterReview {
    id: &'static str,
    order: &'static str,
    author: (u32, &'static str),
    rating: u8,
    comment: &'static str,
    dishes: &'static [&'static str],
    days_ago: i64,
}

const STARTER_REVIEWS: [StarterReview; 3] = [
    StarterReview {
        id: "review-1",
        order: "order-1",
        author: (2, "Narisa"),
        rating: 5,
        comment: "Absolutely delicious! The cooking game made it so fun to order!",
        dishes: &["Pad Thai", "Spring Rolls"],
        days_ago: 1,
    },
    StarterReview {
        id: "review-2",
        order: "order-2",
        author: (3, "Prayut"),
        rating: 4,
        comment: "Great food, but the wait was a bit long during peak hours.",
        dishes: &["Tom Yum Goong", "Thai Iced Tea"],
        days_ago: 2,
    },
    StarterReview {
        id: "review-3",
        order: "order-3",
        author: (4, "Siriporn"),
        rating: 5,
        comment: "Love the coins system! Skipped the queue and got my food fast!",
        dishes: &["Green Curry"],
        days_ago: 3,
    },
];

/// Reviews left for the three starter orders, newest first.
pub fn starter_reviews(now: DateTime<Utc>) -> Vec<Review> {
    STARTER_REVIEWS
        .iter()
        .map(|starter| Review {
            id: ReviewId::from(starter.id),
            order_id: OrderId::from(starter.order),
            user_id: UserId(starter.author.0),
            user_name: starter.author.1.to_string(),
            rating: starter.rating,
            comment: starter.comment.to_string(),
            timestamp: now - Duration::days(starter.days_ago),
            menu_items: starter.dishes.iter().map(|dish| dish.to_string()).collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starter_orders_match_menu_prices() {
        let catalog = Catalog::builtin().unwrap();
        let orders = starter_orders(&catalog, Some(UserId(1)), Utc::now()).unwrap();

        let summary: Vec<(u32, OrderStatus, u32)> = orders
            .iter()
            .map(|o| (o.queue_number, o.status, o.total_price))
            .collect();
        assert_eq!(
            summary,
            vec![
                (42, OrderStatus::Cooking, 300),
                (43, OrderStatus::Pending, 200),
                (44, OrderStatus::Ready, 210),
            ]
        );
        assert_eq!(orders[0].items[0].customizations.as_deref(), Some("Extra spicy"));
        assert_eq!(orders[2].user_id, Some(UserId(1)));
        assert_eq!(orders[0].user_id, None);
    }

    #[test]
    fn test_starter_community() {
        let catalog = Catalog::builtin().unwrap();
        let now = Utc::now();
        let posts = starter_posts(&catalog, now).unwrap();

        let summary: Vec<(&str, u32, usize)> = posts
            .iter()
            .map(|p| (p.id.0.as_str(), p.likes, p.comments.len()))
            .collect();
        assert_eq!(
            summary,
            vec![("post-1", 24, 1), ("post-2", 31, 0), ("post-3", 18, 1)]
        );
        assert_eq!(posts[2].image, "mango-sticky-rice.jpg");
        assert!(posts.windows(2).all(|w| w[0].timestamp > w[1].timestamp));

        let reviews = starter_reviews(now);
        let ratings: Vec<u8> = reviews.iter().map(|r| r.rating).collect();
        assert_eq!(ratings, vec![5, 4, 5]);
        assert!(reviews.windows(2).all(|w| w[0].timestamp > w[1].timestamp));
    }

    #[test]
    fn test_starter_user() {
        let user = starter_user();
        assert_eq!(user.name, "Somchai");
        assert_eq!(user.total_orders, 23);
        assert_eq!(user.member_since.to_string(), "2024-01-15");
    }
}
