//! # Restaurant Queue Demo
//!
//! Runs one pass through every platform against the in-memory back end:
//!
//! 1. A QR table builds a manual order and a cooking-game order
//! 2. The member pays coins to skip the queue
//! 3. Staff move orders on from the dashboard while the kitchen simulator runs
//! 4. The member reviews a finished order and likes a community post
//! 5. The dashboard is printed as JSON
//!
//! Configuration comes from the environment (see [`RestaurantConfig::from_env`]);
//! a `.env` file is honoured. `KITCHEN_STEP_DELAY_SECS=1` keeps the run short.

use chrono::Utc;
use restaurant_queue::cart::{Cart, CookingGame, MainDishSelection, SnackSelection};
use restaurant_queue::dashboard::{
    elapsed_label, queue_view, staff_action, ReviewSummary, StatusCounts, StatusFilter,
};
use restaurant_queue::model::{
    CoinReason, MenuItemId, OrderId, OrderStatus, OrderType, PostId, Review, ReviewId,
};
use restaurant_queue::platform::{OrderMode, QrScreen};
use restaurant_queue::{setup_tracing, RestaurantConfig, RestaurantSystem};
use serde_json::json;
use std::error::Error;
use tracing::{info, info_span, warn, Instrument};

const TABLE: u32 = 5;

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    dotenvy::dotenv().ok();
    setup_tracing();

    let config = RestaurantConfig::from_env()?;
    let mut system = RestaurantSystem::new(config)?;
    system.start_kitchen().await?;
    let catalog = system.catalog.clone();
    let member = system.demo_user();

    // Manual order: a custom main dish, a snack and a drink.
    let manual_order = async {
        let screen = QrScreen::default().select_mode(OrderMode::Manual);
        let mut cart = Cart::new();

        let mut dish = MainDishSelection::new();
        dish.select_dish_type("krapow").select_size("special");
        dish.toggle_meat("crispy-pork");
        dish.toggle_topping("fried-egg");
        let id = cart.fresh_item_id("custom");
        cart.add(dish.build(&catalog, id)?)?;

        let mut snack = SnackSelection::new();
        snack.select_snack("french-fries").select_seasoning("paprika");
        let id = cart.fresh_item_id("snack");
        cart.add(snack.build(&catalog, id)?)?;

        if let Some(tea) = catalog.menu_item(&MenuItemId::from("thai-tea")) {
            cart.add_menu_item(tea, 2)?;
        }

        let next = system.queue_client.next_queue_number().await?;
        let order_id = OrderId::new(format!("order-{next}"));
        let order = cart.checkout(order_id.clone(), Some(TABLE), OrderType::Manual, None, Utc::now())?;
        let total = order.total_price;
        let queue_number = system.queue_client.add_order(order).await?;
        let screen = screen.order_placed(order_id.clone());
        info!(%order_id, queue_number, total, ?screen, "Manual order placed");
        Ok::<_, Box<dyn Error>>(order_id)
    }
    .instrument(info_span!("manual_order"))
    .await?;

    // Cooking game: the member cooks, earns coins, then pays to skip.
    let game_order = async {
        let mut game = CookingGame::new();
        for ingredient in ["chicken", "basil", "pepper", "chili"] {
            game.toggle(&catalog, ingredient)?;
        }
        let mut cart = Cart::new();
        let id = cart.fresh_item_id("game");
        let dish = game.finish(&catalog, &mut rand::thread_rng(), id)?;
        info!(name = %dish.menu_item.name, "Dish cooked");
        cart.add(dish)?;

        let next = system.queue_client.next_queue_number().await?;
        let order_id = OrderId::new(format!("order-{next}"));
        let order = cart.checkout(order_id.clone(), Some(TABLE), OrderType::Game, member, Utc::now())?;
        let queue_number = system.queue_client.add_order(order).await?;
        info!(%order_id, queue_number, "Game order placed");

        if let Some(member) = member {
            let balance = system.wallet_client.earn(member, CoinReason::CookingGame).await?;
            system.wallet_client.record_order(member).await?;
            info!(%member, balance, "Cooking reward earned");

            match system.queue_client.paid_skip(order_id.clone(), member).await {
                Ok(paid) => info!(
                    %order_id,
                    queue_number = paid.outcome.queue_number,
                    balance = paid.remaining_balance,
                    "Skipped the queue"
                ),
                Err(e) => warn!(%order_id, error = %e, "Could not skip the queue"),
            }
        }
        Ok::<_, Box<dyn Error>>(order_id)
    }
    .instrument(info_span!("game_order"))
    .await?;

    // Staff hand over every order that is ready.
    async {
        let orders = system.queue_client.orders().await?;
        for order in queue_view(&orders, StatusFilter::Only(OrderStatus::Ready)) {
            if let Some(action) = staff_action(order.status) {
                system
                    .queue_client
                    .update_status(order.id.clone(), action.target)
                    .await?;
                info!(id = %order.id, action = action.label, "Staff action");
            }
        }
        Ok::<_, Box<dyn Error>>(())
    }
    .instrument(info_span!("dashboard"))
    .await?;

    // The member rates their finished order and browses the feed.
    if let Some(member) = member {
        async {
            let user = system.wallet_client.get(member).await?;
            let orders = system.queue_client.orders().await?;
            let finished = orders.iter().find(|order| {
                order.user_id == Some(member)
                    && matches!(order.status, OrderStatus::Ready | OrderStatus::Completed)
            });
            if let Some(order) = finished {
                let review = Review {
                    id: ReviewId(format!("review-{}", order.id)),
                    order_id: order.id.clone(),
                    user_id: member,
                    user_name: user.name.clone(),
                    rating: 5,
                    comment: "Quick and tasty!".to_string(),
                    timestamp: Utc::now(),
                    menu_items: order.items.iter().map(|i| i.menu_item.name.clone()).collect(),
                };
                let balance = system.submit_review(review).await?;
                info!(order_id = %order.id, ?balance, "Review submitted");
            }
            let likes = system.community_client.like_post(PostId::from("post-1")).await?;
            info!(likes, "Post liked");
            Ok::<_, Box<dyn Error>>(())
        }
        .instrument(info_span!("community"))
        .await?;
    }

    // Give the kitchen time to move the new orders along.
    tokio::time::sleep(system.config.kitchen_step_delay * 2 + std::time::Duration::from_millis(200)).await;

    let now = Utc::now();
    let orders = system.queue_client.orders().await?;
    let board: Vec<_> = queue_view(&orders, StatusFilter::All)
        .into_iter()
        .map(|order| {
            json!({
                "queueNumber": order.queue_number,
                "id": order.id,
                "status": order.status,
                "customerStatus": order.status.customer_label(),
                "table": order.table_number,
                "total": order.total_price,
                "placed": elapsed_label(order.timestamp, now),
                "action": staff_action(order.status).map(|a| a.label),
                "items": order.items.iter().map(|i| format!("{} x{}", i.menu_item.name, i.quantity)).collect::<Vec<_>>(),
            })
        })
        .collect();
    let reviews = system.community_client.reviews().await?;
    let dashboard = json!({
        "counts": StatusCounts::tally(&orders),
        "reviews": ReviewSummary::tally(&reviews),
        "orders": board,
        "tracked": [manual_order.to_string(), game_order.to_string()],
    });
    println!("{}", serde_json::to_string_pretty(&dashboard)?);

    system.shutdown().await?;
    Ok(())
}
