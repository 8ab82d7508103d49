use chrono::Utc;
use restaurant_queue::clients::WalletClient;
use restaurant_queue::config::RestaurantConfig;
use restaurant_queue::framework::mock::MockActor;
use restaurant_queue::model::{
    CoinReason, MenuItem, MenuItemId, NewOrder, OrderId, OrderItem, OrderStatus, OrderType, UserId,
};
use restaurant_queue::queue_actor::{self, OrderError, OrderQueue, QueueEvent};
use restaurant_queue::wallet_actor::{Wallet, WalletCommand, WalletError};

fn new_order(id: &str) -> NewOrder {
    let dish = MenuItem::custom(MenuItemId::from("tom-yum"), "Tom Yum Goong", 110, "");
    NewOrder {
        id: OrderId::from(id),
        items: vec![OrderItem::new(dish, 1)],
        total_price: 110,
        status: OrderStatus::Pending,
        timestamp: Utc::now(),
        table_number: Some(2),
        order_type: OrderType::Manual,
        user_id: Some(UserId(1)),
    }
}

/// Real queue actor with a scripted wallet: the charge succeeds, so the swap happens.
#[tokio::test]
async fn test_paid_skip_charges_then_swaps() {
    let wallet = MockActor::<Wallet>::new();
    wallet.expect(|command| match command {
        WalletCommand::Spend {
            id,
            amount,
            reason,
            respond_to,
        } => {
            assert_eq!(id, UserId(1));
            assert_eq!(amount, 50);
            assert_eq!(reason, CoinReason::SkipQueue);
            let _ = respond_to.send(Ok(100));
        }
        other => panic!("unexpected wallet command {other:?}"),
    });

    let config = RestaurantConfig::default();
    let (actor, client) = queue_actor::new(OrderQueue::new(45), &config);
    let actor_handle = tokio::spawn(actor.run(WalletClient::new(wallet.handle())));

    client.add_order(new_order("a")).await.unwrap();
    client.add_order(new_order("b")).await.unwrap();
    let mut events = client.subscribe().await.unwrap();

    let paid = client.paid_skip(OrderId::from("b"), UserId(1)).await.unwrap();
    assert_eq!(paid.remaining_balance, 100);
    assert_eq!(paid.outcome.queue_number, 45);
    assert_eq!(paid.outcome.swapped_with, Some((OrderId::from("a"), 46)));

    let skipper = client.get(OrderId::from("b")).await.unwrap().unwrap();
    assert_eq!(skipper.status, OrderStatus::Cooking);
    assert_eq!(
        events.recv().await.unwrap(),
        QueueEvent::QueueSkipped {
            id: OrderId::from("b"),
            queue_number: 45,
            swapped_with: Some((OrderId::from("a"), 46)),
        }
    );

    wallet.verify();
    drop(client);
    let state = actor_handle.await.unwrap();
    assert_eq!(state.queue().len(), 2);
}

/// The wallet refuses the charge: the queue must be untouched.
#[tokio::test]
async fn test_refused_payment_leaves_queue_alone() {
    let wallet = MockActor::<Wallet>::new();
    wallet.expect(|command| match command {
        WalletCommand::Spend { respond_to, .. } => {
            let _ = respond_to.send(Err(WalletError::InsufficientCoins {
                required: 50,
                available: 20,
            }));
        }
        other => panic!("unexpected wallet command {other:?}"),
    });

    let config = RestaurantConfig::default();
    let (actor, client) = queue_actor::new(OrderQueue::new(45), &config);
    let actor_handle = tokio::spawn(actor.run(WalletClient::new(wallet.handle())));

    client.add_order(new_order("a")).await.unwrap();
    client.add_order(new_order("b")).await.unwrap();
    let before = client.orders().await.unwrap();

    let result = client.paid_skip(OrderId::from("b"), UserId(1)).await;
    assert_eq!(
        result.unwrap_err(),
        OrderError::Payment(WalletError::InsufficientCoins {
            required: 50,
            available: 20
        })
    );
    assert_eq!(client.orders().await.unwrap(), before);

    wallet.verify();
    drop(client);
    actor_handle.await.unwrap();
}

/// Orders already cooking are rejected before the wallet is ever asked.
#[tokio::test]
async fn test_paid_skip_not_offered_once_cooking() {
    let wallet = MockActor::<Wallet>::new();

    let config = RestaurantConfig::default();
    let (actor, client) = queue_actor::new(OrderQueue::new(45), &config);
    let actor_handle = tokio::spawn(actor.run(WalletClient::new(wallet.handle())));

    client.add_order(new_order("a")).await.unwrap();
    client
        .update_status(OrderId::from("a"), OrderStatus::Cooking)
        .await
        .unwrap();

    assert_eq!(
        client.paid_skip(OrderId::from("a"), UserId(1)).await.unwrap_err(),
        OrderError::NotSkippable {
            id: OrderId::from("a"),
            status: OrderStatus::Cooking
        }
    );
    assert_eq!(
        client.paid_skip(OrderId::from("ghost"), UserId(1)).await.unwrap_err(),
        OrderError::NotFound(OrderId::from("ghost"))
    );

    wallet.verify();
    drop(client);
    actor_handle.await.unwrap();
}

/// Mutations are announced in order, rejected ones are not announced at all.
#[tokio::test]
async fn test_events_follow_mutations() {
    let wallet = MockActor::<Wallet>::new();
    let config = RestaurantConfig::default();
    let (actor, client) = queue_actor::new(OrderQueue::new(45), &config);
    let actor_handle = tokio::spawn(actor.run(WalletClient::new(wallet.handle())));

    let mut events = client.subscribe().await.unwrap();

    assert_eq!(client.add_order(new_order("a")).await.unwrap(), 45);
    assert!(client.add_order(new_order("a")).await.is_err());
    client
        .update_status(OrderId::from("a"), OrderStatus::Cooking)
        .await
        .unwrap();
    assert!(client
        .update_status(OrderId::from("a"), OrderStatus::Completed)
        .await
        .is_err());
    client.skip_queue(OrderId::from("a")).await.unwrap();

    match events.recv().await.unwrap() {
        QueueEvent::OrderAdded { order } => assert_eq!(order.queue_number, 45),
        other => panic!("expected OrderAdded, got {other:?}"),
    }
    assert_eq!(
        events.recv().await.unwrap(),
        QueueEvent::StatusChanged {
            id: OrderId::from("a"),
            from: OrderStatus::Pending,
            to: OrderStatus::Cooking,
        }
    );
    assert_eq!(
        events.recv().await.unwrap(),
        QueueEvent::QueueSkipped {
            id: OrderId::from("a"),
            queue_number: 45,
            swapped_with: None,
        }
    );
    assert_eq!(client.next_queue_number().await.unwrap(), 46);

    drop(client);
    actor_handle.await.unwrap();
    assert!(events.recv().await.is_err(), "channel closes with the actor");
}
