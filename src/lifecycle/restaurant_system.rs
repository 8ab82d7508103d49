use crate::catalog::{Catalog, CatalogError};
use crate::clients::{CommunityClient, OrderQueueClient, WalletClient};
use crate::community_actor::{self, Community, CommunityError};
use crate::config::RestaurantConfig;
use crate::framework::ActorState;
use crate::kitchen::KitchenSimulator;
use crate::model::{CoinReason, Review, UserId};
use crate::queue_actor::{self, OrderError, OrderQueue, QueueActor};
use crate::seed;
use crate::wallet_actor::{self, Wallet, WalletError};
use chrono::Utc;
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

#[derive(Debug, Error)]
pub enum SystemError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Order(#[from] OrderError),

    #[error(transparent)]
    Wallet(#[from] WalletError),

    #[error(transparent)]
    Community(#[from] CommunityError),

    #[error("{actor} task failed: {reason}")]
    ActorTask { actor: &'static str, reason: String },
}

/// The running restaurant back end: the three actors, their clients and the
/// shared catalog.
///
/// # Example
///
/// ```ignore
/// let mut system = RestaurantSystem::new(RestaurantConfig::from_env()?)?;
/// system.start_kitchen().await?;
///
/// let number = system.queue_client.add_order(order).await?;
///
/// system.shutdown().await?;
/// ```
pub struct RestaurantSystem {
    pub queue_client: OrderQueueClient,
    pub wallet_client: WalletClient,
    pub community_client: CommunityClient,
    pub catalog: Arc<Catalog>,
    pub config: RestaurantConfig,
    demo_user: Option<UserId>,
    kitchen: Option<KitchenSimulator>,
    queue_task: JoinHandle<QueueActor>,
    wallet_task: JoinHandle<Wallet>,
    community_task: JoinHandle<Community>,
}

impl RestaurantSystem {
    /// Loads the catalog, seeds the stores if configured, and spawns every actor.
    ///
    /// Must be called inside a Tokio runtime.
    pub fn new(config: RestaurantConfig) -> Result<Self, SystemError> {
        let catalog = Arc::new(Catalog::builtin()?);

        let now = Utc::now();
        let mut wallet = Wallet::new();
        let (queue, community, demo_user) = if config.seed_demo_data {
            let member = wallet.register(seed::starter_user());
            let orders = seed::starter_orders(&catalog, Some(member), now)?;
            let community = Community::with_content(
                seed::starter_posts(&catalog, now)?,
                seed::starter_reviews(now),
            );
            (
                OrderQueue::with_orders(orders, config.starting_queue_number),
                community,
                Some(member),
            )
        } else {
            (
                OrderQueue::new(config.starting_queue_number),
                Community::new(),
                None,
            )
        };

        let next_queue_number = queue.next_queue_number();

        // 1. Create actors (no dependencies yet)
        let (wallet_actor, wallet_client) = wallet_actor::new(wallet, config.mailbox_capacity);
        let (queue_actor, queue_client) = queue_actor::new(queue, &config);
        let (community_actor, community_client) =
            community_actor::new(community, config.mailbox_capacity);

        // 2. Start them, injecting the wallet into the queue
        let wallet_task = tokio::spawn(wallet_actor.run(()));
        let community_task = tokio::spawn(community_actor.run(()));
        let queue_task = tokio::spawn(queue_actor.run(wallet_client.clone()));

        info!(
            seeded = config.seed_demo_data,
            next_queue_number,
            "Restaurant system started"
        );

        Ok(Self {
            queue_client,
            wallet_client,
            community_client,
            catalog,
            config,
            demo_user,
            kitchen: None,
            queue_task,
            wallet_task,
            community_task,
        })
    }

    /// The seeded member, when demo data was loaded.
    pub fn demo_user(&self) -> Option<UserId> {
        self.demo_user
    }

    /// Starts the kitchen simulator with the configured step delay. Does
    /// nothing if it is already running.
    pub async fn start_kitchen(&mut self) -> Result<(), SystemError> {
        if self.kitchen.is_none() {
            let kitchen =
                KitchenSimulator::start(self.queue_client.clone(), self.config.kitchen_step_delay)
                    .await?;
            self.kitchen = Some(kitchen);
        }
        Ok(())
    }

    /// Stores a review and pays the review reward when the author holds a
    /// wallet. Returns the author's new balance, or `None` for guests.
    ///
    /// A rejected review earns nothing.
    pub async fn submit_review(&self, review: Review) -> Result<Option<u64>, SystemError> {
        let author = review.user_id;
        let member = match self.wallet_client.get(author).await {
            Ok(_) => true,
            Err(WalletError::UserNotFound(_)) => false,
            Err(e) => return Err(e.into()),
        };

        self.community_client.add_review(review).await?;
        if !member {
            return Ok(None);
        }
        let balance = self.wallet_client.earn(author, CoinReason::Review).await?;
        info!(%author, balance, "Review rewarded");
        Ok(Some(balance))
    }

    pub fn kitchen_running(&self) -> bool {
        self.kitchen.as_ref().is_some_and(KitchenSimulator::is_running)
    }

    /// Stops the kitchen, closes every mailbox and waits for every actor to finish.
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down system...");

        if let Some(kitchen) = self.kitchen {
            kitchen.shutdown().await;
        }

        // The queue holds a wallet client as context, so it has to stop first.
        drop(self.queue_client);
        let queue = self.queue_task.await.map_err(|e| {
            error!(error = %e, "Order queue task failed");
            SystemError::ActorTask {
                actor: "OrderQueue",
                reason: e.to_string(),
            }
        })?;

        drop(self.wallet_client);
        let wallet = self.wallet_task.await.map_err(|e| {
            error!(error = %e, "Wallet task failed");
            SystemError::ActorTask {
                actor: "Wallet",
                reason: e.to_string(),
            }
        })?;

        drop(self.community_client);
        let community = self.community_task.await.map_err(|e| {
            error!(error = %e, "Community task failed");
            SystemError::ActorTask {
                actor: "Community",
                reason: e.to_string(),
            }
        })?;

        info!(
            orders = queue.size(),
            users = wallet.size(),
            community = community.size(),
            "System shutdown complete"
        );
        Ok(())
    }
}
