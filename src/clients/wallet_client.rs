//! # Wallet Client

use crate::framework::{ActorClient, ActorHandle};
use crate::model::{CoinReason, MenuItemId, User, UserCreate, UserId};
use crate::wallet_actor::{Wallet, WalletCommand, WalletError};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct WalletClient {
    handle: ActorHandle<Wallet>,
}

impl WalletClient {
    pub fn new(handle: ActorHandle<Wallet>) -> Self {
        Self { handle }
    }

    #[instrument(skip(self, params), fields(name = %params.name))]
    pub async fn register(&self, params: UserCreate) -> Result<UserId, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::Register { params, respond_to })
            .await
    }

    /// The user, or `UserNotFound`.
    #[instrument(skip(self))]
    pub async fn get(&self, id: UserId) -> Result<User, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::Get { id, respond_to })
            .await?
            .ok_or(WalletError::UserNotFound(id))
    }

    /// Deducts `amount` and returns the new balance.
    #[instrument(skip(self))]
    pub async fn spend_coins(
        &self,
        id: UserId,
        amount: u64,
        reason: CoinReason,
    ) -> Result<u64, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::Spend {
            id,
            amount,
            reason,
            respond_to,
        })
        .await?
    }

    #[instrument(skip(self))]
    pub async fn award_coins(
        &self,
        id: UserId,
        amount: u64,
        reason: CoinReason,
    ) -> Result<u64, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::Award {
            id,
            amount,
            reason,
            respond_to,
        })
        .await?
    }

    /// Awards the standard reward for an earning activity. Skip payments carry
    /// no reward, so they award nothing and return the current balance.
    #[instrument(skip(self))]
    pub async fn earn(&self, id: UserId, reason: CoinReason) -> Result<u64, WalletError> {
        match reason.reward() {
            Some(amount) => self.award_coins(id, amount, reason).await,
            None => self.get(id).await.map(|user| user.coins),
        }
    }

    #[instrument(skip(self))]
    pub async fn toggle_favorite(&self, id: UserId, item: MenuItemId) -> Result<bool, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::ToggleFavorite {
            id,
            item,
            respond_to,
        })
        .await?
    }

    /// Bumps the user's lifetime order count.
    #[instrument(skip(self))]
    pub async fn record_order(&self, id: UserId) -> Result<u32, WalletError> {
        debug!("Sending request");
        self.request(move |respond_to| WalletCommand::RecordOrder { id, respond_to })
            .await?
    }
}

#[async_trait]
impl ActorClient<Wallet> for WalletClient {
    type Error = WalletError;

    fn handle(&self) -> &ActorHandle<Wallet> {
        &self.handle
    }
}
