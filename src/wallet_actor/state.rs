use crate::framework::ActorState;
use crate::model::{
    CoinMovement, CoinReason, CoinTransaction, MenuItemId, User, UserCreate, UserId,
};
use crate::wallet_actor::{WalletCommand, WalletError};
use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// Users and their coin balances, keyed by id.
///
/// Balances are unsigned and every deduction is checked first, so a balance
/// can never go below zero.
#[derive(Debug, Default)]
pub struct Wallet {
    users: HashMap<UserId, User>,
    next_id: u32,
}

impl Wallet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a user and assigns the next sequential id, starting at `user-1`.
    pub fn register(&mut self, params: UserCreate) -> UserId {
        self.next_id += 1;
        let id = UserId(self.next_id);
        self.users.insert(id, User::from_create(id, params));
        id
    }

    pub fn get(&self, id: UserId) -> Option<&User> {
        self.users.get(&id)
    }

    fn user_mut(&mut self, id: UserId) -> Result<&mut User, WalletError> {
        self.users.get_mut(&id).ok_or(WalletError::UserNotFound(id))
    }

    pub fn spend(&mut self, id: UserId, amount: u64, reason: CoinReason) -> Result<u64, WalletError> {
        let user = self.user_mut(id)?;
        let balance = user
            .coins
            .checked_sub(amount)
            .ok_or(WalletError::InsufficientCoins {
                required: amount,
                available: user.coins,
            })?;
        user.coins = balance;
        record(user, CoinMovement::Spent(amount), reason);
        Ok(balance)
    }

    pub fn award(&mut self, id: UserId, amount: u64, reason: CoinReason) -> Result<u64, WalletError> {
        let user = self.user_mut(id)?;
        let balance = user
            .coins
            .checked_add(amount)
            .ok_or(WalletError::BalanceOverflow(id))?;
        user.coins = balance;
        record(user, CoinMovement::Earned(amount), reason);
        Ok(balance)
    }

    /// Returns whether the item is a favourite after the toggle.
    pub fn toggle_favorite(&mut self, id: UserId, item: MenuItemId) -> Result<bool, WalletError> {
        let user = self.user_mut(id)?;
        if user.favorite_items.remove(&item) {
            Ok(false)
        } else {
            user.favorite_items.insert(item);
            Ok(true)
        }
    }

    pub fn record_order(&mut self, id: UserId) -> Result<u32, WalletError> {
        let user = self.user_mut(id)?;
        user.total_orders = user.total_orders.saturating_add(1);
        Ok(user.total_orders)
    }
}

fn record(user: &mut User, movement: CoinMovement, reason: CoinReason) {
    user.ledger.push(CoinTransaction {
        movement,
        reason,
        balance_after: user.coins,
        at: Utc::now(),
    });
}

#[async_trait]
impl ActorState for Wallet {
    type Command = WalletCommand;
    type Context = ();
    const NAME: &'static str = "Wallet";

    async fn handle(&mut self, command: WalletCommand, _ctx: &()) {
        match command {
            WalletCommand::Register { params, respond_to } => {
                let id = self.register(params);
                info!(%id, size = self.users.len(), "Registered");
                let _ = respond_to.send(id);
            }
            WalletCommand::Get { id, respond_to } => {
                let user = self.get(id).cloned();
                debug!(%id, found = user.is_some(), "Get");
                let _ = respond_to.send(user);
            }
            WalletCommand::Spend {
                id,
                amount,
                reason,
                respond_to,
            } => {
                let result = self.spend(id, amount, reason);
                match &result {
                    Ok(balance) => info!(%id, amount, ?reason, balance, "Spent"),
                    Err(e) => warn!(%id, amount, error = %e, "Spend rejected"),
                }
                let _ = respond_to.send(result);
            }
            WalletCommand::Award {
                id,
                amount,
                reason,
                respond_to,
            } => {
                let result = self.award(id, amount, reason);
                match &result {
                    Ok(balance) => info!(%id, amount, ?reason, balance, "Awarded"),
                    Err(e) => warn!(%id, amount, error = %e, "Award rejected"),
                }
                let _ = respond_to.send(result);
            }
            WalletCommand::ToggleFavorite {
                id,
                item,
                respond_to,
            } => {
                let result = self.toggle_favorite(id, item);
                debug!(%id, ?result, "ToggleFavorite");
                let _ = respond_to.send(result);
            }
            WalletCommand::RecordOrder { id, respond_to } => {
                let result = self.record_order(id);
                debug!(%id, ?result, "RecordOrder");
                let _ = respond_to.send(result);
            }
        }
    }

    fn size(&self) -> usize {
        self.users.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn member(coins: u64) -> UserCreate {
        UserCreate {
            name: "Somchai".into(),
            coins,
            member_since: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
            favorite_items: vec![MenuItemId::from("pad-thai")],
            total_orders: 0,
        }
    }

    #[test]
    fn test_sequential_ids() {
        let mut wallet = Wallet::new();
        assert_eq!(wallet.register(member(0)), UserId(1));
        assert_eq!(wallet.register(member(0)), UserId(2));
        assert_eq!(UserId(2).to_string(), "user-2");
    }

    #[test]
    fn test_spend_never_goes_negative() {
        let mut wallet = Wallet::new();
        let id = wallet.register(member(60));

        assert_eq!(wallet.spend(id, 50, CoinReason::SkipQueue), Ok(10));
        assert_eq!(
            wallet.spend(id, 50, CoinReason::SkipQueue),
            Err(WalletError::InsufficientCoins {
                required: 50,
                available: 10
            })
        );

        let user = wallet.get(id).unwrap();
        assert_eq!(user.coins, 10);
        assert_eq!(user.ledger.len(), 1);
        assert_eq!(user.ledger[0].movement, CoinMovement::Spent(50));
        assert_eq!(user.ledger[0].balance_after, 10);
    }

    #[test]
    fn test_award_checks_overflow() {
        let mut wallet = Wallet::new();
        let id = wallet.register(member(u64::MAX - 5));
        assert_eq!(
            wallet.award(id, 10, CoinReason::Review),
            Err(WalletError::BalanceOverflow(id))
        );
        assert_eq!(wallet.award(id, 5, CoinReason::Review), Ok(u64::MAX));
    }

    #[test]
    fn test_unknown_user() {
        let mut wallet = Wallet::new();
        let ghost = UserId(9);
        assert_eq!(
            wallet.spend(ghost, 1, CoinReason::SkipQueue),
            Err(WalletError::UserNotFound(ghost))
        );
        assert_eq!(wallet.record_order(ghost), Err(WalletError::UserNotFound(ghost)));
    }

    #[test]
    fn test_favorites_toggle_and_order_count() {
        let mut wallet = Wallet::new();
        let id = wallet.register(member(0));

        assert_eq!(wallet.toggle_favorite(id, MenuItemId::from("pad-thai")), Ok(false));
        assert_eq!(wallet.toggle_favorite(id, MenuItemId::from("tom-yum")), Ok(true));
        assert_eq!(wallet.record_order(id), Ok(1));

        let user = wallet.get(id).unwrap();
        assert!(user.favorite_items.contains(&MenuItemId::from("tom-yum")));
        assert!(!user.favorite_items.contains(&MenuItemId::from("pad-thai")));
    }
}
