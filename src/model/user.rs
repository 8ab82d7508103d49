use crate::model::MenuItemId;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt::Display;

/// Type-safe identifier for users, assigned sequentially by the wallet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserId(pub u32);

impl From<u32> for UserId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

impl Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "user-{}", self.0)
    }
}

/// Why coins moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinReason {
    CookingGame,
    DailyCheckIn,
    Review,
    MemberBonus,
    SkipQueue,
}

impl CoinReason {
    /// The standard reward for earning reasons; `None` for spending.
    pub fn reward(self) -> Option<u64> {
        match self {
            CoinReason::CookingGame => Some(10),
            CoinReason::DailyCheckIn => Some(20),
            CoinReason::Review => Some(15),
            CoinReason::MemberBonus => Some(30),
            CoinReason::SkipQueue => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoinMovement {
    Earned(u64),
    Spent(u64),
}

/// One ledger line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoinTransaction {
    pub movement: CoinMovement,
    pub reason: CoinReason,
    pub balance_after: u64,
    pub at: DateTime<Utc>,
}

/// A customer and their coin wallet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub coins: u64,
    pub member_since: NaiveDate,
    pub favorite_items: BTreeSet<MenuItemId>,
    pub total_orders: u32,
    pub ledger: Vec<CoinTransaction>,
}

/// Payload for registering a user.
#[derive(Debug, Clone)]
pub struct UserCreate {
    pub name: String,
    pub coins: u64,
    pub member_since: NaiveDate,
    pub favorite_items: Vec<MenuItemId>,
    pub total_orders: u32,
}

impl User {
    pub fn from_create(id: UserId, params: UserCreate) -> Self {
        Self {
            id,
            name: params.name,
            coins: params.coins,
            member_since: params.member_since,
            favorite_items: params.favorite_items.into_iter().collect(),
            total_orders: params.total_orders,
            ledger: Vec::new(),
        }
    }
}
