use crate::framework::Reply;
use crate::model::{CoinReason, MenuItemId, User, UserCreate, UserId};
use crate::wallet_actor::WalletError;

/// Messages understood by the wallet actor.
#[derive(Debug)]
pub enum WalletCommand {
    Register {
        params: UserCreate,
        respond_to: Reply<UserId>,
    },
    Get {
        id: UserId,
        respond_to: Reply<Option<User>>,
    },
    /// Deducts coins. Answers with the new balance.
    Spend {
        id: UserId,
        amount: u64,
        reason: CoinReason,
        respond_to: Reply<Result<u64, WalletError>>,
    },
    /// Adds coins. Answers with the new balance.
    Award {
        id: UserId,
        amount: u64,
        reason: CoinReason,
        respond_to: Reply<Result<u64, WalletError>>,
    },
    ToggleFavorite {
        id: UserId,
        item: MenuItemId,
        respond_to: Reply<Result<bool, WalletError>>,
    },
    RecordOrder {
        id: UserId,
        respond_to: Reply<Result<u32, WalletError>>,
    },
}
