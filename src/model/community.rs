use crate::model::{Category, OrderId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier of a community post, e.g. `post-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostId(pub String);

impl From<&str> for PostId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for PostId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Identifier of a review, e.g. `review-1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReviewId(pub String);

impl From<&str> for ReviewId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl Display for ReviewId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: String,
    pub user_id: UserId,
    pub user_name: String,
    pub text: String,
    pub timestamp: DateTime<Utc>,
}

/// A photo shared on the mobile app's community feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommunityPost {
    pub id: PostId,
    pub user_id: UserId,
    pub user_name: String,
    pub image: String,
    pub caption: String,
    pub likes: u32,
    pub comments: Vec<Comment>,
    pub timestamp: DateTime<Utc>,
    pub menu_type: Category,
}

/// A star rating left from the QR queue screen once an order is ready.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Review {
    pub id: ReviewId,
    pub order_id: OrderId,
    pub user_id: UserId,
    pub user_name: String,
    /// One to [`Review::MAX_RATING`] stars.
    pub rating: u8,
    pub comment: String,
    pub timestamp: DateTime<Utc>,
    /// Names of the dishes reviewed.
    pub menu_items: Vec<String>,
}

impl Review {
    pub const MAX_RATING: u8 = 5;
}
