//! Error types for the community actor.

use crate::framework::FrameworkError;
use crate::model::{PostId, ReviewId};
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CommunityError {
    #[error("Post not found: {0}")]
    PostNotFound(PostId),

    #[error("Post already exists: {0}")]
    DuplicatePost(PostId),

    #[error("Review already exists: {0}")]
    DuplicateReview(ReviewId),

    /// Ratings run from one to five stars.
    #[error("Rating must be 1 to 5 stars, got {0}")]
    InvalidRating(u8),

    #[error("Comment text is empty")]
    EmptyComment,

    /// An error occurred while communicating with the actor system.
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl From<FrameworkError> for CommunityError {
    fn from(e: FrameworkError) -> Self {
        CommunityError::ActorCommunicationError(e.to_string())
    }
}
