//! # Community Client

use crate::community_actor::{Community, CommunityCommand, CommunityError};
use crate::framework::{ActorClient, ActorHandle};
use crate::model::{Comment, CommunityPost, PostId, Review};
use async_trait::async_trait;
use tracing::{debug, instrument};

#[derive(Clone)]
pub struct CommunityClient {
    handle: ActorHandle<Community>,
}

impl CommunityClient {
    pub fn new(handle: ActorHandle<Community>) -> Self {
        Self { handle }
    }

    #[instrument(skip(self, post), fields(id = %post.id))]
    pub async fn add_post(&self, post: CommunityPost) -> Result<(), CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::AddPost { post, respond_to })
            .await?
    }

    /// Adds one like and returns the new total.
    #[instrument(skip(self))]
    pub async fn like_post(&self, id: PostId) -> Result<u32, CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::LikePost { id, respond_to })
            .await?
    }

    #[instrument(skip(self, comment))]
    pub async fn add_comment(&self, post_id: PostId, comment: Comment) -> Result<usize, CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::AddComment {
            post_id,
            comment,
            respond_to,
        })
        .await?
    }

    #[instrument(skip(self))]
    pub async fn posts(&self) -> Result<Vec<CommunityPost>, CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::Posts { respond_to })
            .await
    }

    #[instrument(skip(self, review), fields(id = %review.id, rating = review.rating))]
    pub async fn add_review(&self, review: Review) -> Result<(), CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::AddReview { review, respond_to })
            .await?
    }

    #[instrument(skip(self))]
    pub async fn reviews(&self) -> Result<Vec<Review>, CommunityError> {
        debug!("Sending request");
        self.request(move |respond_to| CommunityCommand::Reviews { respond_to })
            .await
    }
}

#[async_trait]
impl ActorClient<Community> for CommunityClient {
    type Error = CommunityError;

    fn handle(&self) -> &ActorHandle<Community> {
        &self.handle
    }
}
