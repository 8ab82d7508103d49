use crate::community_actor::CommunityError;
use crate::framework::Reply;
use crate::model::{Comment, CommunityPost, PostId, Review};

/// Messages understood by the community actor.
#[derive(Debug)]
pub enum CommunityCommand {
    AddPost {
        post: CommunityPost,
        respond_to: Reply<Result<(), CommunityError>>,
    },
    /// Answers with the new like count.
    LikePost {
        id: PostId,
        respond_to: Reply<Result<u32, CommunityError>>,
    },
    /// Answers with the post's new comment count.
    AddComment {
        post_id: PostId,
        comment: Comment,
        respond_to: Reply<Result<usize, CommunityError>>,
    },
    /// The feed, newest first.
    Posts {
        respond_to: Reply<Vec<CommunityPost>>,
    },
    AddReview {
        review: Review,
        respond_to: Reply<Result<(), CommunityError>>,
    },
    /// All reviews, newest first.
    Reviews {
        respond_to: Reply<Vec<Review>>,
    },
}
