use crate::community_actor::{CommunityCommand, CommunityError};
use crate::framework::ActorState;
use crate::model::{Comment, CommunityPost, PostId, Review};
use async_trait::async_trait;
use tracing::{debug, info, warn};

/// Community posts and reviews, newest first.
#[derive(Debug, Default)]
pub struct Community {
    posts: Vec<CommunityPost>,
    reviews: Vec<Review>,
}

impl Community {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store pre-filled with starter content. Both lists are expected
    /// newest first.
    pub fn with_content(posts: Vec<CommunityPost>, reviews: Vec<Review>) -> Self {
        Self { posts, reviews }
    }

    pub fn posts(&self) -> &[CommunityPost] {
        &self.posts
    }

    pub fn reviews(&self) -> &[Review] {
        &self.reviews
    }

    fn post_mut(&mut self, id: &PostId) -> Result<&mut CommunityPost, CommunityError> {
        self.posts
            .iter_mut()
            .find(|post| &post.id == id)
            .ok_or_else(|| CommunityError::PostNotFound(id.clone()))
    }

    /// Puts the post at the top of the feed.
    pub fn add_post(&mut self, post: CommunityPost) -> Result<(), CommunityError> {
        if self.posts.iter().any(|existing| existing.id == post.id) {
            return Err(CommunityError::DuplicatePost(post.id));
        }
        self.posts.insert(0, post);
        Ok(())
    }

    pub fn like_post(&mut self, id: &PostId) -> Result<u32, CommunityError> {
        let post = self.post_mut(id)?;
        post.likes = post.likes.saturating_add(1);
        Ok(post.likes)
    }

    /// Appends a comment under the post. Comments read oldest first.
    pub fn add_comment(&mut self, post_id: &PostId, comment: Comment) -> Result<usize, CommunityError> {
        if comment.text.trim().is_empty() {
            return Err(CommunityError::EmptyComment);
        }
        let post = self.post_mut(post_id)?;
        post.comments.push(comment);
        Ok(post.comments.len())
    }

    pub fn add_review(&mut self, review: Review) -> Result<(), CommunityError> {
        if !(1..=Review::MAX_RATING).contains(&review.rating) {
            return Err(CommunityError::InvalidRating(review.rating));
        }
        if self.reviews.iter().any(|existing| existing.id == review.id) {
            return Err(CommunityError::DuplicateReview(review.id));
        }
        self.reviews.insert(0, review);
        Ok(())
    }
}

#[async_trait]
impl ActorState for Community {
    type Command = CommunityCommand;
    type Context = ();
    const NAME: &'static str = "Community";

    async fn handle(&mut self, command: CommunityCommand, _ctx: &()) {
        match command {
            CommunityCommand::AddPost { post, respond_to } => {
                let id = post.id.clone();
                let result = self.add_post(post);
                match &result {
                    Ok(()) => info!(%id, posts = self.posts.len(), "Post added"),
                    Err(e) => warn!(%id, error = %e, "Post rejected"),
                }
                let _ = respond_to.send(result);
            }
            CommunityCommand::LikePost { id, respond_to } => {
                let result = self.like_post(&id);
                debug!(%id, ?result, "LikePost");
                let _ = respond_to.send(result);
            }
            CommunityCommand::AddComment {
                post_id,
                comment,
                respond_to,
            } => {
                let result = self.add_comment(&post_id, comment);
                match &result {
                    Ok(count) => info!(%post_id, comments = count, "Comment added"),
                    Err(e) => warn!(%post_id, error = %e, "Comment rejected"),
                }
                let _ = respond_to.send(result);
            }
            CommunityCommand::Posts { respond_to } => {
                let _ = respond_to.send(self.posts.clone());
            }
            CommunityCommand::AddReview { review, respond_to } => {
                let id = review.id.clone();
                let rating = review.rating;
                let result = self.add_review(review);
                match &result {
                    Ok(()) => info!(%id, rating, reviews = self.reviews.len(), "Review added"),
                    Err(e) => warn!(%id, error = %e, "Review rejected"),
                }
                let _ = respond_to.send(result);
            }
            CommunityCommand::Reviews { respond_to } => {
                let _ = respond_to.send(self.reviews.clone());
            }
        }
    }

    fn size(&self) -> usize {
        self.posts.len() + self.reviews.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Category, OrderId, ReviewId, UserId};
    use chrono::Utc;

    fn post(id: &str) -> CommunityPost {
        CommunityPost {
            id: PostId::from(id),
            user_id: UserId(2),
            user_name: "Narisa".into(),
            image: "pad-thai.jpg".into(),
            caption: "Best Pad Thai in town!".into(),
            likes: 0,
            comments: Vec::new(),
            timestamp: Utc::now(),
            menu_type: Category::Main,
        }
    }

    fn comment(text: &str) -> Comment {
        Comment {
            id: "comment-1".into(),
            user_id: UserId(1),
            user_name: "Somchai".into(),
            text: text.into(),
            timestamp: Utc::now(),
        }
    }

    fn review(id: &str, rating: u8) -> Review {
        Review {
            id: ReviewId::from(id),
            order_id: OrderId::from("order-3"),
            user_id: UserId(1),
            user_name: "Somchai".into(),
            rating,
            comment: String::new(),
            timestamp: Utc::now(),
            menu_items: vec!["Green Curry".into()],
        }
    }

    #[test]
    fn test_feed_is_newest_first() {
        let mut community = Community::new();
        community.add_post(post("post-1")).unwrap();
        community.add_post(post("post-2")).unwrap();

        let ids: Vec<&str> = community.posts().iter().map(|p| p.id.0.as_str()).collect();
        assert_eq!(ids, vec!["post-2", "post-1"]);
        assert_eq!(
            community.add_post(post("post-1")),
            Err(CommunityError::DuplicatePost(PostId::from("post-1")))
        );
        assert_eq!(community.posts().len(), 2);
    }

    #[test]
    fn test_likes_and_comments() {
        let mut community = Community::with_content(vec![post("post-1")], Vec::new());
        let id = PostId::from("post-1");

        assert_eq!(community.like_post(&id), Ok(1));
        assert_eq!(community.like_post(&id), Ok(2));
        assert_eq!(community.add_comment(&id, comment("Looks amazing!")), Ok(1));
        assert_eq!(
            community.add_comment(&id, comment("   ")),
            Err(CommunityError::EmptyComment)
        );
        assert_eq!(community.posts()[0].comments.len(), 1);
    }

    #[test]
    fn test_unknown_post() {
        let mut community = Community::new();
        let ghost = PostId::from("post-9");
        assert_eq!(
            community.like_post(&ghost),
            Err(CommunityError::PostNotFound(ghost.clone()))
        );
        assert_eq!(
            community.add_comment(&ghost, comment("hello")),
            Err(CommunityError::PostNotFound(ghost))
        );
    }

    #[test]
    fn test_review_rating_bounds() {
        let mut community = Community::new();
        assert_eq!(
            community.add_review(review("review-1", 0)),
            Err(CommunityError::InvalidRating(0))
        );
        assert_eq!(
            community.add_review(review("review-1", 6)),
            Err(CommunityError::InvalidRating(6))
        );
        assert!(community.reviews().is_empty());

        community.add_review(review("review-1", 5)).unwrap();
        community.add_review(review("review-2", 1)).unwrap();
        assert_eq!(community.reviews()[0].id, ReviewId::from("review-2"));
        assert_eq!(
            community.add_review(review("review-1", 4)),
            Err(CommunityError::DuplicateReview(ReviewId::from("review-1")))
        );
    }
}
