use super::dto::{LikeRequest, LikeResponse};
use crate::application::shared::dto::UserResponse;
use crate::domain::{
    like::{entity::LikeRemoval, repository::LikeRepository},
    post::repository::PostRepository,
    shared::errors::DomainError,
    user::repository::UserRepository,
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct LikeService {
    likes: Arc<dyn LikeRepository>,
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl LikeService {
    pub fn new(
        likes: Arc<dyn LikeRepository>,
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            likes,
            users,
            posts,
        }
    }

    /// Likes a post once per user; a second like from the same user is a conflict.
    #[instrument(skip(self))]
    pub async fn add_like(&self, request: LikeRequest) -> Result<LikeResponse, DomainError> {
        let user = self.users.find_by_id(request.user_id).await?.ok_or_else(|| {
            DomainError::NotFound(format!("User with id = {} not found", request.user_id))
        })?;
        self.ensure_post(request.post_id).await?;

        if self
            .likes
            .exists_by_post_and_user(request.post_id, user.id)
            .await?
        {
            warn!(
                "User {} already liked post {}",
                request.user_id, request.post_id
            );
            return Err(DomainError::Conflict(
                "You have already liked this post".to_string(),
            ));
        }

        let like = self.likes.create(request.post_id, user).await?;
        info!("Like {} added to post {}", like.id, request.post_id);
        Ok(LikeResponse::from(&like))
    }

    /// Resolution, existence check and delete run in a single storage transaction.
    #[instrument(skip(self))]
    pub async fn remove_like(&self, post_id: i64, user_id: i64) -> Result<(), DomainError> {
        match self.likes.remove(post_id, user_id).await? {
            LikeRemoval::Removed => {
                info!("User {} unliked post {}", user_id, post_id);
                Ok(())
            }
            LikeRemoval::UserNotFound => {
                Err(DomainError::NotFound("User not found".to_string()))
            }
            LikeRemoval::PostNotFound => {
                Err(DomainError::NotFound("Post not found".to_string()))
            }
            LikeRemoval::NotLiked => {
                warn!("User {} has no like on post {}", user_id, post_id);
                Err(DomainError::Conflict("Like does not exist".to_string()))
            }
        }
    }

    pub async fn get_likes_count(&self, post_id: i64) -> Result<i64, DomainError> {
        self.ensure_post(post_id).await?;
        self.likes.count_by_post(post_id).await
    }

    pub async fn get_users_who_liked_post(
        &self,
        post_id: i64,
    ) -> Result<Vec<UserResponse>, DomainError> {
        self.ensure_post(post_id).await?;
        let likes = self.likes.find_by_post(post_id).await?;
        Ok(likes
            .iter()
            .map(|like| UserResponse::from(&like.user))
            .collect())
    }

    async fn ensure_post(&self, id: i64) -> Result<(), DomainError> {
        match self.posts.find_by_id(id).await? {
            Some(_) => Ok(()),
            None => Err(DomainError::NotFound(format!(
                "Post with id = {} not found",
                id
            ))),
        }
    }
}
