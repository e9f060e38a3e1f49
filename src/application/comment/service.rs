use super::dto::{CommentRequest, CommentResponse};
use crate::domain::{
    comment::{entity::NewComment, repository::CommentRepository},
    post::repository::PostRepository,
    shared::{
        errors::DomainError,
        validation::{require_id, require_text},
    },
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{info, instrument, warn};

pub struct CommentService {
    comments: Arc<dyn CommentRepository>,
    users: Arc<dyn UserRepository>,
    posts: Arc<dyn PostRepository>,
}

impl CommentService {
    pub fn new(
        comments: Arc<dyn CommentRepository>,
        users: Arc<dyn UserRepository>,
        posts: Arc<dyn PostRepository>,
    ) -> Self {
        Self {
            comments,
            users,
            posts,
        }
    }

    #[instrument(skip(self, request), fields(post_id = ?request.post_id))]
    pub async fn create_comment(
        &self,
        request: CommentRequest,
    ) -> Result<CommentResponse, DomainError> {
        if request.id.is_some() {
            warn!("Rejected comment creation carrying id {:?}", request.id);
            return Err(DomainError::ValidationError(
                "Comment id must not be supplied when creating a comment".to_string(),
            ));
        }
        let content = require_text(request.content.as_deref(), "Comment cannot be empty")?;
        let author_id = require_id(request.author_id, "Comment author is required")?;
        let post_id = require_id(request.post_id, "Comment post is required")?;

        let author = self.resolve_author(author_id).await?;
        self.ensure_post(post_id).await?;

        let comment = self
            .comments
            .create(NewComment {
                content: content.to_string(),
                author,
                post_id,
            })
            .await?;
        info!("Created comment {} on post {}", comment.id, post_id);
        Ok(CommentResponse::from(&comment))
    }

    /// Returns `Ok(None)` when the comment id does not resolve, mirroring
    /// `PostService::update_post`.
    #[instrument(skip(self, request), fields(comment_id = ?request.id))]
    pub async fn update_comment(
        &self,
        request: CommentRequest,
    ) -> Result<Option<CommentResponse>, DomainError> {
        let id = require_id(request.id, "Comment id is required")?;
        let content = require_text(request.content.as_deref(), "Comment cannot be empty")?;
        let author_id = require_id(request.author_id, "Comment author is required")?;
        let post_id = require_id(request.post_id, "Comment post is required")?;

        let author = self.resolve_author(author_id).await?;
        self.ensure_post(post_id).await?;

        let Some(mut comment) = self.comments.find_by_id(id).await? else {
            warn!("Comment {} not found for update", id);
            return Ok(None);
        };
        comment.content = content.to_string();
        comment.author = author;
        comment.post_id = post_id;

        let Some(updated) = self.comments.update(comment).await? else {
            warn!("Comment {} removed before update was written", id);
            return Ok(None);
        };
        info!("Updated comment {}", updated.id);
        Ok(Some(CommentResponse::from(&updated)))
    }

    pub async fn get_comment_by_id(&self, id: i64) -> Result<CommentResponse, DomainError> {
        self.comments
            .find_by_id(id)
            .await?
            .map(|comment| CommentResponse::from(&comment))
            .ok_or_else(|| DomainError::NotFound(format!("Comment with id = {} not found", id)))
    }

    /// Comments of one post, oldest first. A post without comments yields an empty list.
    pub async fn get_comments_by_post(
        &self,
        post_id: i64,
    ) -> Result<Vec<CommentResponse>, DomainError> {
        self.ensure_post(post_id).await?;
        let comments = self.comments.find_by_post(post_id).await?;
        Ok(comments.iter().map(CommentResponse::from).collect())
    }

    #[instrument(skip(self))]
    pub async fn delete_comment(&self, id: i64) -> Result<(), DomainError> {
        self.comments.delete_by_id(id).await?;
        info!("Deleted comment {}", id);
        Ok(())
    }

    async fn resolve_author(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User with id = {} not found", id)))
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
