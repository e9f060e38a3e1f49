use super::dto::{PostRequest, PostResponse};
use crate::domain::{
    category::{entity::Category, repository::CategoryRepository},
    post::{
        entity::{NewPost, Post},
        repository::PostRepository,
    },
    shared::{
        errors::DomainError,
        validation::{require_id, require_text},
    },
    user::{entity::User, repository::UserRepository},
};
use std::sync::Arc;
use tracing::{debug, info, instrument, warn};

pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
    categories: Arc<dyn CategoryRepository>,
}

impl PostService {
    pub fn new(
        posts: Arc<dyn PostRepository>,
        users: Arc<dyn UserRepository>,
        categories: Arc<dyn CategoryRepository>,
    ) -> Self {
        Self {
            posts,
            users,
            categories,
        }
    }

    #[instrument(skip(self, request))]
    pub async fn create_post(&self, request: PostRequest) -> Result<PostResponse, DomainError> {
        if request.id.is_some() {
            warn!("Rejected post creation carrying id {:?}", request.id);
            return Err(DomainError::ValidationError(
                "Post id must not be supplied when creating a post".to_string(),
            ));
        }
        let author_id = require_id(request.author_id, "Post author is required")?;
        let author = self.resolve_author(author_id).await?;
        let category_id = require_id(request.category_id, "Post category is required")?;
        let category = self.resolve_category(category_id).await?;

        // Title and content are stored as given; only updates require text.
        let post = self
            .posts
            .create(NewPost {
                title: request.title.unwrap_or_default(),
                content: request.content.unwrap_or_default(),
                author,
                category,
            })
            .await?;
        info!("Created post {} by user {}", post.id, post.author.id);
        Ok(PostResponse::from(&post))
    }

    /// Overwrites title, content, author and category of an existing post.
    ///
    /// Returns `Ok(None)` when no post has the requested id. Callers must treat
    /// that as "nothing updated"; unlike the lookups it is not reported as
    /// `DomainError::NotFound`.
    #[instrument(skip(self, request), fields(post_id = ?request.id))]
    pub async fn update_post(
        &self,
        request: PostRequest,
    ) -> Result<Option<PostResponse>, DomainError> {
        let id = require_id(request.id, "Post id is required")?;
        let title = require_text(request.title.as_deref(), "Post title is required")?;
        let content = require_text(request.content.as_deref(), "Post content is required")?;
        let author_id = require_id(request.author_id, "Post author is required")?;
        let category_id = require_id(request.category_id, "Post category is required")?;

        let author = self.resolve_author(author_id).await?;
        let category = self.resolve_category(category_id).await?;

        let Some(mut post) = self.posts.find_by_id(id).await? else {
            warn!("Post {} not found for update", id);
            return Ok(None);
        };
        post.title = title.to_string();
        post.content = content.to_string();
        post.author = author;
        post.category = category;

        let Some(updated) = self.posts.update(post).await? else {
            warn!("Post {} removed before update was written", id);
            return Ok(None);
        };
        info!("Updated post {}", updated.id);
        Ok(Some(PostResponse::from(&updated)))
    }

    pub async fn get_post_by_id(&self, id: i64) -> Result<PostResponse, DomainError> {
        self.posts
            .find_by_id(id)
            .await?
            .map(|post| PostResponse::from(&post))
            .ok_or_else(|| DomainError::NotFound(format!("Post with id = {} not found", id)))
    }

    #[instrument(skip(self))]
    pub async fn delete_post(&self, id: i64) -> Result<(), DomainError> {
        self.posts.delete_by_id(id).await?;
        info!("Deleted post {} with its comments and likes", id);
        Ok(())
    }

    #[instrument(skip(self))]
    pub async fn get_posts_by_category(
        &self,
        category_name: &str,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let category_name = require_text(Some(category_name), "Category name is required")?;
        let posts = self.posts.find_by_category_name(category_name).await?;
        non_empty(
            posts,
            format!("No posts found in category '{}'", category_name),
        )
    }

    #[instrument(skip(self))]
    pub async fn get_posts_by_author(
        &self,
        username: &str,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let username = require_text(Some(username), "Author is required")?;
        let posts = self.posts.find_by_author_username(username).await?;
        non_empty(posts, format!("No posts found for author '{}'", username))
    }

    #[instrument(skip(self))]
    pub async fn get_posts_by_category_name_and_author(
        &self,
        category_name: &str,
        username: &str,
    ) -> Result<Vec<PostResponse>, DomainError> {
        let category_name = require_text(Some(category_name), "Category name is required")?;
        let username = require_text(Some(username), "Author is required")?;
        let posts = self
            .posts
            .find_by_category_name_and_author_username(category_name, username)
            .await?;
        non_empty(
            posts,
            format!(
                "No posts found for category '{}' and author '{}'",
                category_name, username
            ),
        )
    }

    /// Every post. An empty store yields an empty list, not an error.
    pub async fn get_all_posts(&self) -> Result<Vec<PostResponse>, DomainError> {
        let posts = self.posts.find_all().await?;
        debug!("Listing {} posts", posts.len());
        Ok(posts.iter().map(PostResponse::from).collect())
    }

    async fn resolve_author(&self, id: i64) -> Result<User, DomainError> {
        self.users
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("User with id = {} not found", id)))
    }

    async fn resolve_category(&self, id: i64) -> Result<Category, DomainError> {
        self.categories
            .find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::NotFound(format!("Category with id = {} not found", id)))
    }
}

// Filtered listings treat an empty result as a caller error.
fn non_empty(posts: Vec<Post>, message: String) -> Result<Vec<PostResponse>, DomainError> {
    if posts.is_empty() {
        debug!("{}", message);
        return Err(DomainError::ValidationError(message));
    }
    Ok(posts.iter().map(PostResponse::from).collect())
}
