use crate::application::shared::dto::{CategoryResponse, UserResponse};
use crate::domain::post::entity::Post;
use serde::{Deserialize, Serialize};

/// Shared by create and update. `id` must be absent on create and present on update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostRequest {
    pub id: Option<i64>,
    pub title: Option<String>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub category_id: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostResponse {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: UserResponse,
    pub category: CategoryResponse,
}

impl From<&Post> for PostResponse {
    fn from(post: &Post) -> Self {
        Self {
            id: post.id,
            title: post.title.clone(),
            content: post.content.clone(),
            author: UserResponse::from(&post.author),
            category: CategoryResponse::from(&post.category),
        }
    }
}
