use crate::application::shared::dto::UserResponse;
use crate::domain::comment::entity::Comment;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentRequest {
    pub id: Option<i64>,
    pub content: Option<String>,
    pub author_id: Option<i64>,
    pub post_id: Option<i64>,
}

/// Comment with its author summary. The parent post is deliberately not nested.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentResponse {
    pub id: i64,
    pub content: String,
    pub author: UserResponse,
}

impl From<&Comment> for CommentResponse {
    fn from(comment: &Comment) -> Self {
        Self {
            id: comment.id,
            content: comment.content.clone(),
            author: UserResponse::from(&comment.author),
        }
    }
}
