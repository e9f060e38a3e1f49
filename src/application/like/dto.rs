use crate::application::shared::dto::UserResponse;
use crate::domain::like::entity::Like;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Deserialize)]
pub struct LikeRequest {
    pub user_id: i64,
    pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LikeResponse {
    pub id: i64,
    pub user: UserResponse,
}

impl From<&Like> for LikeResponse {
    fn from(like: &Like) -> Self {
        Self {
            id: like.id,
            user: UserResponse::from(&like.user),
        }
    }
}
