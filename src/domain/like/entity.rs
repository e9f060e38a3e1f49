use crate::domain::user::entity::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Like {
    pub id: i64,
    pub user: User,
    pub post_id: i64,
}

/// Outcome of the transactional unlike. Everything except `Removed` left the store untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LikeRemoval {
    UserNotFound,
    PostNotFound,
    NotLiked,
    Removed,
}
