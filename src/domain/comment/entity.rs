use crate::domain::user::entity::User;

#[derive(Debug, Clone, PartialEq)]
pub struct Comment {
    pub id: i64,
    pub content: String,
    pub author: User,
    pub post_id: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewComment {
    pub content: String,
    pub author: User,
    pub post_id: i64,
}
