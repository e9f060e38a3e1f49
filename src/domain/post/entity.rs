use crate::domain::{category::entity::Category, user::entity::User};

/// A post together with the author and category it references.
///
/// Comments and likes belong to the post: removing the post removes them
/// (see `PostRepository::delete_by_id`).
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub author: User,
    pub category: Category,
}
