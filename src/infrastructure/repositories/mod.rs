pub mod sqlx_category_repository;
pub mod sqlx_comment_repository;
pub mod sqlx_like_repository;
pub mod sqlx_post_repository;
pub mod sqlx_user_repository;
