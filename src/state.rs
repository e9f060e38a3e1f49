use crate::{
    application::{
        category::service::CategoryService, comment::service::CommentService,
        like::service::LikeService, post::service::PostService, user::service::UserService,
    },
    config::Config,
    domain::{
        category::repository::CategoryRepository, comment::repository::CommentRepository,
        like::repository::LikeRepository, post::repository::PostRepository,
        user::repository::UserRepository,
    },
    infrastructure::{
        repositories::{
            sqlx_category_repository::SqlxCategoryRepository,
            sqlx_comment_repository::SqlxCommentRepository,
            sqlx_like_repository::SqlxLikeRepository, sqlx_post_repository::SqlxPostRepository,
            sqlx_user_repository::SqlxUserRepository,
        },
        security::password::{BcryptPasswordHasher, PasswordHasher},
    },
};
use sqlx::PgPool;
use std::sync::Arc;

/// Composition root: every repository is built once and shared by the services.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    pub users: Arc<UserService>,
    pub categories: Arc<CategoryService>,
    pub posts: Arc<PostService>,
    pub comments: Arc<CommentService>,
    pub likes: Arc<LikeService>,
}

impl AppState {
    pub fn new(db: PgPool, config: Config) -> Self {
        let user_repo: Arc<dyn UserRepository> = Arc::new(SqlxUserRepository::new(db.clone()));
        let category_repo: Arc<dyn CategoryRepository> =
            Arc::new(SqlxCategoryRepository::new(db.clone()));
        let post_repo: Arc<dyn PostRepository> = Arc::new(SqlxPostRepository::new(db.clone()));
        let comment_repo: Arc<dyn CommentRepository> =
            Arc::new(SqlxCommentRepository::new(db.clone()));
        let like_repo: Arc<dyn LikeRepository> = Arc::new(SqlxLikeRepository::new(db.clone()));
        let hasher: Arc<dyn PasswordHasher> =
            Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost));

        Self {
            users: Arc::new(UserService::new(user_repo.clone(), hasher)),
            categories: Arc::new(CategoryService::new(category_repo.clone())),
            posts: Arc::new(PostService::new(
                post_repo.clone(),
                user_repo.clone(),
                category_repo,
            )),
            comments: Arc::new(CommentService::new(
                comment_repo,
                user_repo.clone(),
                post_repo.clone(),
            )),
            likes: Arc::new(LikeService::new(like_repo, user_repo, post_repo)),
            db,
            config,
        }
    }
}
