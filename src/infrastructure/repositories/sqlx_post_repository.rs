use crate::domain::{
    category::entity::Category,
    post::{
        entity::{NewPost, Post},
        repository::PostRepository,
    },
    shared::errors::DomainError,
    user::entity::User,
};
use crate::infrastructure::database::errors::map_db_error;
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::{debug, info, instrument};

const POST_SELECT: &str = "SELECT p.id, p.title, p.content, \
        u.id AS author_id, u.username AS author_username, u.email AS author_email, \
        u.password AS author_password, u.roles AS author_roles, \
        c.id AS category_id, c.name AS category_name \
     FROM posts p \
     JOIN users u ON u.id = p.author_id \
     JOIN categories c ON c.id = p.category_id";

#[derive(FromRow)]
struct PostRow {
    id: i64,
    title: String,
    content: String,
    author_id: i64,
    author_username: String,
    author_email: String,
    author_password: String,
    author_roles: Vec<String>,
    category_id: i64,
    category_name: String,
}

impl From<PostRow> for Post {
    fn from(r: PostRow) -> Self {
        Post {
            id: r.id,
            title: r.title,
            content: r.content,
            author: User {
                id: r.author_id,
                username: r.author_username,
                email: r.author_email,
                password: r.author_password,
                roles: r.author_roles,
            },
            category: Category {
                id: r.category_id,
                name: r.category_name,
            },
        }
    }
}

pub struct SqlxPostRepository {
    pub pool: PgPool,
}

impl SqlxPostRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    async fn fetch_posts(
        &self,
        filter: &str,
        binds: &[&str],
        operation: &str,
    ) -> Result<Vec<Post>, DomainError> {
        let sql = format!("{} {} ORDER BY p.id", POST_SELECT, filter);
        let mut query = sqlx::query_as::<_, PostRow>(&sql);
        for value in binds {
            query = query.bind(*value);
        }
        let rows = query
            .fetch_all(&self.pool)
            .await
            .map_err(|e| map_db_error(operation, e))?;
        debug!("{} returned {} rows", operation, rows.len());
        Ok(rows.into_iter().map(Post::from).collect())
    }
}

#[async_trait]
impl PostRepository for SqlxPostRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Post>, DomainError> {
        let sql = format!("{} WHERE p.id = $1", POST_SELECT);
        let row = sqlx::query_as::<_, PostRow>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| map_db_error("Loading post", e))?;
        Ok(row.map(Post::from))
    }

    async fn find_all(&self) -> Result<Vec<Post>, DomainError> {
        self.fetch_posts("", &[], "Listing posts").await
    }

    async fn find_by_category_name(&self, category_name: &str) -> Result<Vec<Post>, DomainError> {
        self.fetch_posts(
            "WHERE c.name = $1",
            &[category_name],
            "Listing posts by category",
        )
        .await
    }

    async fn find_by_author_username(&self, username: &str) -> Result<Vec<Post>, DomainError> {
        self.fetch_posts(
            "WHERE u.username = $1",
            &[username],
            "Listing posts by author",
        )
        .await
    }

    async fn find_by_category_name_and_author_username(
        &self,
        category_name: &str,
        username: &str,
    ) -> Result<Vec<Post>, DomainError> {
        self.fetch_posts(
            "WHERE c.name = $1 AND u.username = $2",
            &[category_name, username],
            "Listing posts by category and author",
        )
        .await
    }

    #[instrument(skip(self, post), fields(author_id = post.author.id, category_id = post.category.id))]
    async fn create(&self, post: NewPost) -> Result<Post, DomainError> {
        let id = sqlx::query_scalar::<_, i64>(
            "INSERT INTO posts (title, content, author_id, category_id) VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author.id)
        .bind(post.category.id)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| map_db_error("Creating post", e))?;

        info!("Inserted post {}", id);
        Ok(Post {
            id,
            title: post.title,
            content: post.content,
            author: post.author,
            category: post.category,
        })
    }

    #[instrument(skip(self, post), fields(post_id = post.id))]
    async fn update(&self, post: Post) -> Result<Option<Post>, DomainError> {
        let result = sqlx::query(
            "UPDATE posts SET title = $2, content = $3, author_id = $4, category_id = $5
             WHERE id = $1",
        )
        .bind(post.id)
        .bind(&post.title)
        .bind(&post.content)
        .bind(post.author.id)
        .bind(post.category.id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_db_error("Updating post", e))?;

        if result.rows_affected() == 0 {
            debug!("Post {} no longer exists", post.id);
            return Ok(None);
        }
        Ok(Some(post))
    }

    #[instrument(skip(self))]
    async fn delete_by_id(&self, id: i64) -> Result<(), DomainError> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(|e| map_db_error("Starting post delete", e))?;

        // Row lock blocks concurrent comment/like inserts that reference this post.
        sqlx::query("SELECT id FROM posts WHERE id = $1 FOR UPDATE")
            .bind(id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(|e| map_db_error("Locking post", e))?;

        let comments = sqlx::query("DELETE FROM comments WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Deleting post comments", e))?
            .rows_affected();
        let likes = sqlx::query("DELETE FROM likes WHERE post_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Deleting post likes", e))?
            .rows_affected();
        let posts = sqlx::query("DELETE FROM posts WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| map_db_error("Deleting post", e))?
            .rows_affected();

        tx.commit()
            .await
            .map_err(|e| map_db_error("Committing post delete", e))?;
        debug!(
            "Post {} delete removed {} posts, {} comments, {} likes",
            id, posts, comments, likes
        );
        Ok(())
    }
}
