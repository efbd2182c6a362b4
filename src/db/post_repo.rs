use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::error::Result;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Post {
    pub post_id: i32,
    pub user_id: i32,
    pub post_body: String,
    pub date_of_post: DateTime<Utc>,
}

/// Find post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: i32) -> Result<Option<Post>> {
    let post = sqlx::query_as::<_, Post>("SELECT * FROM posts WHERE post_id = $1")
        .bind(post_id)
        .fetch_optional(pool)
        .await?;

    Ok(post)
}
