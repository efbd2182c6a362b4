use sqlx::PgPool;

use crate::error::Result;

/// Insert a comment with a server-assigned timestamp.
///
/// Returns `true` when a row was written. The insert carries
/// `ON CONFLICT DO NOTHING`, so a conflicting write yields zero
/// affected rows rather than an error.
pub async fn insert_comment(
    pool: &PgPool,
    post_id: i32,
    user_id: i32,
    comment_body: &str,
) -> Result<bool> {
    let result = sqlx::query(
        r#"
        INSERT INTO comments (post_id, user_id, comment_body, date_of_comment)
        VALUES ($1, $2, $3, CURRENT_TIMESTAMP)
        ON CONFLICT DO NOTHING
        "#,
    )
    .bind(post_id)
    .bind(user_id)
    .bind(comment_body)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}
