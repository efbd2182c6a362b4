use sqlx::PgPool;

use crate::error::Result;

#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    pub user_id: i32,
    pub email: String,
    pub passwd: String,
}

/// Insert a new user unless the email is already taken.
///
/// Returns `true` when a row was written. `ON CONFLICT DO NOTHING`
/// turns a duplicate email into a zero-row outcome instead of an
/// error, so concurrent registrations never fail mid-flight.
pub async fn insert_user(pool: &PgPool, email: &str, passwd_hash: &str) -> Result<bool> {
    let result =
        sqlx::query("INSERT INTO users (email, passwd) VALUES ($1, $2) ON CONFLICT DO NOTHING")
            .bind(email)
            .bind(passwd_hash)
            .execute(pool)
            .await?;

    Ok(result.rows_affected() > 0)
}

/// Find user by ID
pub async fn find_by_id(pool: &PgPool, user_id: i32) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>("SELECT * FROM users WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await?;

    Ok(user)
}

/// Fetch the stored password digest for an email.
///
/// The caller only reaches this after an insert conflicted on the
/// email, so exactly one row is expected; a missing row surfaces as a
/// database error.
pub async fn find_passwd_by_email(pool: &PgPool, email: &str) -> Result<String> {
    let passwd = sqlx::query_scalar::<_, String>("SELECT passwd FROM users WHERE email = $1")
        .bind(email)
        .fetch_one(pool)
        .await?;

    Ok(passwd)
}
