use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::{comment_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::validators;

#[derive(Debug, Deserialize)]
pub struct CreateCommentRequest {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub post_id: String,
}

/// Parse a query-string identifier, rejecting anything that is not a
/// positive integer in full.
fn parse_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|&id| validators::is_valid_id(id))
}

/// Create a comment
/// POST /comments?user_id=...&post_id=... with the comment text as the raw body
pub async fn create_comment(
    pool: web::Data<PgPool>,
    params: web::Query<CreateCommentRequest>,
    comment_body: String,
) -> Result<HttpResponse> {
    let (user_id, post_id) = match (parse_id(&params.user_id), parse_id(&params.post_id)) {
        (Some(user_id), Some(post_id)) => (user_id, post_id),
        _ => return Err(AppError::IncorrectParameters),
    };

    if user_repo::find_by_id(&pool, user_id).await?.is_none() {
        return Err(AppError::UserNotFound);
    }

    if post_repo::find_post_by_id(&pool, post_id).await?.is_none() {
        return Err(AppError::PostNotFound);
    }

    if comment_repo::insert_comment(&pool, post_id, user_id, &comment_body).await? {
        tracing::info!(user_id, post_id, "Comment created");
        return Ok(HttpResponse::Created()
            .content_type(ContentType::plaintext())
            .body("ok\n"));
    }

    // Zero rows affected: the ON CONFLICT guard swallowed the insert.
    // Known quirk: this path reports "error" in the body while keeping
    // the default success status instead of raising an error status.
    tracing::warn!(user_id, post_id, "Comment insert affected no rows");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("error\n"))
}
