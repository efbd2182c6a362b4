use actix_web::{http::header::ContentType, web, HttpResponse};
use serde::Deserialize;
use sqlx::PgPool;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::security::password;
use crate::validators;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub passwd: String,
}

/// Register a user
/// POST /users?email=...&passwd=...
pub async fn register_user(
    pool: web::Data<PgPool>,
    params: web::Query<RegisterRequest>,
) -> Result<HttpResponse> {
    if !validators::is_valid_email(&params.email) {
        tracing::debug!("Registration rejected: invalid email");
        return Err(AppError::InvalidEmail);
    }

    if !validators::is_valid_password(&params.passwd) {
        tracing::debug!("Registration rejected: password too short");
        return Err(AppError::PasswordTooShort);
    }

    let passwd_hash = password::hash_password(&params.passwd);

    if user_repo::insert_user(&pool, &params.email, &passwd_hash).await? {
        tracing::info!(email = %params.email, "User registered");
        return Ok(HttpResponse::Created()
            .content_type(ContentType::plaintext())
            .body("ok\n"));
    }

    // The insert conflicted: the email is already present, written by an
    // earlier call or a concurrent one. Re-read the stored digest and
    // compare; identical credentials make re-registration a no-op success.
    let stored = user_repo::find_passwd_by_email(&pool, &params.email).await?;
    if stored != passwd_hash {
        return Err(AppError::EmailTaken);
    }

    tracing::debug!(email = %params.email, "Repeated registration with matching credentials");
    Ok(HttpResponse::Ok()
        .content_type(ContentType::plaintext())
        .body("ok\n"))
}
