use actix_web::{error::ResponseError, http::header::ContentType, http::StatusCode, HttpResponse};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AppError>;

/// Application error type
///
/// Every variant maps to a plain text response body. The `Display`
/// string of a client error is the body line the caller sees.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Email is invalid")]
    InvalidEmail,

    #[error("Password must contain at least 8 symbols")]
    PasswordTooShort,

    #[error("User with this email already exists")]
    EmailTaken,

    #[error("Incorrect parameters")]
    IncorrectParameters,

    #[error("User with this ID does not exist")]
    UserNotFound,

    #[error("Post with this ID does not exist")]
    PostNotFound,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidEmail
            | AppError::PasswordTooShort
            | AppError::EmailTaken
            | AppError::IncorrectParameters
            | AppError::UserNotFound
            | AppError::PostNotFound => StatusCode::BAD_REQUEST,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match self {
            AppError::Database(e) => {
                tracing::error!("Database error: {}", e);
                "Internal server error".to_string()
            }
            other => other.to_string(),
        };

        HttpResponse::build(self.status_code())
            .content_type(ContentType::plaintext())
            .body(format!("{}\n", body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[test]
    fn test_status_codes() {
        assert_eq!(AppError::InvalidEmail.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::PasswordTooShort.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::EmailTaken.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::IncorrectParameters.status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::UserNotFound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(AppError::PostNotFound.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::Database(sqlx::Error::PoolClosed).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[actix_web::test]
    async fn test_response_bodies_are_single_lines() {
        let cases = [
            (AppError::InvalidEmail, "Email is invalid\n"),
            (
                AppError::PasswordTooShort,
                "Password must contain at least 8 symbols\n",
            ),
            (AppError::EmailTaken, "User with this email already exists\n"),
            (AppError::IncorrectParameters, "Incorrect parameters\n"),
            (AppError::UserNotFound, "User with this ID does not exist\n"),
            (AppError::PostNotFound, "Post with this ID does not exist\n"),
        ];

        for (err, expected) in cases {
            let resp = err.error_response();
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
            let body = to_bytes(resp.into_body()).await.unwrap();
            assert_eq!(&body[..], expected.as_bytes());
        }
    }

    #[actix_web::test]
    async fn test_database_error_body_is_opaque() {
        let resp = AppError::Database(sqlx::Error::PoolClosed).error_response();
        assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"Internal server error\n");
    }
}
