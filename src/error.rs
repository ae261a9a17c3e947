use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use tracing::error;

/// Errors surfaced to API clients as a JSON body of `{"error": message}`.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Email already registered")]
    EmailTaken,
    #[error("Phone number already registered")]
    PhoneTaken,
    #[error("User not found")]
    UserNotFound,
    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

impl ApiError {
    /// Classify an insert failure. A unique-constraint violation on email or
    /// phone becomes the matching duplicate error; anything else stays a
    /// database error.
    pub fn from_insert(e: sqlx::Error) -> Self {
        if let sqlx::Error::Database(db) = &e {
            if db.is_unique_violation() {
                let message = db.message();
                if message.contains("users.email") {
                    return ApiError::EmailTaken;
                }
                if message.contains("users.phone") {
                    return ApiError::PhoneTaken;
                }
            }
        }
        ApiError::Database(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::EmailTaken | ApiError::PhoneTaken => {
                (StatusCode::BAD_REQUEST, self.to_string())
            }
            ApiError::UserNotFound => (StatusCode::NOT_FOUND, self.to_string()),
            ApiError::Database(e) => {
                error!(error = %e, "database error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}
