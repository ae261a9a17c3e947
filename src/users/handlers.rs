use axum::{
    extract::{Path, State},
    routing::{get, post},
    Json, Router,
};
use tracing::{debug, info, instrument, warn};

use crate::{
    error::ApiError,
    state::AppState,
    users::{
        dto::{RegisterRequest, UserResponse},
        repo::User,
    },
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/register/", post(register))
        .route("/user/:user_id/", get(get_user))
}

#[instrument(skip(state, payload))]
pub async fn register(
    State(state): State<AppState>,
    Json(payload): Json<RegisterRequest>,
) -> Result<Json<UserResponse>, ApiError> {
    if User::find_by_email(&state.db, &payload.email).await?.is_some() {
        warn!(email = %payload.email, "email already registered");
        return Err(ApiError::EmailTaken);
    }

    if User::find_by_phone(&state.db, &payload.phone).await?.is_some() {
        warn!(phone = %payload.phone, "phone already registered");
        return Err(ApiError::PhoneTaken);
    }

    if !payload.profile_picture.is_empty() {
        debug!("profile_picture accepted but not persisted");
    }

    // The lookups above can race with a concurrent insert; the unique
    // constraints settle it, and a lost race gets the same 400.
    let user = User::create(
        &state.db,
        &payload.full_name,
        &payload.email,
        &payload.password,
        &payload.phone,
    )
    .await
    .map_err(ApiError::from_insert)?;

    info!(user_id = user.id, email = %user.email, "user registered");
    Ok(Json(user.into()))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<UserResponse>, ApiError> {
    let user = User::find_by_id(&state.db, user_id)
        .await?
        .ok_or(ApiError::UserNotFound)?;
    Ok(Json(user.into()))
}
