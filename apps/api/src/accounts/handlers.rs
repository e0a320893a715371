use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde::Serialize;
use uuid::Uuid;

use crate::accounts::credentials::CredentialsRequest;
use crate::accounts::password::{hash_password, verify_password};
use crate::errors::AppError;
use crate::models::user::NewUser;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub message: String,
    pub user_id: Uuid,
}

/// POST /register
pub async fn handle_register(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let Json(req) = payload?;
    let credentials = req.validate_new()?;

    if state.users.find_by_email(&credentials.email).await?.is_some() {
        return Err(AppError::Conflict(
            "User with this email already exists".to_string(),
        ));
    }

    let user_id = Uuid::new_v4();
    state
        .users
        .insert_user(NewUser {
            user_id,
            email: credentials.email,
            password_hash: hash_password(&credentials.password),
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            message: "User registered successfully".to_string(),
            user_id,
        }),
    ))
}

/// POST /login
pub async fn handle_login(
    State(state): State<AppState>,
    payload: Result<Json<CredentialsRequest>, JsonRejection>,
) -> Result<Json<AuthResponse>, AppError> {
    let Json(req) = payload?;
    let credentials = req.validate()?;

    let user = state
        .users
        .find_by_email(&credentials.email)
        .await?
        .ok_or(AppError::Unauthorized)?;

    if !verify_password(&credentials.password, &user.password_hash) {
        return Err(AppError::Unauthorized);
    }

    Ok(Json(AuthResponse {
        message: "Login successful".to_string(),
        user_id: user.user_id,
    }))
}
