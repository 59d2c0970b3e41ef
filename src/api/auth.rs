use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::server::AppState;
use crate::error::AppResult;

#[derive(Deserialize)]
pub struct AuthPayload {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: String,
}

#[derive(Serialize)]
pub struct LoginResponse {
    pub message: String,
    #[serde(rename = "userId")]
    pub user_id: String,
}

pub async fn register(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AuthPayload>,
) -> AppResult<impl IntoResponse> {
    let user_id = state
        .users
        .register(&payload.username, &payload.password)
        .await?;
    tracing::info!("registered new user: {} with ID: {}", payload.username, user_id);

    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered successfully!".to_string(),
        }),
    ))
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<AuthPayload>,
) -> AppResult<impl IntoResponse> {
    let user_id = state
        .users
        .authenticate(&payload.username, &payload.password)
        .await?;

    Ok(Json(LoginResponse {
        message: "Login successful!".to_string(),
        user_id,
    }))
}
