use axum::{
    Json,
    extract::{Path, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::api::server::AppState;
use crate::error::{AppError, AppResult};

#[derive(Deserialize)]
pub struct NotePayload {
    pub content: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Pull the caller's identity out of the `x-user-id` header. This is an
/// unauthenticated ownership assertion: the value is trusted as-is and never
/// checked against the user store, so any caller can act as any owner.
fn owner_id(headers: &HeaderMap) -> AppResult<String> {
    headers
        .get("x-user-id")
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_owned)
        .ok_or(AppError::Unauthorized)
}

pub async fn list_notes(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let owner = owner_id(&headers)?;
    let notes = state.notes.list(&owner).await?;
    Ok(Json(notes))
}

pub async fn create_note(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let owner = owner_id(&headers)?;
    state.notes.create(&owner, payload.content).await?;

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse {
            message: "Note saved successfully!".to_string(),
        }),
    ))
}

pub async fn update_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<String>,
    headers: HeaderMap,
    Json(payload): Json<NotePayload>,
) -> AppResult<impl IntoResponse> {
    let owner = owner_id(&headers)?;
    state.notes.update(&owner, &note_id, payload.content).await?;

    Ok(Json(MessageResponse {
        message: "Note updated successfully!".to_string(),
    }))
}

pub async fn delete_note(
    State(state): State<Arc<AppState>>,
    Path(note_id): Path<String>,
    headers: HeaderMap,
) -> AppResult<impl IntoResponse> {
    let owner = owner_id(&headers)?;
    state.notes.delete(&owner, &note_id).await?;

    Ok(Json(MessageResponse {
        message: "Note deleted successfully!".to_string(),
    }))
}
