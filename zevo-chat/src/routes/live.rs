use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::ApiResponse;

use crate::sync::ChatView;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SelectRoomRequest {
    pub room_id: Uuid,
}

/// GET /live - the synchronized view: rooms, selection, and the selected
/// room's messages
pub async fn get_live_view(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<ChatView>>> {
    let view = state.view.read().await.clone();
    Ok(Json(ApiResponse::ok(view)))
}

/// PUT /live/select - move the selection cursor
pub async fn select_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SelectRoomRequest>,
) -> AppResult<Json<ApiResponse<ChatView>>> {
    let (selected, view) = {
        let mut view = state.view.write().await;
        let ok = view.select_room(req.room_id);
        (ok, view.clone())
    };

    if !selected {
        return Err(AppError::new(
            ErrorCode::RoomNotInView,
            "room is not present in the live view",
        ));
    }

    // Wake the message feed so it re-scopes to the new room.
    let _ = state.selection_tx.send(Some(req.room_id));

    Ok(Json(ApiResponse::ok(view)))
}
