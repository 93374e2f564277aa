use axum::extract::{Path, State};
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use zevo_shared::clients::store::caps;
use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::{ApiResponse, ChangeAction};

use crate::events::publisher;
use crate::models::{NewRoomMessage, RoomMessage};
use crate::schema::{arena_chat_rooms, messages};
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub sender_name: String,
    pub text: String,
}

/// Every message must reference an existing room at creation time.
fn verify_room_exists(conn: &mut diesel::pg::PgConnection, room_id: Uuid) -> AppResult<()> {
    let exists: bool = arena_chat_rooms::table
        .find(room_id)
        .count()
        .get_result::<i64>(conn)
        .map(|c| c > 0)?;

    if !exists {
        return Err(AppError::new(ErrorCode::RoomNotFound, "room not found"));
    }
    Ok(())
}

/// GET /rooms/:id/messages - a room's messages, oldest first
pub async fn list_messages(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<Vec<RoomMessage>>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    verify_room_exists(&mut conn, room_id)?;

    let items = messages::table
        .filter(messages::room_id.eq(room_id))
        .order(messages::created_at.asc())
        .limit(caps::ARENA_CHAT_MESSAGES as i64)
        .load::<RoomMessage>(&mut conn)?;

    Ok(Json(ApiResponse::ok(items)))
}

/// POST /rooms/:id/messages - send a message in a room
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<Uuid>,
    Json(req): Json<SendMessageRequest>,
) -> AppResult<Json<ApiResponse<RoomMessage>>> {
    let sender_name = req.sender_name.trim();
    let text = req.text.trim();

    if sender_name.is_empty() {
        return Err(AppError::new(
            ErrorCode::ValidationError,
            "sender_name is required",
        ));
    }
    if text.is_empty() {
        return Err(AppError::new(ErrorCode::EmptyMessage, "message text is empty"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    verify_room_exists(&mut conn, room_id)?;

    let new_message = NewRoomMessage {
        room_id,
        sender_name: sender_name.to_string(),
        text: text.to_string(),
    };

    let message: RoomMessage = diesel::insert_into(messages::table)
        .values(&new_message)
        .get_result(&mut conn)?;

    tracing::debug!(
        message_id = %message.id,
        room_id = %room_id,
        sender = %message.sender_name,
        "message sent"
    );

    publisher::publish_message_change(&state.rabbitmq, ChangeAction::Insert, message.clone()).await;

    Ok(Json(ApiResponse::ok(message)))
}

/// DELETE /messages/:id
pub async fn delete_message(
    State(state): State<Arc<AppState>>,
    Path(message_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<RoomMessage>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let message = messages::table
        .find(message_id)
        .first::<RoomMessage>(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::new(ErrorCode::MessageNotFound, "message not found"))?;

    diesel::delete(messages::table.find(message_id)).execute(&mut conn)?;

    publisher::publish_message_change(&state.rabbitmq, ChangeAction::Delete, message.clone()).await;

    Ok(Json(ApiResponse::ok(message)))
}
