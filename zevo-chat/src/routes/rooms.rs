use axum::extract::{Path, State};
use axum::Json;
use diesel::prelude::*;
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use zevo_shared::clients::store::caps;
use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::catalog;
use zevo_shared::types::{ApiResponse, ChangeAction};

use crate::events::publisher;
use crate::models::{ChatRoom, NewChatRoom};
use crate::schema::{arena_chat_rooms, messages};
use crate::AppState;

// --- Request DTOs ---

#[derive(Debug, Deserialize)]
pub struct CreateRoomRequest {
    pub arena_id: String,
    pub topic: Option<String>,
    pub created_by: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateRoomRequest {
    pub topic: String,
}

// --- Handlers ---

/// GET /rooms - list rooms, newest first, capped at the view bound
pub async fn list_rooms(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Vec<ChatRoom>>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let rooms = arena_chat_rooms::table
        .order(arena_chat_rooms::created_at.desc())
        .limit(caps::ARENA_CHAT_ROOMS as i64)
        .load::<ChatRoom>(&mut conn)?;

    Ok(Json(ApiResponse::ok(rooms)))
}

/// POST /rooms - create a chat room for a catalog arena
pub async fn create_room(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateRoomRequest>,
) -> AppResult<Json<ApiResponse<ChatRoom>>> {
    let arena = catalog::find_arena(&req.arena_id).ok_or_else(|| {
        AppError::new(
            ErrorCode::UnknownArena,
            format!("unknown arena: {}", req.arena_id),
        )
    })?;

    let created_by = req.created_by.trim();
    if created_by.is_empty() {
        return Err(AppError::new(
            ErrorCode::ValidationError,
            "created_by is required",
        ));
    }

    let topic = req
        .topic
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| format!("Discussion for {}", arena.name));

    let new_room = NewChatRoom {
        arena_id: arena.id.to_string(),
        arena_name: arena.name.to_string(),
        sport: arena.sport.as_str().to_string(),
        topic,
        created_by: created_by.to_string(),
    };

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let room: ChatRoom = diesel::insert_into(arena_chat_rooms::table)
        .values(&new_room)
        .get_result(&mut conn)?;

    tracing::info!(
        room_id = %room.id,
        arena_id = %room.arena_id,
        created_by = %room.created_by,
        "chat room created"
    );

    publisher::publish_room_change(&state.rabbitmq, ChangeAction::Insert, room.clone()).await;

    Ok(Json(ApiResponse::ok(room)))
}

/// GET /rooms/:id
pub async fn get_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ChatRoom>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let room = arena_chat_rooms::table
        .find(room_id)
        .first::<ChatRoom>(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound, "room not found"))?;

    Ok(Json(ApiResponse::ok(room)))
}

/// PUT /rooms/:id - edit the room topic
pub async fn update_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<Uuid>,
    Json(req): Json<UpdateRoomRequest>,
) -> AppResult<Json<ApiResponse<ChatRoom>>> {
    let topic = req.topic.trim();
    if topic.is_empty() {
        return Err(AppError::new(ErrorCode::ValidationError, "topic is required"));
    }

    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let room: ChatRoom = diesel::update(arena_chat_rooms::table.find(room_id))
        .set(arena_chat_rooms::topic.eq(topic))
        .get_result(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound, "room not found"))?;

    publisher::publish_room_change(&state.rabbitmq, ChangeAction::Update, room.clone()).await;

    Ok(Json(ApiResponse::ok(room)))
}

/// DELETE /rooms/:id - remove a room and its messages
pub async fn delete_room(
    State(state): State<Arc<AppState>>,
    Path(room_id): Path<Uuid>,
) -> AppResult<Json<ApiResponse<ChatRoom>>> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let room = arena_chat_rooms::table
        .find(room_id)
        .first::<ChatRoom>(&mut conn)
        .optional()?
        .ok_or_else(|| AppError::new(ErrorCode::RoomNotFound, "room not found"))?;

    diesel::delete(messages::table.filter(messages::room_id.eq(room_id))).execute(&mut conn)?;
    diesel::delete(arena_chat_rooms::table.find(room_id)).execute(&mut conn)?;

    tracing::info!(room_id = %room_id, "chat room deleted");

    publisher::publish_room_change(&state.rabbitmq, ChangeAction::Delete, room.clone()).await;

    Ok(Json(ApiResponse::ok(room)))
}
