use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::schema::{arena_chat_rooms, messages};

// --- ChatRoom ---

#[derive(Debug, Queryable, Identifiable, Serialize, Deserialize, Clone, PartialEq)]
#[diesel(table_name = arena_chat_rooms)]
pub struct ChatRoom {
    pub id: Uuid,
    pub arena_id: String,
    pub arena_name: String,
    pub sport: String,
    pub topic: String,
    pub created_by: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = arena_chat_rooms)]
pub struct NewChatRoom {
    pub arena_id: String,
    pub arena_name: String,
    pub sport: String,
    pub topic: String,
    pub created_by: String,
}

// --- RoomMessage ---

#[derive(Debug, Queryable, Identifiable, Serialize, Deserialize, Clone, PartialEq)]
#[diesel(table_name = messages)]
pub struct RoomMessage {
    pub id: Uuid,
    pub room_id: Uuid,
    pub sender_name: String,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = messages)]
pub struct NewRoomMessage {
    pub room_id: Uuid,
    pub sender_name: String,
    pub text: String,
}
