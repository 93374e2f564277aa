use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// RabbitMQ event envelope wrapping all domain events.
///
/// Routing key format: `zevo.{domain}.{entity}.{action}`
/// Example: `zevo.chat.room.insert`
///
/// Message change events additionally carry the room id as the final
/// segment (`zevo.chat.message.{action}.{room_id}`) so a consumer can
/// bind a queue scoped to a single room.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event<T: Serialize> {
    pub id: Uuid,
    pub source: String,
    pub event_type: String,
    pub timestamp: DateTime<Utc>,
    pub correlation_id: Option<Uuid>,
    pub data: T,
}

impl<T: Serialize> Event<T> {
    pub fn new(source: impl Into<String>, event_type: impl Into<String>, data: T) -> Self {
        Self {
            id: Uuid::now_v7(),
            source: source.into(),
            event_type: event_type.into(),
            timestamp: Utc::now(),
            correlation_id: None,
            data,
        }
    }
}

/// Kind of row-level change carried by a change event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeAction {
    Insert,
    Update,
    Delete,
}

impl ChangeAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Insert => "insert",
            Self::Update => "update",
            Self::Delete => "delete",
        }
    }
}

/// A row-level change notification: the action plus the full row as it
/// looked when the mutation was applied.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RowChange<T> {
    pub action: ChangeAction,
    pub row: T,
}

impl<T> RowChange<T> {
    pub fn new(action: ChangeAction, row: T) -> Self {
        Self { action, row }
    }
}

/// RabbitMQ routing keys
pub mod routing_keys {
    use super::ChangeAction;
    use uuid::Uuid;

    // Profile events
    pub const PROFILE_UPDATED: &str = "zevo.profile.profile.updated";

    // Booking events
    pub const BOOKING_REQUESTED: &str = "zevo.booking.request.sent";

    // Chat change events; bindings use topic wildcards.
    pub const CHAT_ROOM_EVENTS: &str = "zevo.chat.room.*";

    pub fn room_changed(action: ChangeAction) -> String {
        format!("zevo.chat.room.{}", action.as_str())
    }

    pub fn message_changed(action: ChangeAction, room_id: Uuid) -> String {
        format!("zevo.chat.message.{}.{room_id}", action.as_str())
    }

    /// Binding pattern for all message events scoped to one room.
    pub fn messages_for_room(room_id: Uuid) -> String {
        format!("zevo.chat.message.*.{room_id}")
    }
}

/// Common event data payloads
pub mod payloads {
    use serde::{Deserialize, Serialize};
    use uuid::Uuid;

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct ProfileUpdated {
        pub profile_id: Uuid,
        pub name: String,
        pub city: String,
    }

    #[derive(Debug, Clone, Serialize, Deserialize)]
    pub struct BookingRequested {
        pub booker_email: String,
        pub arena: String,
        pub sport: String,
        pub location: String,
        pub price: String,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_routing_key_carries_room_id() {
        let room = Uuid::nil();
        let key = routing_keys::message_changed(ChangeAction::Insert, room);
        assert_eq!(
            key,
            "zevo.chat.message.insert.00000000-0000-0000-0000-000000000000"
        );
        assert!(routing_keys::messages_for_room(room).starts_with("zevo.chat.message.*."));
    }

    #[test]
    fn change_action_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ChangeAction::Delete).unwrap(),
            "\"delete\""
        );
    }
}
