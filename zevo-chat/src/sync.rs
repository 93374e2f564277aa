//! In-memory synchronized view of the chat tables.
//!
//! Change events are applied in delivery order. An update or delete
//! arriving before its insert no-ops silently; the view makes no attempt
//! to reorder or reconcile late deliveries.

use serde::Serialize;
use uuid::Uuid;

use zevo_shared::types::{ChangeAction, RowChange};

use crate::models::{ChatRoom, RoomMessage};

/// Rows that can be merged by identifier.
pub trait Keyed {
    fn key(&self) -> Uuid;
}

impl Keyed for ChatRoom {
    fn key(&self) -> Uuid {
        self.id
    }
}

impl Keyed for RoomMessage {
    fn key(&self) -> Uuid {
        self.id
    }
}

#[derive(Debug, Clone, Copy)]
enum Placement {
    /// New rows go to the front (rooms: newest first).
    Prepend,
    /// New rows go to the back (messages: oldest first).
    Append,
}

/// Idempotent merge of one change into a list. Returns true when the
/// list was mutated.
fn merge<T: Keyed>(list: &mut Vec<T>, change: RowChange<T>, placement: Placement) -> bool {
    let key = change.row.key();
    let existing = list.iter().position(|item| item.key() == key);

    match change.action {
        ChangeAction::Insert => {
            if existing.is_some() {
                return false; // duplicate delivery
            }
            match placement {
                Placement::Prepend => list.insert(0, change.row),
                Placement::Append => list.push(change.row),
            }
            true
        }
        ChangeAction::Update => match existing {
            Some(idx) => {
                list[idx] = change.row;
                true
            }
            None => false,
        },
        ChangeAction::Delete => match existing {
            Some(idx) => {
                list.remove(idx);
                true
            }
            None => false,
        },
    }
}

/// The synchronized view: the room list, a selection cursor, and the
/// messages of the selected room.
#[derive(Debug, Default, Clone, Serialize)]
pub struct ChatView {
    pub rooms: Vec<ChatRoom>,
    pub selected_room_id: Option<Uuid>,
    pub messages: Vec<RoomMessage>,
}

impl ChatView {
    pub fn new(rooms: Vec<ChatRoom>) -> Self {
        let mut view = Self {
            rooms,
            selected_room_id: None,
            messages: Vec::new(),
        };
        view.reconcile_selection();
        view
    }

    /// Apply a room change event. Returns true when the selection moved
    /// (the caller then re-scopes its message subscription).
    pub fn apply_room_change(&mut self, change: RowChange<ChatRoom>) -> bool {
        merge(&mut self.rooms, change, Placement::Prepend);
        self.reconcile_selection()
    }

    /// Apply a message change event. Events scoped to a room other than
    /// the selected one never touch the list.
    pub fn apply_message_change(&mut self, change: RowChange<RoomMessage>) {
        if self.selected_room_id != Some(change.row.room_id) {
            return;
        }
        merge(&mut self.messages, change, Placement::Append);
    }

    /// Move the selection cursor to a room present in the view. Returns
    /// false when the room is unknown; the selection is left untouched.
    pub fn select_room(&mut self, room_id: Uuid) -> bool {
        if !self.rooms.iter().any(|room| room.id == room_id) {
            return false;
        }
        self.set_selection(Some(room_id));
        true
    }

    /// Re-validate the selection against the room list: select the first
    /// room when nothing is selected, reselect the first remaining room
    /// (or clear) when the selected id vanished. Returns true when the
    /// selection changed.
    pub fn reconcile_selection(&mut self) -> bool {
        let first = self.rooms.first().map(|room| room.id);
        let next = match self.selected_room_id {
            Some(id) if self.rooms.iter().any(|room| room.id == id) => Some(id),
            _ => first,
        };
        if next == self.selected_room_id {
            return false;
        }
        self.set_selection(next);
        true
    }

    /// Replace the message list wholesale (initial load for a selection).
    pub fn load_messages(&mut self, messages: Vec<RoomMessage>) {
        self.messages = messages;
    }

    fn set_selection(&mut self, next: Option<Uuid>) {
        if self.selected_room_id != next {
            // Messages belong to the previous room; the new feed reloads.
            self.messages.clear();
        }
        self.selected_room_id = next;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn room(id: Uuid) -> ChatRoom {
        ChatRoom {
            id,
            arena_id: "ground-zero".into(),
            arena_name: "Ground Zero Turf".into(),
            sport: "Football".into(),
            topic: "Saturday 7 AM planning".into(),
            created_by: "Arjun".into(),
            created_at: Utc::now(),
        }
    }

    fn message(id: Uuid, room_id: Uuid) -> RoomMessage {
        RoomMessage {
            id,
            room_id,
            sender_name: "Arjun".into(),
            text: "anyone up for 5v5?".into(),
            created_at: Utc::now(),
        }
    }

    fn ids() -> (Uuid, Uuid) {
        (Uuid::now_v7(), Uuid::now_v7())
    }

    #[test]
    fn insert_prepends_new_room_and_selects_it() {
        let mut view = ChatView::default();
        let (a, b) = ids();
        view.apply_room_change(RowChange::new(ChangeAction::Insert, room(a)));
        view.apply_room_change(RowChange::new(ChangeAction::Insert, room(b)));

        assert_eq!(view.rooms[0].id, b);
        assert_eq!(view.rooms[1].id, a);
        // First room was auto-selected; later inserts do not steal it.
        assert_eq!(view.selected_room_id, Some(a));
    }

    #[test]
    fn duplicate_insert_is_ignored() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a), room(b)]);

        view.apply_room_change(RowChange::new(ChangeAction::Insert, room(b)));

        let room_ids: Vec<_> = view.rooms.iter().map(|r| r.id).collect();
        assert_eq!(room_ids, vec![a, b]);
    }

    #[test]
    fn update_replaces_matching_room() {
        let (a, _) = ids();
        let mut view = ChatView::new(vec![room(a)]);

        let mut renamed = room(a);
        renamed.topic = "Sunday nets".into();
        view.apply_room_change(RowChange::new(ChangeAction::Update, renamed));

        assert_eq!(view.rooms.len(), 1);
        assert_eq!(view.rooms[0].topic, "Sunday nets");
    }

    #[test]
    fn update_for_absent_room_is_a_noop() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a)]);

        view.apply_room_change(RowChange::new(ChangeAction::Update, room(b)));

        assert_eq!(view.rooms.len(), 1);
        assert_eq!(view.rooms[0].id, a);
    }

    #[test]
    fn deleting_selected_room_reselects_first_remaining() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a), room(b)]);
        assert_eq!(view.selected_room_id, Some(a));

        let moved = view.apply_room_change(RowChange::new(ChangeAction::Delete, room(a)));

        assert!(moved);
        assert_eq!(view.selected_room_id, Some(b));
    }

    #[test]
    fn deleting_last_room_clears_selection() {
        let (a, _) = ids();
        let mut view = ChatView::new(vec![room(a)]);

        view.apply_room_change(RowChange::new(ChangeAction::Delete, room(a)));

        assert!(view.rooms.is_empty());
        assert_eq!(view.selected_room_id, None);
    }

    #[test]
    fn deleting_unselected_room_keeps_selection() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a), room(b)]);

        let moved = view.apply_room_change(RowChange::new(ChangeAction::Delete, room(b)));

        assert!(!moved);
        assert_eq!(view.selected_room_id, Some(a));
    }

    #[test]
    fn messages_for_other_rooms_never_apply() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a), room(b)]);

        view.apply_message_change(RowChange::new(
            ChangeAction::Insert,
            message(Uuid::now_v7(), b),
        ));

        assert!(view.messages.is_empty());
    }

    #[test]
    fn message_merge_is_idempotent_and_ordered() {
        let (a, _) = ids();
        let mut view = ChatView::new(vec![room(a)]);
        let m1 = message(Uuid::now_v7(), a);
        let m2 = message(Uuid::now_v7(), a);

        view.apply_message_change(RowChange::new(ChangeAction::Insert, m1.clone()));
        view.apply_message_change(RowChange::new(ChangeAction::Insert, m2.clone()));
        view.apply_message_change(RowChange::new(ChangeAction::Insert, m1.clone()));

        let ids: Vec<_> = view.messages.iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![m1.id, m2.id]);
    }

    #[test]
    fn message_delete_removes_entry() {
        let (a, _) = ids();
        let mut view = ChatView::new(vec![room(a)]);
        let m = message(Uuid::now_v7(), a);

        view.apply_message_change(RowChange::new(ChangeAction::Insert, m.clone()));
        view.apply_message_change(RowChange::new(ChangeAction::Delete, m));

        assert!(view.messages.is_empty());
    }

    #[test]
    fn selecting_a_room_clears_stale_messages() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a), room(b)]);
        view.apply_message_change(RowChange::new(
            ChangeAction::Insert,
            message(Uuid::now_v7(), a),
        ));

        assert!(view.select_room(b));

        assert_eq!(view.selected_room_id, Some(b));
        assert!(view.messages.is_empty());
    }

    #[test]
    fn selecting_unknown_room_is_rejected() {
        let (a, b) = ids();
        let mut view = ChatView::new(vec![room(a)]);

        assert!(!view.select_room(b));
        assert_eq!(view.selected_room_id, Some(a));
    }
}
