use std::sync::Arc;

use diesel::prelude::*;
use futures_lite::StreamExt;
use lapin::options::BasicAckOptions;
use tokio::sync::watch;
use uuid::Uuid;

use zevo_shared::clients::store::{caps, keys};
use zevo_shared::errors::AppError;
use zevo_shared::types::event::routing_keys;
use zevo_shared::types::{Event, RowChange};

use crate::models::{ChatRoom, RoomMessage};
use crate::schema::messages;
use crate::AppState;

/// Listen for room change events and merge them into the shared view.
/// When a merge moves the selection cursor, the message feed is told to
/// re-scope its subscription.
pub async fn listen_room_changes(state: Arc<AppState>) -> anyhow::Result<()> {
    let mut consumer = state
        .rabbitmq
        .subscribe("zevo-chat.room-events", &[routing_keys::CHAT_ROOM_EVENTS])
        .await?;

    tracing::info!("listening for room change events");

    while let Some(delivery) = consumer.next().await {
        match delivery {
            Ok(delivery) => {
                match serde_json::from_slice::<Event<RowChange<ChatRoom>>>(&delivery.data) {
                    Ok(event) => {
                        let action = event.data.action;
                        let room_id = event.data.row.id;

                        let (selection_moved, selected, rooms) = {
                            let mut view = state.view.write().await;
                            let moved = view.apply_room_change(event.data);
                            (moved, view.selected_room_id, view.rooms.clone())
                        };

                        tracing::debug!(
                            action = %action.as_str(),
                            room_id = %room_id,
                            selection_moved,
                            "room change applied"
                        );

                        if let Err(e) = state
                            .store
                            .set_list_head(keys::ARENA_CHAT_ROOMS, rooms, caps::ARENA_CHAT_ROOMS)
                            .await
                        {
                            tracing::warn!(error = %e, "failed to snapshot rooms");
                        }

                        if selection_moved {
                            let _ = state.selection_tx.send(selected);
                        }
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "failed to deserialize room change event");
                    }
                }
                let _ = delivery.ack(BasicAckOptions::default()).await;
            }
            Err(e) => {
                tracing::error!(error = %e, "room consumer error");
            }
        }
    }

    Ok(())
}

/// Maintain the message feed for the selected room. Each selection gets
/// its own room-scoped consumer; the previous one is cancelled before the
/// next opens so a disposed view never receives stale events.
pub async fn run_message_feed(
    state: Arc<AppState>,
    mut selection_rx: watch::Receiver<Option<Uuid>>,
) -> anyhow::Result<()> {
    loop {
        let selected = *selection_rx.borrow_and_update();

        let Some(room_id) = selected else {
            // Nothing selected; park until the cursor moves.
            if selection_rx.changed().await.is_err() {
                return Ok(());
            }
            continue;
        };

        load_initial_messages(&state, room_id).await;

        let queue = format!("zevo-chat.messages.{room_id}");
        let consumer_tag = format!("{queue}-consumer");
        let mut consumer = state
            .rabbitmq
            .subscribe_scoped(&queue, &routing_keys::messages_for_room(room_id))
            .await?;

        tracing::info!(room_id = %room_id, "message feed attached");

        loop {
            tokio::select! {
                changed = selection_rx.changed() => {
                    if let Err(e) = state.rabbitmq.cancel(&consumer_tag).await {
                        tracing::warn!(error = %e, "failed to cancel message consumer");
                    }
                    if changed.is_err() {
                        return Ok(());
                    }
                    tracing::info!(room_id = %room_id, "message feed detached");
                    break;
                }
                delivery = consumer.next() => {
                    let Some(delivery) = delivery else { break };
                    match delivery {
                        Ok(delivery) => {
                            apply_message_delivery(&state, &delivery.data).await;
                            let _ = delivery.ack(BasicAckOptions::default()).await;
                        }
                        Err(e) => {
                            tracing::error!(error = %e, "message consumer error");
                        }
                    }
                }
            }
        }
    }
}

async fn apply_message_delivery(state: &AppState, payload: &[u8]) {
    match serde_json::from_slice::<Event<RowChange<RoomMessage>>>(payload) {
        Ok(event) => {
            let snapshot = {
                let mut view = state.view.write().await;
                view.apply_message_change(event.data);
                view.messages.clone()
            };

            if let Err(e) = state
                .store
                .set_list_tail(keys::ARENA_CHAT_MESSAGES, snapshot, caps::ARENA_CHAT_MESSAGES)
                .await
            {
                tracing::warn!(error = %e, "failed to snapshot messages");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to deserialize message change event");
        }
    }
}

/// Seed the view with the selected room's history before live events
/// stream in. A query failure leaves the list empty; the user reloads.
async fn load_initial_messages(state: &AppState, room_id: Uuid) {
    let loaded = load_room_messages(state, room_id);

    match loaded {
        Ok(history) => {
            let snapshot = {
                let mut view = state.view.write().await;
                if view.selected_room_id != Some(room_id) {
                    return; // selection moved while loading
                }
                view.load_messages(history);
                view.messages.clone()
            };
            if let Err(e) = state
                .store
                .set_list_tail(keys::ARENA_CHAT_MESSAGES, snapshot, caps::ARENA_CHAT_MESSAGES)
                .await
            {
                tracing::warn!(error = %e, "failed to snapshot messages");
            }
        }
        Err(e) => {
            tracing::error!(error = %e, room_id = %room_id, "failed to load room history");
        }
    }
}

fn load_room_messages(state: &AppState, room_id: Uuid) -> Result<Vec<RoomMessage>, AppError> {
    let mut conn = state.db.get().map_err(|e| AppError::internal(e.to_string()))?;

    let history = messages::table
        .filter(messages::room_id.eq(room_id))
        .order(messages::created_at.asc())
        .limit(caps::ARENA_CHAT_MESSAGES as i64)
        .load::<RoomMessage>(&mut conn)?;

    Ok(history)
}
