use zevo_shared::clients::rabbitmq::RabbitMQClient;
use zevo_shared::types::event::routing_keys;
use zevo_shared::types::{ChangeAction, Event, RowChange};

use crate::models::{ChatRoom, RoomMessage};

pub async fn publish_room_change(rabbitmq: &RabbitMQClient, action: ChangeAction, room: ChatRoom) {
    let routing_key = routing_keys::room_changed(action);
    let event = Event::new("zevo-chat", routing_key.clone(), RowChange::new(action, room));

    if let Err(e) = rabbitmq.publish(&routing_key, &event).await {
        tracing::error!(error = %e, routing_key = %routing_key, "failed to publish room change event");
    }
}

pub async fn publish_message_change(
    rabbitmq: &RabbitMQClient,
    action: ChangeAction,
    message: RoomMessage,
) {
    let routing_key = routing_keys::message_changed(action, message.room_id);
    let event = Event::new("zevo-chat", routing_key.clone(), RowChange::new(action, message));

    if let Err(e) = rabbitmq.publish(&routing_key, &event).await {
        tracing::error!(error = %e, routing_key = %routing_key, "failed to publish message change event");
    }
}
