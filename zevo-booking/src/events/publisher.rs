use zevo_shared::clients::rabbitmq::RabbitMQClient;
use zevo_shared::types::event::{payloads, routing_keys, Event};

use crate::models::BookingPayload;

pub async fn publish_booking_requested(rabbitmq: &RabbitMQClient, payload: &BookingPayload) {
    let event = Event::new(
        "zevo-booking",
        routing_keys::BOOKING_REQUESTED,
        payloads::BookingRequested {
            booker_email: payload.booker_email.clone(),
            arena: payload.booking.arena.clone(),
            sport: payload.booking.sport.clone(),
            location: payload.booking.location.clone(),
            price: payload.booking.price.clone(),
        },
    );

    if let Err(e) = rabbitmq.publish(routing_keys::BOOKING_REQUESTED, &event).await {
        tracing::error!(error = %e, "failed to publish booking.request.sent event");
    }
}
