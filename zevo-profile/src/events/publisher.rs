use zevo_shared::clients::rabbitmq::RabbitMQClient;
use zevo_shared::types::event::{payloads, routing_keys, Event};

use crate::models::StoredProfile;

pub async fn publish_profile_updated(rabbitmq: &RabbitMQClient, profile: &StoredProfile) {
    let event = Event::new(
        "zevo-profile",
        routing_keys::PROFILE_UPDATED,
        payloads::ProfileUpdated {
            profile_id: profile.profile_id,
            name: profile.name.clone(),
            city: profile.city.clone(),
        },
    );

    if let Err(e) = rabbitmq.publish(routing_keys::PROFILE_UPDATED, &event).await {
        tracing::error!(error = %e, "failed to publish profile.updated event");
    }
}
