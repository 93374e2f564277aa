use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

mod config;
mod events;
mod models;
mod routes;
mod services;

use config::AppConfig;
use zevo_shared::clients::email::EmailClient;
use zevo_shared::clients::rabbitmq::RabbitMQClient;

pub struct AppState {
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
    pub email: EmailClient,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zevo_shared::middleware::init_tracing("zevo-booking");

    let config = AppConfig::load()?;
    let port = config.port;

    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;
    let email = EmailClient::new(&config.resend_api_key, &config.from_email);
    if !email.is_configured() {
        tracing::warn!("no Resend API key set, booking requests will be rejected");
    }

    let state = Arc::new(AppState { config, rabbitmq, email });

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Bookings
        .route("/bookings", post(routes::bookings::create_booking))
        // Arena catalog
        .route("/arenas", get(routes::arenas::list_arenas))
        .route("/arenas/:id", get(routes::arenas::get_arena))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "zevo-booking starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
