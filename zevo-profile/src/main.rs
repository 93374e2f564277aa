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
use zevo_shared::clients::rabbitmq::RabbitMQClient;
use zevo_shared::clients::redis::RedisClient;
use zevo_shared::clients::store::LocalStore;

pub struct AppState {
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
    pub store: LocalStore,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zevo_shared::middleware::init_tracing("zevo-profile");

    let config = AppConfig::load()?;
    let port = config.port;

    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;
    let redis = RedisClient::connect(&config.redis_url).await?;
    let store = LocalStore::new(redis);

    let state = Arc::new(AppState { config, rabbitmq, store });

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Profile
        .route("/profile", get(routes::profile::get_profile).put(routes::profile::save_profile))
        .route("/profiles", get(routes::profile::list_public_profiles))
        // Help requests
        .route("/help", post(routes::help::submit_help_request))
        // Theme preference
        .route("/theme", get(routes::theme::get_theme).put(routes::theme::set_theme))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "zevo-profile starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
