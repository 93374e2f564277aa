use axum::{routing::{get, put, delete}, Router};
use diesel::prelude::*;
use std::sync::Arc;
use tokio::sync::{watch, RwLock};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use uuid::Uuid;

mod config;
mod events;
mod models;
mod routes;
mod schema;
mod sync;

use config::AppConfig;
use models::ChatRoom;
use schema::arena_chat_rooms;
use sync::ChatView;
use zevo_shared::clients::db::{create_pool, DbPool};
use zevo_shared::clients::rabbitmq::RabbitMQClient;
use zevo_shared::clients::redis::RedisClient;
use zevo_shared::clients::store::{caps, LocalStore};

pub struct AppState {
    pub db: DbPool,
    pub config: AppConfig,
    pub rabbitmq: RabbitMQClient,
    pub store: LocalStore,
    pub view: RwLock<ChatView>,
    pub selection_tx: watch::Sender<Option<Uuid>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    zevo_shared::middleware::init_tracing("zevo-chat");

    let config = AppConfig::load()?;
    let port = config.port;

    let db = create_pool(&config.database_url)?;
    let rabbitmq = RabbitMQClient::connect(&config.rabbitmq_url).await?;
    let redis = RedisClient::connect(&config.redis_url).await?;
    let store = LocalStore::new(redis);

    // Seed the live view from the store of record before subscribing.
    let initial_rooms = {
        let mut conn = db.get()?;
        arena_chat_rooms::table
            .order(arena_chat_rooms::created_at.desc())
            .limit(caps::ARENA_CHAT_ROOMS as i64)
            .load::<ChatRoom>(&mut conn)?
    };
    let view = ChatView::new(initial_rooms);
    let (selection_tx, selection_rx) = watch::channel(view.selected_room_id);

    let state = Arc::new(AppState {
        db,
        config,
        rabbitmq,
        store,
        view: RwLock::new(view),
        selection_tx,
    });

    // Room change subscriber keeps the view's room list in sync.
    let room_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = events::subscriber::listen_room_changes(room_state).await {
            tracing::error!(error = %e, "room change subscriber failed");
        }
    });

    // Message feed follows the selection cursor.
    let feed_state = state.clone();
    tokio::spawn(async move {
        if let Err(e) = events::subscriber::run_message_feed(feed_state, selection_rx).await {
            tracing::error!(error = %e, "message feed failed");
        }
    });

    let app = Router::new()
        // Health
        .route("/health", get(routes::health::health_check))
        // Rooms
        .route("/rooms", get(routes::rooms::list_rooms).post(routes::rooms::create_room))
        .route("/rooms/:id", get(routes::rooms::get_room)
            .put(routes::rooms::update_room)
            .delete(routes::rooms::delete_room))
        // Messages
        .route("/rooms/:id/messages", get(routes::messages::list_messages)
            .post(routes::messages::send_message))
        .route("/messages/:id", delete(routes::messages::delete_message))
        // Live synchronized view
        .route("/live", get(routes::live::get_live_view))
        .route("/live/select", put(routes::live::select_room))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{port}");
    tracing::info!(addr = %addr, "zevo-chat starting");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
