use axum::Json;
use zevo_shared::types::api::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("zevo-chat", env!("CARGO_PKG_VERSION")))
}
