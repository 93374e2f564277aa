use axum::Json;
use zevo_shared::types::api::HealthResponse;

pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse::healthy("zevo-profile", env!("CARGO_PKG_VERSION")))
}
