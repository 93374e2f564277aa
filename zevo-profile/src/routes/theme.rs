use axum::extract::State;
use axum::Json;
use serde::Deserialize;
use std::sync::Arc;

use zevo_shared::clients::store::keys;
use zevo_shared::errors::AppResult;
use zevo_shared::types::ApiResponse;

use crate::models::Theme;
use crate::AppState;

#[derive(Debug, Deserialize)]
pub struct SetThemeRequest {
    pub theme: Theme,
}

/// GET /theme - defaults to dark when unset
pub async fn get_theme(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<Theme>>> {
    let theme: Theme = state
        .store
        .get_json(keys::THEME)
        .await?
        .unwrap_or_default();
    Ok(Json(ApiResponse::ok(theme)))
}

/// PUT /theme
pub async fn set_theme(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SetThemeRequest>,
) -> AppResult<Json<ApiResponse<Theme>>> {
    state.store.set_json(keys::THEME, &req.theme).await?;
    Ok(Json(ApiResponse::ok(req.theme)))
}
