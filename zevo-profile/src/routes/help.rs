use axum::extract::State;
use axum::Json;
use chrono::Utc;
use std::sync::Arc;
use validator::Validate;

use zevo_shared::clients::store::keys;
use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::ApiResponse;

use crate::models::{HelpRequest, HelpRequestPayload};
use crate::AppState;

/// POST /help - append a help request
pub async fn submit_help_request(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<HelpRequestPayload>,
) -> AppResult<Json<ApiResponse<HelpRequest>>> {
    payload
        .validate()
        .map_err(|e| AppError::new(ErrorCode::ValidationError, e.to_string()))?;

    let request = HelpRequest {
        name: payload.name.trim().to_string(),
        email: payload.email.trim().to_string(),
        message: payload.message.trim().to_string(),
        submitted_at: Utc::now(),
    };

    let mut requests: Vec<HelpRequest> = state.store.get_list(keys::HELP_REQUESTS).await?;
    requests.push(request.clone());
    state.store.set_json(keys::HELP_REQUESTS, &requests).await?;

    tracing::info!(email = %request.email, "help request submitted");

    Ok(Json(ApiResponse::ok(request)))
}
