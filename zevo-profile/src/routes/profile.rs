use axum::extract::{Query, State};
use axum::Json;
use std::sync::Arc;

use zevo_shared::clients::store::keys;
use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::{ApiResponse, Paginated, PaginationParams};

use crate::events::publisher;
use crate::models::{SaveProfileRequest, StoredProfile};
use crate::services::profile_service;
use crate::AppState;

/// GET /profile - the client's profile
pub async fn get_profile(
    State(state): State<Arc<AppState>>,
) -> AppResult<Json<ApiResponse<StoredProfile>>> {
    let profile: StoredProfile = state
        .store
        .get_json(keys::PROFILE)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProfileNotFound, "no profile saved yet"))?;

    Ok(Json(ApiResponse::ok(profile)))
}

/// PUT /profile - create or replace the profile wholesale
pub async fn save_profile(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SaveProfileRequest>,
) -> AppResult<Json<ApiResponse<StoredProfile>>> {
    let profile = profile_service::save_profile(&state.store, &req).await?;

    publisher::publish_profile_updated(&state.rabbitmq, &profile).await;

    Ok(Json(ApiResponse::ok_with_message(
        profile,
        "Profile saved. Public Chat and Group are now available.",
    )))
}

/// GET /profiles - the public roster, most recent first
pub async fn list_public_profiles(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PaginationParams>,
) -> AppResult<Json<ApiResponse<Paginated<StoredProfile>>>> {
    let roster: Vec<StoredProfile> = state.store.get_list(keys::PUBLIC_PROFILES).await?;
    let total = roster.len() as u64;

    let page: Vec<StoredProfile> = roster
        .into_iter()
        .skip(params.offset() as usize)
        .take(params.limit() as usize)
        .collect();

    Ok(Json(ApiResponse::ok(Paginated::new(page, total, &params))))
}
