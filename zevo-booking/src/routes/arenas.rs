use axum::extract::Path;
use axum::Json;

use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::catalog::{self, Arena};
use zevo_shared::types::ApiResponse;

/// GET /arenas - the full static catalog
pub async fn list_arenas() -> Json<ApiResponse<&'static [Arena]>> {
    Json(ApiResponse::ok(catalog::ARENAS))
}

/// GET /arenas/:id
pub async fn get_arena(Path(id): Path<String>) -> AppResult<Json<ApiResponse<&'static Arena>>> {
    let arena = catalog::find_arena(&id)
        .ok_or_else(|| AppError::new(ErrorCode::ArenaNotFound, format!("arena {id} not found")))?;

    Ok(Json(ApiResponse::ok(arena)))
}
