use axum::extract::State;
use axum::Json;
use std::sync::Arc;

use zevo_shared::errors::{AppError, AppResult, ErrorCode};
use zevo_shared::types::ApiResponse;

use crate::events::publisher;
use crate::models::{BookingDetails, BookingPayload};
use crate::services::booking_service;
use crate::AppState;

/// POST /bookings - relay a booking request to the bookings inbox
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<BookingPayload>,
) -> AppResult<Json<ApiResponse<BookingDetails>>> {
    booking_service::validate_payload(&payload)?;

    if !state.email.is_configured() {
        return Err(AppError::new(
            ErrorCode::EmailNotConfigured,
            "Email service is not configured. Please contact support.",
        ));
    }

    let recipient = &state.config.bookings_email;
    state
        .email
        .send_email(
            recipient,
            &booking_service::email_subject(&payload),
            &booking_service::email_html(&payload),
        )
        .await
        .map_err(|e| AppError::new(ErrorCode::EmailSendFailed, e))?;

    publisher::publish_booking_requested(&state.rabbitmq, &payload).await;

    tracing::info!(
        booker = %payload.booker_email,
        arena = %payload.booking.arena,
        "booking request relayed"
    );

    Ok(Json(ApiResponse::ok_with_message(
        payload.booking,
        format!("Booking sent to {recipient}"),
    )))
}
