use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::types::ApiErrorResponse;

/// Application error codes following the pattern E{service}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Profile errors
/// - E2xxx: Chat errors
/// - E3xxx: Booking errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    ValidationError,
    NotFound,

    // Profile (E1xxx)
    ProfileNotFound,
    InvalidProfileName,

    // Chat (E2xxx)
    RoomNotFound,
    MessageNotFound,
    UnknownArena,
    EmptyMessage,
    RoomNotInView,

    // Booking (E3xxx)
    MissingBookingDetails,
    ArenaNotFound,
    EmailNotConfigured,
    EmailSendFailed,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            // Shared
            Self::InternalError => "E0001",
            Self::ValidationError => "E0002",
            Self::NotFound => "E0003",

            // Profile
            Self::ProfileNotFound => "E1001",
            Self::InvalidProfileName => "E1002",

            // Chat
            Self::RoomNotFound => "E2001",
            Self::MessageNotFound => "E2002",
            Self::UnknownArena => "E2003",
            Self::EmptyMessage => "E2004",
            Self::RoomNotInView => "E2005",

            // Booking
            Self::MissingBookingDetails => "E3001",
            Self::ArenaNotFound => "E3002",
            Self::EmailNotConfigured => "E3003",
            Self::EmailSendFailed => "E3004",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
            Self::EmailNotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::ValidationError | Self::InvalidProfileName | Self::UnknownArena
            | Self::EmptyMessage | Self::MissingBookingDetails => StatusCode::BAD_REQUEST,
            Self::NotFound | Self::ProfileNotFound | Self::RoomNotFound
            | Self::MessageNotFound | Self::RoomNotInView | Self::ArenaNotFound => StatusCode::NOT_FOUND,
            Self::EmailSendFailed => StatusCode::BAD_GATEWAY,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known {
        code: ErrorCode,
        message: String,
        details: Option<serde_json::Value>,
    },

    #[error("internal server error")]
    Internal(#[from] anyhow::Error),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: None,
        }
    }

    pub fn with_details(code: ErrorCode, message: impl Into<String>, details: serde_json::Value) -> Self {
        Self::Known {
            code,
            message: message.into(),
            details: Some(details),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_response) = match &self {
            AppError::Known { code, message, details } => {
                let status = code.status_code();
                let mut resp = ApiErrorResponse::new(code.code(), message);
                if let Some(d) = details {
                    resp = resp.with_details(d.clone());
                }
                (status, resp)
            }
            AppError::Internal(err) => {
                tracing::error!(error = %err, "internal server error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ApiErrorResponse::new(ErrorCode::InternalError.code(), "internal server error"),
                )
            }
            AppError::Database(err) => {
                tracing::error!(error = %err, "database error");
                match err {
                    diesel::result::Error::NotFound => (
                        StatusCode::NOT_FOUND,
                        ApiErrorResponse::new(ErrorCode::NotFound.code(), "resource not found"),
                    ),
                    _ => (
                        StatusCode::INTERNAL_SERVER_ERROR,
                        ApiErrorResponse::new(ErrorCode::InternalError.code(), "database error"),
                    ),
                }
            }
        };

        (status, Json(error_response)).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
