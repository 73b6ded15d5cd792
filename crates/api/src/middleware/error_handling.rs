//! # Error Handling Middleware
//!
//! This module provides a standardized way to handle errors in the ClinicDesk API.
//! It maps domain-specific errors to appropriate HTTP status codes and JSON
//! error responses, ensuring a consistent error handling experience across
//! the entire API.
//!
//! Booking rejections are ordinary client errors: a past date is a bad request
//! and a taken slot is a conflict. Both carry the validator's message so the
//! front end can show it and let the user pick again.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use clinicdesk_core::errors::{ClinicError, RejectReason};
use serde_json::json;

/// Application error wrapper that provides HTTP status code mapping
///
/// `AppError` wraps domain-specific `ClinicError` instances and implements
/// `IntoResponse` to convert them into HTTP responses with appropriate
/// status codes and JSON payloads.
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
            ClinicError::Validation(_) => StatusCode::BAD_REQUEST,
            ClinicError::Authentication(_) => StatusCode::UNAUTHORIZED,
            ClinicError::Authorization(_) => StatusCode::FORBIDDEN,
            ClinicError::Rejected(RejectReason::PastDate { .. }) => StatusCode::BAD_REQUEST,
            ClinicError::Rejected(RejectReason::SlotAlreadyBooked { .. }) => StatusCode::CONFLICT,
            ClinicError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ClinicError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!("Request failed: {:?}", self.0);
        }

        let message = self.0.to_string();
        let body = Json(json!({ "error": message }));

        (status, body).into_response()
    }
}

/// Automatic conversion from ClinicError to AppError
///
/// This implementation allows using `?` operator with functions that return
/// `Result<T, ClinicError>` in handler functions that return `Result<T, AppError>`.
impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

/// Automatic conversion from eyre::Report to AppError
///
/// Repository failures arrive as `eyre::Report` and are surfaced as storage errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Storage(err))
    }
}
