//! # Appointment Handlers
//!
//! Slot listing and booking. Both read the doctor's current bookings through
//! [`BookingService`](clinicdesk_core::booking::BookingService); booking then
//! validates the request against that snapshot and stores it on success.
//!
//! "Today" is the server's local calendar date.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{Local, NaiveDate};
use clinicdesk_core::models::appointment::{
    Appointment, AvailableSlotsResponse, CreateAppointmentRequest, DoctorAppointment,
};
use clinicdesk_db::repositories::appointment;
use serde::Deserialize;
use std::sync::Arc;

use crate::{
    handlers::{doctor::require_doctor, patient::require_patient},
    middleware::error_handling::AppError,
    ApiState,
};

#[derive(Debug, Deserialize)]
pub struct SlotsQuery {
    /// Calendar date, `YYYY-MM-DD`
    pub date: NaiveDate,
}

/// Free slots for a doctor on the requested date.
///
/// ```text
/// GET /api/doctors/3/slots?date=2025-06-02
/// ```
#[axum::debug_handler]
pub async fn available_slots(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Query(query): Query<SlotsQuery>,
) -> Result<Json<AvailableSlotsResponse>, AppError> {
    require_doctor(&state.db_pool, id).await?;

    let slots = state.booking.available_slots(id, query.date).await?;

    Ok(Json(AvailableSlotsResponse {
        doctor_id: id,
        date: query.date,
        slots,
    }))
}

/// A doctor's bookings with patient names, earliest first.
#[axum::debug_handler]
pub async fn doctor_appointments(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Vec<DoctorAppointment>>, AppError> {
    require_doctor(&state.db_pool, id).await?;

    let appointments = appointment::get_appointments_by_doctor_id(&state.db_pool, id)
        .await?
        .into_iter()
        .map(DoctorAppointment::try_from)
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(appointments))
}

/// Books a slot.
///
/// Responds 201 with the stored appointment, 400 for a past date, 409 when
/// the slot is already taken and 404 for an unknown doctor or patient.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateAppointmentRequest>,
) -> Result<(StatusCode, Json<Appointment>), AppError> {
    require_doctor(&state.db_pool, payload.doctor_id).await?;
    require_patient(&state.db_pool, payload.patient_id).await?;

    let today = Local::now().date_naive();
    let appointment = state
        .booking
        .book(&payload.to_request(), payload.patient_id, today)
        .await?;

    Ok((StatusCode::CREATED, Json(appointment)))
}
