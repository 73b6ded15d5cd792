use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use clinicdesk_core::{
    errors::ClinicError,
    models::user::{CreateDoctorRequest, Doctor, UpdateDoctorRequest},
};
use clinicdesk_db::{
    models::DbDoctor,
    repositories::{doctor, user},
    DbPool,
};
use std::sync::Arc;

use crate::{
    handlers::require_non_empty,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

pub(crate) async fn require_doctor(pool: &DbPool, doctor_id: i64) -> Result<DbDoctor, AppError> {
    let doctor = doctor::get_doctor_by_id(pool, doctor_id)
        .await?
        .ok_or_else(|| ClinicError::NotFound(format!("Doctor with ID {} not found", doctor_id)))?;
    Ok(doctor)
}

/// Doctors offered in the booking form, in id order.
#[axum::debug_handler]
pub async fn list_doctors(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Doctor>>, AppError> {
    let doctors = state.booking.doctors().await?;
    Ok(Json(doctors))
}

#[axum::debug_handler]
pub async fn create_doctor(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateDoctorRequest>,
) -> Result<(StatusCode, Json<Doctor>), AppError> {
    require_non_empty("username", &payload.username)?;
    require_non_empty("password", &payload.password)?;
    require_non_empty("name", &payload.name)?;
    require_non_empty("specialty", &payload.specialty)?;

    if user::find_by_username(&state.db_pool, &payload.username).await?.is_some() {
        return Err(AppError(ClinicError::Validation(format!(
            "Username {} is already taken",
            payload.username
        ))));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let db_doctor = doctor::create_doctor(
        &state.db_pool,
        &payload.username,
        &password_hash,
        &payload.name,
        &payload.specialty,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(db_doctor.into())))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Doctor>, AppError> {
    let db_doctor = require_doctor(&state.db_pool, id).await?;
    Ok(Json(db_doctor.into()))
}

#[axum::debug_handler]
pub async fn update_doctor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateDoctorRequest>,
) -> Result<Json<Doctor>, AppError> {
    if let Some(name) = &payload.name {
        require_non_empty("name", name)?;
    }
    if let Some(specialty) = &payload.specialty {
        require_non_empty("specialty", specialty)?;
    }

    require_doctor(&state.db_pool, id).await?;

    let db_doctor = doctor::update_doctor(
        &state.db_pool,
        id,
        payload.name.as_deref(),
        payload.specialty.as_deref(),
    )
    .await?;

    Ok(Json(db_doctor.into()))
}

/// Deletes the doctor's account together with their appointments.
#[axum::debug_handler]
pub async fn delete_doctor(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !doctor::delete_doctor(&state.db_pool, id).await? {
        return Err(AppError(ClinicError::NotFound(format!(
            "Doctor with ID {} not found",
            id
        ))));
    }

    tracing::info!("Doctor {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}
