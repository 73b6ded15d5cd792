use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use clinicdesk_core::{
    errors::ClinicError,
    models::user::{
        CreatePatientRequest, MedicalRecord, Patient, UpdateMedicalRecordRequest,
        UpdatePatientRequest,
    },
};
use clinicdesk_db::{
    models::DbPatient,
    repositories::{medical_record, patient, user},
    DbPool,
};
use std::sync::Arc;

use crate::{
    handlers::require_non_empty,
    middleware::{auth, error_handling::AppError},
    ApiState,
};

pub(crate) async fn require_patient(pool: &DbPool, patient_id: i64) -> Result<DbPatient, AppError> {
    let patient = patient::get_patient_by_id(pool, patient_id)
        .await?
        .ok_or_else(|| ClinicError::NotFound(format!("Patient with ID {} not found", patient_id)))?;
    Ok(patient)
}

#[axum::debug_handler]
pub async fn list_patients(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<Patient>>, AppError> {
    let patients = patient::get_all_patients(&state.db_pool).await?;
    Ok(Json(patients.into_iter().map(Patient::from).collect()))
}

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Patient>), AppError> {
    require_non_empty("username", &payload.username)?;
    require_non_empty("password", &payload.password)?;
    require_non_empty("name", &payload.name)?;

    if user::find_by_username(&state.db_pool, &payload.username).await?.is_some() {
        return Err(AppError(ClinicError::Validation(format!(
            "Username {} is already taken",
            payload.username
        ))));
    }

    let password_hash = auth::hash_password(&payload.password)?;

    let db_patient =
        patient::create_patient(&state.db_pool, &payload.username, &password_hash, &payload.name)
            .await?;

    Ok((StatusCode::CREATED, Json(db_patient.into())))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<Patient>, AppError> {
    let db_patient = require_patient(&state.db_pool, id).await?;
    Ok(Json(db_patient.into()))
}

#[axum::debug_handler]
pub async fn update_patient(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdatePatientRequest>,
) -> Result<Json<Patient>, AppError> {
    require_non_empty("name", &payload.name)?;
    require_patient(&state.db_pool, id).await?;

    let db_patient = patient::update_patient(&state.db_pool, id, &payload.name).await?;

    Ok(Json(db_patient.into()))
}

/// Deletes the patient's account, medical record and appointments.
#[axum::debug_handler]
pub async fn delete_patient(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, AppError> {
    if !patient::delete_patient(&state.db_pool, id).await? {
        return Err(AppError(ClinicError::NotFound(format!(
            "Patient with ID {} not found",
            id
        ))));
    }

    tracing::info!("Patient {} deleted", id);
    Ok(StatusCode::NO_CONTENT)
}

#[axum::debug_handler]
pub async fn get_medical_record(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
) -> Result<Json<MedicalRecord>, AppError> {
    require_patient(&state.db_pool, id).await?;

    let record = medical_record::get_record(&state.db_pool, id)
        .await?
        .ok_or_else(|| ClinicError::NotFound(format!("Patient {} has no medical record yet", id)))?;

    Ok(Json(record.into()))
}

#[axum::debug_handler]
pub async fn update_medical_record(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateMedicalRecordRequest>,
) -> Result<Json<MedicalRecord>, AppError> {
    require_non_empty("record", &payload.record)?;
    require_patient(&state.db_pool, id).await?;

    let record = medical_record::upsert_record(&state.db_pool, id, &payload.record).await?;

    Ok(Json(record.into()))
}
