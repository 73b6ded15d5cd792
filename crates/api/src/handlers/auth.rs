use axum::{extract::State, Json};
use clinicdesk_core::{
    errors::ClinicError,
    models::user::{LoginRequest, LoginResponse, Role},
};
use clinicdesk_db::repositories::{doctor, patient};
use std::sync::Arc;

use crate::{middleware::{auth, error_handling::AppError}, ApiState};

/// Verifies credentials and tells the front end which menu to open.
#[axum::debug_handler]
pub async fn login(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let account = auth::authenticate(&state.db_pool, &payload.username, &payload.password)
        .await?
        .ok_or_else(|| ClinicError::Authentication("Invalid username or password".to_string()))?;

    let role = account.role()?;

    let (doctor_id, patient_id) = match role {
        Role::Admin => (None, None),
        Role::Doctor => {
            let profile = doctor::get_doctor_by_user_id(&state.db_pool, account.user_id).await?;
            (profile.map(|d| d.doctor_id), None)
        }
        Role::Patient => {
            let profile = patient::get_patient_by_user_id(&state.db_pool, account.user_id).await?;
            (None, profile.map(|p| p.patient_id))
        }
    };

    tracing::info!("User {} logged in as {}", account.username, role);

    Ok(Json(LoginResponse {
        user_id: account.user_id,
        username: account.username,
        role,
        doctor_id,
        patient_id,
    }))
}
