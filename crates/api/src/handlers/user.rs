use axum::{extract::State, Json};
use clinicdesk_core::models::user::User;
use clinicdesk_db::repositories::user;
use std::sync::Arc;

use crate::{middleware::error_handling::AppError, ApiState};

/// Every login account with its role, for the admin overview.
#[axum::debug_handler]
pub async fn list_users(State(state): State<Arc<ApiState>>) -> Result<Json<Vec<User>>, AppError> {
    let users = user::get_all_users(&state.db_pool)
        .await?
        .into_iter()
        .map(|u| u.into_user())
        .collect::<eyre::Result<Vec<_>>>()?;

    Ok(Json(users))
}
