use axum::{routing::get, Router};
use std::sync::Arc;

use crate::{handlers, ApiState};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/doctors",
            get(handlers::doctor::list_doctors).post(handlers::doctor::create_doctor),
        )
        .route(
            "/api/doctors/:id",
            get(handlers::doctor::get_doctor)
                .put(handlers::doctor::update_doctor)
                .delete(handlers::doctor::delete_doctor),
        )
        .route(
            "/api/doctors/:id/slots",
            get(handlers::appointment::available_slots),
        )
        .route(
            "/api/doctors/:id/appointments",
            get(handlers::appointment::doctor_appointments),
        )
}
