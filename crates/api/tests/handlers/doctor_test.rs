use axum::http::StatusCode;
use clinicdesk_core::models::user::Doctor;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_create_and_list_doctors() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/doctors")
        .json(&json!({
            "username": "dr_ito",
            "password": "pw",
            "name": "Dr. Ito",
            "specialty": "Dermatology",
        }))
        .await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let created = response.json::<Doctor>();
    assert_eq!(created.name, "Dr. Ito");
    assert_eq!(created.specialty, "Dermatology");

    let second = ctx.create_doctor("dr_kato", "Dr. Kato").await;

    let doctors = ctx.server.get("/api/doctors").await.json::<Vec<Doctor>>();
    assert_eq!(doctors, vec![created, second]);
}

#[test_log::test(tokio::test)]
async fn test_duplicate_username_is_rejected() {
    let ctx = TestContext::new().await;
    ctx.create_doctor("dr_ito", "Dr. Ito").await;

    let response = ctx
        .server
        .post("/api/doctors")
        .json(&json!({
            "username": "dr_ito",
            "password": "pw",
            "name": "Someone Else",
            "specialty": "Surgery",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let body = response.json::<Value>();
    assert!(body["error"].as_str().unwrap().contains("already taken"));
}

#[test_log::test(tokio::test)]
async fn test_blank_fields_are_rejected() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .post("/api/doctors")
        .json(&json!({
            "username": "dr_blank",
            "password": "pw",
            "name": "   ",
            "specialty": "Surgery",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[test_log::test(tokio::test)]
async fn test_update_doctor_keeps_unset_fields() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;

    let response = ctx
        .server
        .put(&format!("/api/doctors/{}", doctor.doctor_id))
        .json(&json!({ "specialty": "Cardiology" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated = response.json::<Doctor>();
    assert_eq!(updated.name, "Dr. Ito");
    assert_eq!(updated.specialty, "Cardiology");
}

#[test_log::test(tokio::test)]
async fn test_missing_doctor_is_not_found() {
    let ctx = TestContext::new().await;

    assert_eq!(ctx.server.get("/api/doctors/42").await.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        ctx.server
            .put("/api/doctors/42")
            .json(&json!({ "name": "Ghost" }))
            .await
            .status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(ctx.server.delete("/api/doctors/42").await.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_delete_doctor_removes_login() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;

    let response = ctx.server.delete(&format!("/api/doctors/{}", doctor.doctor_id)).await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let login = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "dr_ito", "password": "doctor_password" }))
        .await;
    assert_eq!(login.status_code(), StatusCode::UNAUTHORIZED);
    assert!(ctx.server.get("/api/doctors").await.json::<Vec<Doctor>>().is_empty());
}
