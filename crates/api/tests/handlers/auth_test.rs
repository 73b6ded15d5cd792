use axum::http::StatusCode;
use clinicdesk_api::seed::seed_demo_accounts;
use clinicdesk_core::models::user::{LoginResponse, Role};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_doctor_login_returns_profile_id() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_tanaka", "Dr. Tanaka").await;

    let response = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "dr_tanaka", "password": "doctor_password" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let login = response.json::<LoginResponse>();
    assert_eq!(login.username, "dr_tanaka");
    assert_eq!(login.role, Role::Doctor);
    assert_eq!(login.doctor_id, Some(doctor.doctor_id));
    assert_eq!(login.patient_id, None);
}

#[test_log::test(tokio::test)]
async fn test_seeded_accounts_can_log_in() {
    let ctx = TestContext::new().await;
    assert_eq!(seed_demo_accounts(&ctx.pool).await.unwrap(), 3);
    assert_eq!(seed_demo_accounts(&ctx.pool).await.unwrap(), 0);

    for (username, password, role) in [
        ("admin", "admin_password", Role::Admin),
        ("doctor", "doctor_password", Role::Doctor),
        ("patient", "patient_password", Role::Patient),
    ] {
        let response = ctx
            .server
            .post("/api/auth/login")
            .json(&json!({ "username": username, "password": password }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let login = response.json::<LoginResponse>();
        assert_eq!(login.role, role);
        assert_eq!(login.patient_id.is_some(), role == Role::Patient);
        assert_eq!(login.doctor_id.is_some(), role == Role::Doctor);
    }
}

#[test_log::test(tokio::test)]
async fn test_wrong_password_and_unknown_user_look_the_same() {
    let ctx = TestContext::new().await;
    ctx.create_patient("hanako", "Hanako Suzuki").await;

    let wrong_password = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "hanako", "password": "nope" }))
        .await;
    let unknown_user = ctx
        .server
        .post("/api/auth/login")
        .json(&json!({ "username": "nobody", "password": "nope" }))
        .await;

    assert_eq!(wrong_password.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(unknown_user.status_code(), StatusCode::UNAUTHORIZED);
    assert_eq!(wrong_password.json::<Value>(), unknown_user.json::<Value>());
}

#[test_log::test(tokio::test)]
async fn test_user_listing_shows_roles_without_hashes() {
    let ctx = TestContext::new().await;
    seed_demo_accounts(&ctx.pool).await.unwrap();

    let response = ctx.server.get("/api/users").await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<Value>();
    let users = body.as_array().unwrap();
    let roles: Vec<&str> = users.iter().map(|u| u["role"].as_str().unwrap()).collect();
    assert_eq!(roles, vec!["admin", "doctor", "patient"]);
    assert!(users.iter().all(|u| u.get("password_hash").is_none()));
}
