use axum::http::StatusCode;
use clinicdesk_core::models::user::{MedicalRecord, Patient};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::test_utils::TestContext;

#[test_log::test(tokio::test)]
async fn test_patient_crud() {
    let ctx = TestContext::new().await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;

    let fetched = ctx
        .server
        .get(&format!("/api/patients/{}", patient.patient_id))
        .await
        .json::<Patient>();
    assert_eq!(fetched, patient);

    let renamed = ctx
        .server
        .put(&format!("/api/patients/{}", patient.patient_id))
        .json(&json!({ "name": "Hanako Yamada" }))
        .await
        .json::<Patient>();
    assert_eq!(renamed.name, "Hanako Yamada");

    let all = ctx.server.get("/api/patients").await.json::<Vec<Patient>>();
    assert_eq!(all, vec![renamed]);

    let response = ctx
        .server
        .delete(&format!("/api/patients/{}", patient.patient_id))
        .await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);
    assert_eq!(
        ctx.server
            .get(&format!("/api/patients/{}", patient.patient_id))
            .await
            .status_code(),
        StatusCode::NOT_FOUND
    );
}

#[test_log::test(tokio::test)]
async fn test_medical_record_upsert() {
    let ctx = TestContext::new().await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let path = format!("/api/patients/{}/record", patient.patient_id);

    assert_eq!(ctx.server.get(&path).await.status_code(), StatusCode::NOT_FOUND);

    let first = ctx
        .server
        .put(&path)
        .json(&json!({ "record": "Allergic to penicillin" }))
        .await;
    assert_eq!(first.status_code(), StatusCode::OK);

    ctx.server
        .put(&path)
        .json(&json!({ "record": "Allergic to penicillin. Asthma." }))
        .await;

    let record = ctx.server.get(&path).await.json::<MedicalRecord>();
    assert_eq!(record.patient_id, patient.patient_id);
    assert_eq!(record.record, "Allergic to penicillin. Asthma.");
}

#[test_log::test(tokio::test)]
async fn test_record_for_missing_patient() {
    let ctx = TestContext::new().await;

    let response = ctx
        .server
        .put("/api/patients/7/record")
        .json(&json!({ "record": "anything" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_blank_medical_record_is_rejected() {
    let ctx = TestContext::new().await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let path = format!("/api/patients/{}/record", patient.patient_id);

    let response = ctx.server.put(&path).json(&json!({ "record": "   " })).await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    assert_eq!(ctx.server.get(&path).await.status_code(), StatusCode::NOT_FOUND);
}
