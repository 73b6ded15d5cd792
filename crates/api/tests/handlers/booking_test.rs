use axum::http::StatusCode;
use clinicdesk_core::models::{
    appointment::{Appointment, AvailableSlotsResponse, DoctorAppointment},
    time_slot::TimeSlot,
};
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::test_utils::{days_before_today, days_from_today, today, TestContext};

async fn book(ctx: &TestContext, doctor_id: i64, patient_id: i64, date: &str, time: &str) -> axum_test::TestResponse {
    ctx.server
        .post("/api/appointments")
        .json(&json!({
            "doctor_id": doctor_id,
            "patient_id": patient_id,
            "date": date,
            "time": time,
        }))
        .await
}

#[test_log::test(tokio::test)]
async fn test_fresh_doctor_has_full_grid() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let date = days_from_today(3);

    let response = ctx
        .server
        .get(&format!("/api/doctors/{}/slots", doctor.doctor_id))
        .add_query_param("date", date.to_string())
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.json::<AvailableSlotsResponse>();
    assert_eq!(body.doctor_id, doctor.doctor_id);
    assert_eq!(body.date, date);
    assert_eq!(body.slots.len(), 49);
    assert_eq!(body.slots.first(), Some(&TimeSlot::new(10, 0).unwrap()));
    assert_eq!(body.slots.last(), Some(&TimeSlot::new(18, 0).unwrap()));
}

#[test_log::test(tokio::test)]
async fn test_booking_removes_slot_and_blocks_double_booking() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let first = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let second = ctx.create_patient("taro", "Taro Yamada").await;
    let date = days_from_today(1).to_string();

    let response = book(&ctx, doctor.doctor_id, first.patient_id, &date, "11:30").await;
    assert_eq!(response.status_code(), StatusCode::CREATED);
    let appointment = response.json::<Appointment>();
    assert_eq!(appointment.patient_id, first.patient_id);
    assert_eq!(appointment.time.to_string(), "11:30");

    let slots = ctx
        .server
        .get(&format!("/api/doctors/{}/slots", doctor.doctor_id))
        .add_query_param("date", &date)
        .await
        .json::<AvailableSlotsResponse>()
        .slots;
    assert_eq!(slots.len(), 48);
    assert!(!slots.contains(&TimeSlot::new(11, 30).unwrap()));

    let conflict = book(&ctx, doctor.doctor_id, second.patient_id, &date, "11:30").await;
    assert_eq!(conflict.status_code(), StatusCode::CONFLICT);
    assert_eq!(
        conflict.json::<Value>()["error"],
        "The 11:30 slot is already booked"
    );

    let list = ctx
        .server
        .get(&format!("/api/doctors/{}/appointments", doctor.doctor_id))
        .await
        .json::<Vec<DoctorAppointment>>();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].patient_name, "Hanako Suzuki");
}

#[test_log::test(tokio::test)]
async fn test_same_slot_with_other_doctor_is_free() {
    let ctx = TestContext::new().await;
    let ito = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let kato = ctx.create_doctor("dr_kato", "Dr. Kato").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let date = days_from_today(2).to_string();

    let a = book(&ctx, ito.doctor_id, patient.patient_id, &date, "14:00").await;
    let b = book(&ctx, kato.doctor_id, patient.patient_id, &date, "14:00").await;

    assert_eq!(a.status_code(), StatusCode::CREATED);
    assert_eq!(b.status_code(), StatusCode::CREATED);
}

#[test_log::test(tokio::test)]
async fn test_past_date_is_rejected_before_conflict_check() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let yesterday = days_before_today(1).to_string();

    let response = book(&ctx, doctor.doctor_id, patient.patient_id, &yesterday, "10:00").await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    let message = response.json::<Value>()["error"].as_str().unwrap().to_string();
    assert!(message.contains("past date"), "{}", message);
}

#[test_log::test(tokio::test)]
async fn test_today_is_bookable() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;

    let response = book(&ctx, doctor.doctor_id, patient.patient_id, &today().to_string(), "10:00").await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
}

#[test_log::test(tokio::test)]
async fn test_unknown_doctor_or_patient() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let date = days_from_today(1).to_string();

    let no_doctor = book(&ctx, 999, patient.patient_id, &date, "10:00").await;
    let no_patient = book(&ctx, doctor.doctor_id, 999, &date, "10:00").await;
    let no_slots = ctx
        .server
        .get("/api/doctors/999/slots")
        .add_query_param("date", &date)
        .await;

    assert_eq!(no_doctor.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(no_patient.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(no_slots.status_code(), StatusCode::NOT_FOUND);
}

#[test_log::test(tokio::test)]
async fn test_malformed_time_is_rejected() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let date = days_from_today(1).to_string();

    let response = book(&ctx, doctor.doctor_id, patient.patient_id, &date, "25:00").await;

    assert!(response.status_code().is_client_error());
}

#[test_log::test(tokio::test)]
async fn test_deleting_patient_frees_their_slots() {
    let ctx = TestContext::new().await;
    let doctor = ctx.create_doctor("dr_ito", "Dr. Ito").await;
    let patient = ctx.create_patient("hanako", "Hanako Suzuki").await;
    let date = days_from_today(5).to_string();

    book(&ctx, doctor.doctor_id, patient.patient_id, &date, "15:10").await;
    ctx.server
        .delete(&format!("/api/patients/{}", patient.patient_id))
        .await;

    let slots = ctx
        .server
        .get(&format!("/api/doctors/{}/slots", doctor.doctor_id))
        .add_query_param("date", &date)
        .await
        .json::<AvailableSlotsResponse>()
        .slots;
    assert_eq!(slots.len(), 49);
}
