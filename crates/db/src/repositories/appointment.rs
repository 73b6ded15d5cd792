use crate::models::{DbAppointment, DbDoctorAppointment, parse_stored_time};
use chrono::{NaiveDate, Utc};
use clinicdesk_core::models::time_slot::{BookedSet, TimeSlot};
use eyre::Result;
use sqlx::{Pool, Sqlite};

pub async fn create_appointment(
    pool: &Pool<Sqlite>,
    doctor_id: i64,
    patient_id: i64,
    date: NaiveDate,
    time: TimeSlot,
) -> Result<DbAppointment> {
    tracing::debug!(
        "Creating appointment: doctor_id={}, patient_id={}, date={}, time={}",
        doctor_id, patient_id, date, time
    );

    let appointment = sqlx::query_as::<_, DbAppointment>(
        r#"
        INSERT INTO appointments (doctor_id, patient_id, appointment_date, appointment_time, created_at)
        VALUES (?1, ?2, ?3, ?4, ?5)
        RETURNING appointment_id, doctor_id, patient_id, appointment_date, appointment_time, created_at
        "#,
    )
    .bind(doctor_id)
    .bind(patient_id)
    .bind(date)
    .bind(time.to_string())
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(appointment)
}

/// Times already taken for one doctor on one date.
pub async fn get_booked_slots(pool: &Pool<Sqlite>, doctor_id: i64, date: NaiveDate) -> Result<BookedSet> {
    let rows = sqlx::query_as::<_, (i64, String)>(
        r#"
        SELECT appointment_id, appointment_time
        FROM appointments
        WHERE doctor_id = ?1 AND appointment_date = ?2
        "#,
    )
    .bind(doctor_id)
    .bind(date)
    .fetch_all(pool)
    .await?;

    rows.iter()
        .map(|(appointment_id, raw)| parse_stored_time(raw, *appointment_id))
        .collect()
}

pub async fn get_appointments_by_doctor_id(
    pool: &Pool<Sqlite>,
    doctor_id: i64,
) -> Result<Vec<DbDoctorAppointment>> {
    let appointments = sqlx::query_as::<_, DbDoctorAppointment>(
        r#"
        SELECT a.appointment_id, a.patient_id, p.name AS patient_name,
               a.appointment_date, a.appointment_time
        FROM appointments a
        JOIN patients p ON p.patient_id = a.patient_id
        WHERE a.doctor_id = ?1
        ORDER BY a.appointment_date ASC, a.appointment_time ASC
        "#,
    )
    .bind(doctor_id)
    .fetch_all(pool)
    .await?;

    Ok(appointments)
}
