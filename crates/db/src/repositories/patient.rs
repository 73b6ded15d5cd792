use crate::models::DbPatient;
use crate::repositories::user::{self, insert_user};
use clinicdesk_core::models::user::Role;
use eyre::{eyre, Result};
use sqlx::{Pool, Sqlite};

/// Creates the login account and the patient profile in one transaction.
pub async fn create_patient(
    pool: &Pool<Sqlite>,
    username: &str,
    password_hash: &str,
    name: &str,
) -> Result<DbPatient> {
    let mut tx = pool.begin().await?;

    let user = insert_user(&mut *tx, username, password_hash, Role::Patient).await?;

    let patient = sqlx::query_as::<_, DbPatient>(
        r#"
        INSERT INTO patients (user_id, name)
        VALUES (?1, ?2)
        RETURNING patient_id, user_id, name
        "#,
    )
    .bind(user.user_id)
    .bind(name)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Patient created: patient_id={}, user_id={}", patient.patient_id, user.user_id);
    Ok(patient)
}

pub async fn get_all_patients(pool: &Pool<Sqlite>) -> Result<Vec<DbPatient>> {
    let patients = sqlx::query_as::<_, DbPatient>(
        r#"
        SELECT patient_id, user_id, name
        FROM patients
        ORDER BY patient_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(patients)
}

pub async fn get_patient_by_id(pool: &Pool<Sqlite>, patient_id: i64) -> Result<Option<DbPatient>> {
    let patient = sqlx::query_as::<_, DbPatient>(
        r#"
        SELECT patient_id, user_id, name
        FROM patients
        WHERE patient_id = ?1
        "#,
    )
    .bind(patient_id)
    .fetch_optional(pool)
    .await?;

    Ok(patient)
}

pub async fn get_patient_by_user_id(pool: &Pool<Sqlite>, user_id: i64) -> Result<Option<DbPatient>> {
    let patient = sqlx::query_as::<_, DbPatient>(
        r#"
        SELECT patient_id, user_id, name
        FROM patients
        WHERE user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(patient)
}

pub async fn update_patient(pool: &Pool<Sqlite>, patient_id: i64, name: &str) -> Result<DbPatient> {
    let updated_patient = sqlx::query_as::<_, DbPatient>(
        r#"
        UPDATE patients
        SET name = ?2
        WHERE patient_id = ?1
        RETURNING patient_id, user_id, name
        "#,
    )
    .bind(patient_id)
    .bind(name)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| eyre!("Patient not found"))?;

    Ok(updated_patient)
}

/// Removes the patient's user account; the profile, medical record and
/// appointments follow through `ON DELETE CASCADE`.
pub async fn delete_patient(pool: &Pool<Sqlite>, patient_id: i64) -> Result<bool> {
    let Some(patient) = get_patient_by_id(pool, patient_id).await? else {
        tracing::debug!("Patient not found: patient_id={}", patient_id);
        return Ok(false);
    };

    user::delete_user(pool, patient.user_id).await
}
