use crate::models::DbDoctor;
use crate::repositories::user::{self, insert_user};
use clinicdesk_core::models::user::Role;
use eyre::{eyre, Result};
use sqlx::{Pool, Sqlite};

/// Creates the login account and the doctor profile in one transaction.
pub async fn create_doctor(
    pool: &Pool<Sqlite>,
    username: &str,
    password_hash: &str,
    name: &str,
    specialty: &str,
) -> Result<DbDoctor> {
    let mut tx = pool.begin().await?;

    let user = insert_user(&mut *tx, username, password_hash, Role::Doctor).await?;

    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        INSERT INTO doctors (user_id, name, specialty)
        VALUES (?1, ?2, ?3)
        RETURNING doctor_id, user_id, name, specialty
        "#,
    )
    .bind(user.user_id)
    .bind(name)
    .bind(specialty)
    .fetch_one(&mut *tx)
    .await?;

    tx.commit().await?;

    tracing::debug!("Doctor created: doctor_id={}, user_id={}", doctor.doctor_id, user.user_id);
    Ok(doctor)
}

pub async fn get_all_doctors(pool: &Pool<Sqlite>) -> Result<Vec<DbDoctor>> {
    let doctors = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT doctor_id, user_id, name, specialty
        FROM doctors
        ORDER BY doctor_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(doctors)
}

pub async fn get_doctor_by_id(pool: &Pool<Sqlite>, doctor_id: i64) -> Result<Option<DbDoctor>> {
    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT doctor_id, user_id, name, specialty
        FROM doctors
        WHERE doctor_id = ?1
        "#,
    )
    .bind(doctor_id)
    .fetch_optional(pool)
    .await?;

    Ok(doctor)
}

pub async fn get_doctor_by_user_id(pool: &Pool<Sqlite>, user_id: i64) -> Result<Option<DbDoctor>> {
    let doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        SELECT doctor_id, user_id, name, specialty
        FROM doctors
        WHERE user_id = ?1
        "#,
    )
    .bind(user_id)
    .fetch_optional(pool)
    .await?;

    Ok(doctor)
}

pub async fn update_doctor(
    pool: &Pool<Sqlite>,
    doctor_id: i64,
    name: Option<&str>,
    specialty: Option<&str>,
) -> Result<DbDoctor> {
    let doctor = get_doctor_by_id(pool, doctor_id)
        .await?
        .ok_or_else(|| eyre!("Doctor not found"))?;

    let name = name.unwrap_or(&doctor.name);
    let specialty = specialty.unwrap_or(&doctor.specialty);

    let updated_doctor = sqlx::query_as::<_, DbDoctor>(
        r#"
        UPDATE doctors
        SET name = ?2, specialty = ?3
        WHERE doctor_id = ?1
        RETURNING doctor_id, user_id, name, specialty
        "#,
    )
    .bind(doctor_id)
    .bind(name)
    .bind(specialty)
    .fetch_one(pool)
    .await?;

    Ok(updated_doctor)
}

/// Removes the doctor's user account; the profile and its appointments
/// follow through `ON DELETE CASCADE`. Returns `false` if no such doctor.
pub async fn delete_doctor(pool: &Pool<Sqlite>, doctor_id: i64) -> Result<bool> {
    let Some(doctor) = get_doctor_by_id(pool, doctor_id).await? else {
        tracing::debug!("Doctor not found: doctor_id={}", doctor_id);
        return Ok(false);
    };

    user::delete_user(pool, doctor.user_id).await
}
