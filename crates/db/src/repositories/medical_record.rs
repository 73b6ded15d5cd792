use crate::models::DbMedicalRecord;
use chrono::Utc;
use eyre::Result;
use sqlx::{Pool, Sqlite};

pub async fn get_record(pool: &Pool<Sqlite>, patient_id: i64) -> Result<Option<DbMedicalRecord>> {
    let record = sqlx::query_as::<_, DbMedicalRecord>(
        r#"
        SELECT record_id, patient_id, record, updated_at
        FROM medical_records
        WHERE patient_id = ?1
        "#,
    )
    .bind(patient_id)
    .fetch_optional(pool)
    .await?;

    Ok(record)
}

/// Each patient has at most one record; writing again replaces its text.
pub async fn upsert_record(pool: &Pool<Sqlite>, patient_id: i64, record: &str) -> Result<DbMedicalRecord> {
    let record = sqlx::query_as::<_, DbMedicalRecord>(
        r#"
        INSERT INTO medical_records (patient_id, record, updated_at)
        VALUES (?1, ?2, ?3)
        ON CONFLICT (patient_id)
        DO UPDATE SET record = excluded.record, updated_at = excluded.updated_at
        RETURNING record_id, patient_id, record, updated_at
        "#,
    )
    .bind(patient_id)
    .bind(record)
    .bind(Utc::now())
    .fetch_one(pool)
    .await?;

    Ok(record)
}
