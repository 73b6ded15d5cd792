use eyre::Result;
use sqlx::{Pool, Sqlite};
use tracing::info;

pub async fn initialize_database(pool: &Pool<Sqlite>) -> Result<()> {
    info!("Initializing database schema...");

    // Create users table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            user_id INTEGER PRIMARY KEY AUTOINCREMENT,
            username TEXT NOT NULL UNIQUE,
            password_hash TEXT NOT NULL,
            role TEXT NOT NULL CHECK (role IN ('admin', 'doctor', 'patient')),
            created_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create doctors table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS doctors (
            doctor_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE REFERENCES users(user_id) ON DELETE CASCADE,
            name TEXT NOT NULL,
            specialty TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create patients table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS patients (
            patient_id INTEGER PRIMARY KEY AUTOINCREMENT,
            user_id INTEGER NOT NULL UNIQUE REFERENCES users(user_id) ON DELETE CASCADE,
            name TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create medical_records table
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS medical_records (
            record_id INTEGER PRIMARY KEY AUTOINCREMENT,
            patient_id INTEGER NOT NULL UNIQUE REFERENCES patients(patient_id) ON DELETE CASCADE,
            record TEXT NOT NULL,
            updated_at TEXT NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create appointments table; one booking per doctor, date and time
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS appointments (
            appointment_id INTEGER PRIMARY KEY AUTOINCREMENT,
            doctor_id INTEGER NOT NULL REFERENCES doctors(doctor_id) ON DELETE CASCADE,
            patient_id INTEGER NOT NULL REFERENCES patients(patient_id) ON DELETE CASCADE,
            appointment_date TEXT NOT NULL,
            appointment_time TEXT NOT NULL,
            created_at TEXT NOT NULL,
            CONSTRAINT unique_doctor_slot UNIQUE (doctor_id, appointment_date, appointment_time)
        );
        "#,
    )
    .execute(pool)
    .await?;

    // Create indexes
    sqlx::query(
        r#"
        CREATE INDEX IF NOT EXISTS idx_appointments_doctor_date ON appointments(doctor_id, appointment_date);
        CREATE INDEX IF NOT EXISTS idx_appointments_patient_id ON appointments(patient_id);
        "#,
    )
    .execute(pool)
    .await?;

    info!("Database schema initialized successfully.");
    Ok(())
}
