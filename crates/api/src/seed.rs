//! Demo accounts so a fresh database can be logged into straight away.

use clinicdesk_db::{
    repositories::{doctor, patient, user},
    DbPool,
};
use clinicdesk_core::models::user::Role;
use eyre::Result;
use tracing::info;

use crate::middleware::auth::hash_password;

pub const ADMIN_USERNAME: &str = "admin";
pub const DOCTOR_USERNAME: &str = "doctor";
pub const PATIENT_USERNAME: &str = "patient";

/// Creates one admin, one doctor and one patient account.
///
/// Accounts whose username already exists are left untouched, so running
/// this twice is harmless. Returns how many accounts were created.
pub async fn seed_demo_accounts(pool: &DbPool) -> Result<usize> {
    let mut created = 0;

    if user::find_by_username(pool, ADMIN_USERNAME).await?.is_none() {
        let hash = hash_password("admin_password")?;
        user::create_user(pool, ADMIN_USERNAME, &hash, Role::Admin).await?;
        created += 1;
    }

    if user::find_by_username(pool, DOCTOR_USERNAME).await?.is_none() {
        let hash = hash_password("doctor_password")?;
        doctor::create_doctor(pool, DOCTOR_USERNAME, &hash, "Dr. Sato", "Internal Medicine").await?;
        created += 1;
    }

    if user::find_by_username(pool, PATIENT_USERNAME).await?.is_none() {
        let hash = hash_password("patient_password")?;
        patient::create_patient(pool, PATIENT_USERNAME, &hash, "Hanako Suzuki").await?;
        created += 1;
    }

    info!("Seeded {} demo accounts", created);
    Ok(created)
}
