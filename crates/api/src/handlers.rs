pub mod appointment;
pub mod auth;
pub mod doctor;
pub mod patient;
pub mod user;

use clinicdesk_core::errors::ClinicError;

/// Rejects blank form fields before they reach the database.
pub(crate) fn require_non_empty(field: &str, value: &str) -> Result<(), ClinicError> {
    if value.trim().is_empty() {
        return Err(ClinicError::Validation(format!("{} must not be empty", field)));
    }
    Ok(())
}
