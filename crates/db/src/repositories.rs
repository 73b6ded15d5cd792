pub mod appointment;
pub mod doctor;
pub mod medical_record;
pub mod patient;
pub mod user;
