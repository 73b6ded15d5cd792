pub mod appointment;
pub mod auth;
pub mod doctor;
pub mod health;
pub mod patient;
pub mod user;
