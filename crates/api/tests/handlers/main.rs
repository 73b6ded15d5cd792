#[path = "../test_utils.rs"]
mod test_utils;

mod auth_test;
mod booking_test;
mod doctor_test;
mod health_test;
mod patient_test;
