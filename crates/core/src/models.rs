pub mod appointment;
pub mod time_slot;
pub mod user;
