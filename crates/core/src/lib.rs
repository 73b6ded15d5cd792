//! # ClinicDesk Core
//!
//! Domain types and the appointment logic shared by the storage and API crates:
//! the slot grid, the booking validator and the service that wires them to a
//! storage backend.

pub mod booking;
pub mod errors;
pub mod mock;
pub mod models;
pub mod slots;
pub mod validation;
