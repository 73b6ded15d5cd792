use chrono::NaiveDate;
use thiserror::Error;

use crate::models::time_slot::TimeSlot;

/// Why the booking validator turned a request down.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    #[error("Cannot book an appointment on a past date: {requested} is before {today}")]
    PastDate { requested: NaiveDate, today: NaiveDate },

    #[error("The {time} slot is already booked")]
    SlotAlreadyBooked { time: TimeSlot },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TimeSlotError {
    #[error("Time out of range: {hour:02}:{minute:02}")]
    OutOfRange { hour: u32, minute: u32 },

    #[error("Malformed time {0:?}, expected HH:MM")]
    Malformed(String),
}

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Authentication error: {0}")]
    Authentication(String),

    #[error("Authorization error: {0}")]
    Authorization(String),

    #[error(transparent)]
    Rejected(#[from] RejectReason),

    #[error("Storage error: {0}")]
    Storage(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl From<TimeSlotError> for ClinicError {
    fn from(err: TimeSlotError) -> Self {
        ClinicError::Validation(err.to_string())
    }
}

pub type ClinicResult<T> = Result<T, ClinicError>;
