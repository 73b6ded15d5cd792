use chrono::NaiveDate;

use crate::errors::RejectReason;
use crate::models::appointment::AppointmentRequest;
use crate::models::time_slot::{BookedSet, TimeSlot};

/// Marker returned when a request may be persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Accept;

/// Decides whether a booking can go ahead.
///
/// Rules run in order and the first failure wins:
///
/// 1. a date before `today` is rejected with [`RejectReason::PastDate`]
/// 2. a time already in `booked` is rejected with [`RejectReason::SlotAlreadyBooked`]
///
/// Any time of day is accepted for `today` itself, including times that have
/// already gone by.
pub fn validate(
    requested_date: NaiveDate,
    requested_time: TimeSlot,
    today: NaiveDate,
    booked: &BookedSet,
) -> Result<Accept, RejectReason> {
    if requested_date < today {
        return Err(RejectReason::PastDate {
            requested: requested_date,
            today,
        });
    }

    if booked.contains(&requested_time) {
        return Err(RejectReason::SlotAlreadyBooked {
            time: requested_time,
        });
    }

    Ok(Accept)
}

/// [`validate`] applied to a whole request.
pub fn validate_request(
    request: &AppointmentRequest,
    today: NaiveDate,
    booked: &BookedSet,
) -> Result<Accept, RejectReason> {
    validate(request.date, request.time, today, booked)
}
