//! # Slot Generation
//!
//! Builds the grid of bookable start times for one doctor on one day. The grid
//! starts at the opening time and steps by a fixed interval up to and including
//! the closing time; anything already in the booked set is left out.
//!
//! Nothing here is cached. Every call recomputes the grid from its arguments, so
//! two calls with the same inputs always agree.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use crate::errors::{ClinicError, ClinicResult};
use crate::models::time_slot::{BookedSet, TimeSlot};

pub const DEFAULT_START: TimeSlot = TimeSlot::at_minute(10 * 60);
pub const DEFAULT_END: TimeSlot = TimeSlot::at_minute(18 * 60);
pub const DEFAULT_INTERVAL_MINUTES: u32 = 10;

/// Returns the free slots between `start_of_day` and `end_of_day`, inclusive.
///
/// The last candidate is `end_of_day` itself when the interval divides the
/// window evenly; otherwise the grid stops at the last step that does not pass
/// it. An inverted window yields an empty list.
///
/// # Example
///
/// ```
/// use std::num::NonZeroU32;
/// use clinicdesk_core::models::time_slot::{BookedSet, TimeSlot};
/// use clinicdesk_core::slots::generate_slots;
///
/// let start: TimeSlot = "10:00".parse().unwrap();
/// let end: TimeSlot = "10:30".parse().unwrap();
/// let booked: BookedSet = ["10:10".parse().unwrap()].into_iter().collect();
///
/// let free = generate_slots(start, end, NonZeroU32::new(10).unwrap(), &booked);
/// let free: Vec<String> = free.iter().map(ToString::to_string).collect();
/// assert_eq!(free, ["10:00", "10:20", "10:30"]);
/// ```
pub fn generate_slots(
    start_of_day: TimeSlot,
    end_of_day: TimeSlot,
    interval_minutes: NonZeroU32,
    booked: &BookedSet,
) -> Vec<TimeSlot> {
    let start = start_of_day.minute_of_day();
    let end = end_of_day.minute_of_day();

    (start..=end)
        .step_by(interval_minutes.get() as usize)
        // end < 1440, so every stepped value is a valid time of day
        .map(|minute| TimeSlot::at_minute(minute as u16))
        .filter(|slot| !booked.contains(slot))
        .collect()
}

/// Opening hours and grid density used when offering slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingHours {
    start_time: TimeSlot,
    end_time: TimeSlot,
    interval_minutes: NonZeroU32,
}

impl WorkingHours {
    pub fn new(start_time: TimeSlot, end_time: TimeSlot, interval_minutes: u32) -> ClinicResult<Self> {
        let interval_minutes = NonZeroU32::new(interval_minutes).ok_or_else(|| {
            ClinicError::Validation("Slot interval must be a positive number of minutes".to_string())
        })?;

        Ok(Self {
            start_time,
            end_time,
            interval_minutes,
        })
    }

    pub fn start_time(&self) -> TimeSlot {
        self.start_time
    }

    pub fn end_time(&self) -> TimeSlot {
        self.end_time
    }

    pub fn interval_minutes(&self) -> u32 {
        self.interval_minutes.get()
    }

    /// The full grid minus `booked`.
    pub fn slots(&self, booked: &BookedSet) -> Vec<TimeSlot> {
        generate_slots(self.start_time, self.end_time, self.interval_minutes, booked)
    }
}

impl Default for WorkingHours {
    fn default() -> Self {
        Self {
            start_time: DEFAULT_START,
            end_time: DEFAULT_END,
            interval_minutes: NonZeroU32::new(DEFAULT_INTERVAL_MINUTES).unwrap_or(NonZeroU32::MIN),
        }
    }
}
