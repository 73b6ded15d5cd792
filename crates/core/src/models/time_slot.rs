use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use chrono::{NaiveDateTime, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::errors::TimeSlotError;

/// A time of day at minute precision, with no date attached.
///
/// Slots order by time of day and travel as `"HH:MM"` strings, both in JSON
/// and in the `appointments.appointment_time` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot {
    minute_of_day: u16,
}

impl TimeSlot {
    pub fn new(hour: u32, minute: u32) -> Result<Self, TimeSlotError> {
        if hour >= 24 || minute >= 60 {
            return Err(TimeSlotError::OutOfRange { hour, minute });
        }
        Ok(Self::at_minute((hour * 60 + minute) as u16))
    }

    /// Callers guarantee `minute_of_day < 1440`.
    pub(crate) const fn at_minute(minute_of_day: u16) -> Self {
        Self { minute_of_day }
    }

    pub fn hour(&self) -> u32 {
        u32::from(self.minute_of_day) / 60
    }

    pub fn minute(&self) -> u32 {
        u32::from(self.minute_of_day) % 60
    }

    pub fn minute_of_day(&self) -> u32 {
        u32::from(self.minute_of_day)
    }

    pub fn to_naive_time(&self) -> NaiveTime {
        // hour < 24 and minute < 60 always hold, so this never falls back
        NaiveTime::from_hms_opt(self.hour(), self.minute(), 0).unwrap_or(NaiveTime::MIN)
    }
}

/// Seconds and sub-second precision are dropped.
impl From<NaiveTime> for TimeSlot {
    fn from(time: NaiveTime) -> Self {
        Self::at_minute((time.hour() * 60 + time.minute()) as u16)
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeSlot {
    type Err = TimeSlotError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || TimeSlotError::Malformed(s.to_string());

        let (hour, minute) = s.split_once(':').ok_or_else(malformed)?;
        let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
        if hour.is_empty() || hour.len() > 2 || minute.len() != 2 {
            return Err(malformed());
        }
        if !digits(hour) || !digits(minute) {
            return Err(malformed());
        }
        let hour: u32 = hour.parse().map_err(|_| malformed())?;
        let minute: u32 = minute.parse().map_err(|_| malformed())?;

        TimeSlot::new(hour, minute)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = TimeSlotError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeSlot> for String {
    fn from(slot: TimeSlot) -> Self {
        slot.to_string()
    }
}

/// Slots already reserved for one doctor on one calendar date.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookedSet {
    slots: BTreeSet<TimeSlot>,
}

impl BookedSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the set from full timestamps, keeping only the time of day.
    pub fn from_datetimes<I>(datetimes: I) -> Self
    where
        I: IntoIterator<Item = NaiveDateTime>,
    {
        datetimes
            .into_iter()
            .map(|dt| TimeSlot::from(dt.time()))
            .collect()
    }

    pub fn insert(&mut self, slot: TimeSlot) -> bool {
        self.slots.insert(slot)
    }

    pub fn contains(&self, slot: &TimeSlot) -> bool {
        self.slots.contains(slot)
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TimeSlot> {
        self.slots.iter()
    }
}

impl FromIterator<TimeSlot> for BookedSet {
    fn from_iter<T: IntoIterator<Item = TimeSlot>>(iter: T) -> Self {
        Self {
            slots: iter.into_iter().collect(),
        }
    }
}

impl Extend<TimeSlot> for BookedSet {
    fn extend<T: IntoIterator<Item = TimeSlot>>(&mut self, iter: T) {
        self.slots.extend(iter);
    }
}
