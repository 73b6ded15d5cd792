use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

use super::time_slot::TimeSlot;

/// A booking attempt before validation. Never stored as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentRequest {
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub appointment_id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: NaiveDate,
    pub time: TimeSlot,
    pub created_at: DateTime<Utc>,
}

impl Appointment {
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time.to_naive_time())
    }
}

/// One row of a doctor's appointment list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DoctorAppointment {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateAppointmentRequest {
    pub doctor_id: i64,
    pub patient_id: i64,
    pub date: NaiveDate,
    pub time: TimeSlot,
}

impl CreateAppointmentRequest {
    pub fn to_request(&self) -> AppointmentRequest {
        AppointmentRequest {
            doctor_id: self.doctor_id,
            date: self.date,
            time: self.time,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailableSlotsResponse {
    pub doctor_id: i64,
    pub date: NaiveDate,
    pub slots: Vec<TimeSlot>,
}
