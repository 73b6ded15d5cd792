use async_trait::async_trait;
use chrono::NaiveDate;
use clinicdesk_core::booking::AppointmentStore;
use clinicdesk_core::models::{
    appointment::Appointment,
    time_slot::{BookedSet, TimeSlot},
    user::Doctor,
};
use eyre::Result;

use crate::repositories::{appointment, doctor};
use crate::DbPool;

/// [`AppointmentStore`] backed by the clinic's SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

#[async_trait]
impl AppointmentStore for SqliteStore {
    async fn fetch_booked_slots(&self, doctor_id: i64, date: NaiveDate) -> Result<BookedSet> {
        appointment::get_booked_slots(&self.pool, doctor_id, date).await
    }

    async fn persist_appointment(
        &self,
        doctor_id: i64,
        patient_id: i64,
        date: NaiveDate,
        time: TimeSlot,
    ) -> Result<Appointment> {
        let row = appointment::create_appointment(&self.pool, doctor_id, patient_id, date, time).await?;
        Appointment::try_from(row)
    }

    async fn fetch_doctors(&self) -> Result<Vec<Doctor>> {
        let doctors = doctor::get_all_doctors(&self.pool).await?;
        Ok(doctors.into_iter().map(Doctor::from).collect())
    }
}
