use async_trait::async_trait;
use chrono::NaiveDate;
use mockall::mock;

use crate::booking::AppointmentStore;
use crate::models::appointment::Appointment;
use crate::models::time_slot::{BookedSet, TimeSlot};
use crate::models::user::Doctor;

// Mock storage for testing the booking flow
mock! {
    pub Store {}

    #[async_trait]
    impl AppointmentStore for Store {
        async fn fetch_booked_slots(
            &self,
            doctor_id: i64,
            date: NaiveDate,
        ) -> eyre::Result<BookedSet>;

        async fn persist_appointment(
            &self,
            doctor_id: i64,
            patient_id: i64,
            date: NaiveDate,
            time: TimeSlot,
        ) -> eyre::Result<Appointment>;

        async fn fetch_doctors(&self) -> eyre::Result<Vec<Doctor>>;
    }
}
