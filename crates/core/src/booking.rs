//! # Booking Service
//!
//! Ties the slot grid and the validator to a storage backend. The service owns
//! no state of its own beyond the injected store and working hours: every call
//! reads the doctor's booked slots once and works from that snapshot.

use async_trait::async_trait;
use chrono::NaiveDate;
use tracing::{debug, info, warn};

use crate::errors::ClinicResult;
use crate::models::appointment::{Appointment, AppointmentRequest};
use crate::models::time_slot::{BookedSet, TimeSlot};
use crate::models::user::Doctor;
use crate::slots::WorkingHours;
use crate::validation::validate_request;

/// Persistence operations the booking flow depends on.
#[async_trait]
pub trait AppointmentStore: Send + Sync {
    /// Times already reserved for `doctor_id` on `date`.
    async fn fetch_booked_slots(&self, doctor_id: i64, date: NaiveDate) -> eyre::Result<BookedSet>;

    /// Inserts exactly one appointment row.
    async fn persist_appointment(
        &self,
        doctor_id: i64,
        patient_id: i64,
        date: NaiveDate,
        time: TimeSlot,
    ) -> eyre::Result<Appointment>;

    /// All doctors, ordered by id.
    async fn fetch_doctors(&self) -> eyre::Result<Vec<Doctor>>;
}

pub struct BookingService<S> {
    store: S,
    working_hours: WorkingHours,
}

impl<S: AppointmentStore> BookingService<S> {
    pub fn new(store: S, working_hours: WorkingHours) -> Self {
        Self {
            store,
            working_hours,
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn working_hours(&self) -> &WorkingHours {
        &self.working_hours
    }

    pub async fn doctors(&self) -> ClinicResult<Vec<Doctor>> {
        Ok(self.store.fetch_doctors().await?)
    }

    /// Free slots for one doctor on one date.
    pub async fn available_slots(&self, doctor_id: i64, date: NaiveDate) -> ClinicResult<Vec<TimeSlot>> {
        let booked = self.store.fetch_booked_slots(doctor_id, date).await?;
        let slots = self.working_hours.slots(&booked);

        debug!(
            doctor_id,
            %date,
            booked = booked.len(),
            free = slots.len(),
            "Computed available slots"
        );

        Ok(slots)
    }

    /// Validates `request` against the stored bookings and persists it on success.
    pub async fn book(
        &self,
        request: &AppointmentRequest,
        patient_id: i64,
        today: NaiveDate,
    ) -> ClinicResult<Appointment> {
        let booked = self
            .store
            .fetch_booked_slots(request.doctor_id, request.date)
            .await?;

        if let Err(reason) = validate_request(request, today, &booked) {
            warn!(
                doctor_id = request.doctor_id,
                patient_id,
                date = %request.date,
                time = %request.time,
                %reason,
                "Booking rejected"
            );
            return Err(reason.into());
        }

        let appointment = self
            .store
            .persist_appointment(request.doctor_id, patient_id, request.date, request.time)
            .await?;

        info!(
            appointment_id = appointment.appointment_id,
            doctor_id = appointment.doctor_id,
            patient_id = appointment.patient_id,
            date = %appointment.date,
            time = %appointment.time,
            "Appointment booked"
        );

        Ok(appointment)
    }
}
