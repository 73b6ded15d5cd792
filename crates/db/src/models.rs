use chrono::{DateTime, NaiveDate, Utc};
use clinicdesk_core::models::{
    appointment::{Appointment, DoctorAppointment},
    time_slot::TimeSlot,
    user::{Doctor, MedicalRecord, Patient, Role, User},
};
use eyre::{Result, WrapErr};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbUser {
    pub user_id: i64,
    pub username: String,
    pub password_hash: String,
    pub role: String,
    pub created_at: DateTime<Utc>,
}

impl DbUser {
    pub fn role(&self) -> Result<Role> {
        self.role
            .parse()
            .map_err(|e| eyre::eyre!("User {} has a bad role: {}", self.user_id, e))
    }

    pub fn into_user(self) -> Result<User> {
        let role = self.role()?;
        Ok(User {
            user_id: self.user_id,
            username: self.username,
            role,
            created_at: self.created_at,
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctor {
    pub doctor_id: i64,
    pub user_id: i64,
    pub name: String,
    pub specialty: String,
}

impl From<DbDoctor> for Doctor {
    fn from(row: DbDoctor) -> Self {
        Doctor {
            doctor_id: row.doctor_id,
            name: row.name,
            specialty: row.specialty,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbPatient {
    pub patient_id: i64,
    pub user_id: i64,
    pub name: String,
}

impl From<DbPatient> for Patient {
    fn from(row: DbPatient) -> Self {
        Patient {
            patient_id: row.patient_id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbMedicalRecord {
    pub record_id: i64,
    pub patient_id: i64,
    pub record: String,
    pub updated_at: DateTime<Utc>,
}

impl From<DbMedicalRecord> for MedicalRecord {
    fn from(row: DbMedicalRecord) -> Self {
        MedicalRecord {
            patient_id: row.patient_id,
            record: row.record,
            updated_at: row.updated_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbAppointment {
    pub appointment_id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
    pub created_at: DateTime<Utc>,
}

impl TryFrom<DbAppointment> for Appointment {
    type Error = eyre::Report;

    fn try_from(row: DbAppointment) -> Result<Self> {
        let time = parse_stored_time(&row.appointment_time, row.appointment_id)?;
        Ok(Appointment {
            appointment_id: row.appointment_id,
            doctor_id: row.doctor_id,
            patient_id: row.patient_id,
            date: row.appointment_date,
            time,
            created_at: row.created_at,
        })
    }
}

/// Appointment joined with the patient's name for the doctor's list.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbDoctorAppointment {
    pub appointment_id: i64,
    pub patient_id: i64,
    pub patient_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: String,
}

impl TryFrom<DbDoctorAppointment> for DoctorAppointment {
    type Error = eyre::Report;

    fn try_from(row: DbDoctorAppointment) -> Result<Self> {
        let time = parse_stored_time(&row.appointment_time, row.appointment_id)?;
        Ok(DoctorAppointment {
            appointment_id: row.appointment_id,
            patient_id: row.patient_id,
            patient_name: row.patient_name,
            date: row.appointment_date,
            time,
        })
    }
}

pub(crate) fn parse_stored_time(raw: &str, appointment_id: i64) -> Result<TimeSlot> {
    raw.parse::<TimeSlot>()
        .wrap_err_with(|| format!("Appointment {} has a malformed time", appointment_id))
}
