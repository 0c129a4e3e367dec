//! Agenda operations over the appointment collection.
//!
//! Every mutation is a load → transform → save-whole-collection cycle
//! against the injected [`CollectionStore`]; reads are pure functions
//! over a collection the caller already fetched.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Appointment, AppointmentStatus, Patient, SessionType};
use crate::scheduling::{available_slots, slot_grid};
use crate::store::{CollectionStore, StoreError};

#[derive(Error, Debug)]
pub enum AgendaError {
    #[error("Patient not found: {0}")]
    UnknownPatient(Uuid),

    #[error("Appointment not found: {0}")]
    NotFound(Uuid),

    #[error("Not a bookable slot: {0}")]
    InvalidTime(String),

    #[error("Slot {time} on {date} is already taken")]
    SlotTaken { date: NaiveDate, time: String },

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Booking request, as it arrives from the scheduling form.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointment {
    pub patient_id: Uuid,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
}

/// Same-day appointments, ascending by slot label.
pub fn appointments_on(appointments: &[Appointment], date: NaiveDate) -> Vec<Appointment> {
    let mut day: Vec<Appointment> = appointments
        .iter()
        .filter(|appt| appt.date == date)
        .cloned()
        .collect();
    day.sort_by(|a, b| a.time.cmp(&b.time));
    day
}

/// Books a new appointment.
///
/// The patient must exist (the booking caches their name), the time must
/// be one of the canonical slots, and the slot must still be free on
/// that date. Uniqueness of (date, time) is enforced here, at the write
/// boundary; cancelled bookings count as taken, same as in
/// [`available_slots`].
pub fn create_appointment(
    patients: &dyn CollectionStore<Patient>,
    appointments: &dyn CollectionStore<Appointment>,
    request: NewAppointment,
) -> Result<Appointment, AgendaError> {
    let patient_name = patients
        .load()?
        .into_iter()
        .find(|p| p.id == request.patient_id)
        .map(|p| p.name)
        .ok_or(AgendaError::UnknownPatient(request.patient_id))?;

    if !slot_grid().contains(&request.time) {
        return Err(AgendaError::InvalidTime(request.time));
    }

    let mut all = appointments.load()?;
    if !available_slots(Some(request.date), &all).contains(&request.time) {
        return Err(AgendaError::SlotTaken {
            date: request.date,
            time: request.time,
        });
    }

    let now = Utc::now();
    let appointment = Appointment {
        id: Uuid::new_v4(),
        patient_id: request.patient_id,
        patient_name,
        date: request.date,
        time: request.time,
        duration: request.duration,
        session_type: request.session_type,
        notes: request.notes,
        status: request.status,
        created_at: now,
        updated_at: now,
    };

    all.push(appointment.clone());
    appointments.save(&all)?;
    Ok(appointment)
}

/// Changes the status of an existing appointment (confirm / cancel).
/// Cancelling does not free the slot for rebooking.
pub fn update_status(
    appointments: &dyn CollectionStore<Appointment>,
    id: Uuid,
    status: AppointmentStatus,
) -> Result<Appointment, AgendaError> {
    let mut all = appointments.load()?;
    let appointment = all
        .iter_mut()
        .find(|appt| appt.id == id)
        .ok_or(AgendaError::NotFound(id))?;

    appointment.status = status;
    appointment.updated_at = Utc::now();
    let updated = appointment.clone();

    appointments.save(&all)?;
    Ok(updated)
}

/// Removes an appointment from the collection.
pub fn delete_appointment(
    appointments: &dyn CollectionStore<Appointment>,
    id: Uuid,
) -> Result<(), AgendaError> {
    let all = appointments.load()?;
    let remaining: Vec<Appointment> = all.into_iter().filter(|appt| appt.id != id).collect();
    appointments.save(&remaining)?;
    Ok(())
}

/// Status breakdown shown under the calendar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AgendaStats {
    pub total: usize,
    pub confirmed: usize,
    pub pending: usize,
    pub cancelled: usize,
}

pub fn agenda_stats(appointments: &[Appointment]) -> AgendaStats {
    let by_status = |status: AppointmentStatus| {
        appointments
            .iter()
            .filter(|appt| appt.status == status)
            .count()
    };
    AgendaStats {
        total: appointments.len(),
        confirmed: by_status(AppointmentStatus::Confirmed),
        pending: by_status(AppointmentStatus::Pending),
        cancelled: by_status(AppointmentStatus::Cancelled),
    }
}
