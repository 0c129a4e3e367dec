//! Patient registry operations.
//!
//! Same shape as the agenda module: pure reads over a loaded collection,
//! mutations as load → transform → save-whole-collection cycles.

use chrono::{NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Gender, MedicalHistoryEntry, Patient, PatientStatus};
use crate::store::{CollectionStore, StoreError};

#[derive(Error, Debug)]
pub enum PatientsError {
    #[error("Patient not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatient {
    pub name: String,
    pub cedula: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub notes: Option<String>,
}

/// Editable fields of an existing record. The whole record is replaced
/// on save; cached `patient_name` copies on appointments are NOT
/// rewritten when a patient is renamed.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatientUpdate {
    pub name: String,
    pub cedula: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub status: PatientStatus,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewHistoryEntry {
    pub date: NaiveDate,
    pub treatment: String,
    pub notes: String,
    pub evolution: String,
}

/// Case-insensitive substring search over name and email; plain
/// substring over cedula. An empty term matches everything.
pub fn search(patients: &[Patient], term: &str) -> Vec<Patient> {
    let needle = term.to_lowercase();
    patients
        .iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.cedula.contains(term)
                || p.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Registers a new patient: starts Active, zero treatments, empty history.
pub fn create_patient(
    patients: &dyn CollectionStore<Patient>,
    request: NewPatient,
) -> Result<Patient, PatientsError> {
    let now = Utc::now();
    let patient = Patient {
        id: Uuid::new_v4(),
        name: request.name,
        cedula: request.cedula,
        phone: request.phone,
        email: request.email,
        address: request.address,
        birth_date: request.birth_date,
        gender: request.gender,
        treatments: 0,
        status: PatientStatus::Active,
        notes: request.notes,
        medical_history: Vec::new(),
        created_at: now,
        updated_at: now,
    };

    let mut all = patients.load()?;
    all.push(patient.clone());
    patients.save(&all)?;
    Ok(patient)
}

pub fn update_patient(
    patients: &dyn CollectionStore<Patient>,
    id: Uuid,
    update: PatientUpdate,
) -> Result<Patient, PatientsError> {
    let mut all = patients.load()?;
    let patient = all
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(PatientsError::NotFound(id))?;

    patient.name = update.name;
    patient.cedula = update.cedula;
    patient.phone = update.phone;
    patient.email = update.email;
    patient.address = update.address;
    patient.birth_date = update.birth_date;
    patient.gender = update.gender;
    patient.status = update.status;
    patient.notes = update.notes;
    patient.updated_at = Utc::now();
    let updated = patient.clone();

    patients.save(&all)?;
    Ok(updated)
}

pub fn delete_patient(
    patients: &dyn CollectionStore<Patient>,
    id: Uuid,
) -> Result<(), PatientsError> {
    let all = patients.load()?;
    let remaining: Vec<Patient> = all.into_iter().filter(|p| p.id != id).collect();
    patients.save(&remaining)?;
    Ok(())
}

/// Appends a session to the embedded history and bumps the denormalized
/// treatments counter.
pub fn add_history_entry(
    patients: &dyn CollectionStore<Patient>,
    id: Uuid,
    entry: NewHistoryEntry,
) -> Result<Patient, PatientsError> {
    let mut all = patients.load()?;
    let patient = all
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(PatientsError::NotFound(id))?;

    patient.medical_history.push(MedicalHistoryEntry {
        id: Uuid::new_v4(),
        date: entry.date,
        treatment: entry.treatment,
        notes: entry.notes,
        evolution: entry.evolution,
    });
    patient.treatments += 1;
    patient.updated_at = Utc::now();
    let updated = patient.clone();

    patients.save(&all)?;
    Ok(updated)
}

/// Status breakdown for the registry header and reports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientStats {
    pub total: usize,
    pub active: usize,
    pub follow_up: usize,
    pub discharged: usize,
}

pub fn patient_stats(patients: &[Patient]) -> PatientStats {
    let by_status = |status: PatientStatus| {
        patients.iter().filter(|p| p.status == status).count()
    };
    PatientStats {
        total: patients.len(),
        active: by_status(PatientStatus::Active),
        follow_up: by_status(PatientStatus::FollowUp),
        discharged: by_status(PatientStatus::Discharged),
    }
}
