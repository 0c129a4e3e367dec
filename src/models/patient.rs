use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{Gender, PatientStatus};

/// A patient record. The whole medical history is embedded; entries are
/// never referenced outside their owning patient.
///
/// `treatments` is a denormalized counter kept in sync by
/// [`crate::patients::add_history_entry`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub cedula: String,
    pub phone: String,
    pub email: String,
    pub address: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub gender: Option<Gender>,
    pub treatments: u32,
    pub status: PatientStatus,
    pub notes: Option<String>,
    #[serde(default)]
    pub medical_history: Vec<MedicalHistoryEntry>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// One treatment session in a patient's embedded history.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MedicalHistoryEntry {
    pub id: Uuid,
    pub date: NaiveDate,
    pub treatment: String,
    pub notes: String,
    pub evolution: String,
}
