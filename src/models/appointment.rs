use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::{AppointmentStatus, SessionType};

/// A scheduled session.
///
/// `patient_name` is a point-in-time copy of the patient's name taken at
/// booking; renaming the patient later does not rewrite it.
///
/// `time` is the wall-clock slot label ("HH:MM", 24h). Slot conflict
/// detection is exact string equality on this field; durations never
/// extend an appointment into neighbouring slots.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub patient_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub duration: u32,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub notes: Option<String>,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
