//! Dashboard aggregation — a single fetch for the home screen header.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Appointment, Patient, PatientStatus};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardData {
    pub total_patients: usize,
    pub active_patients: usize,
    pub today_appointments: usize,
    pub total_treatments: u32,
}

pub fn dashboard_data(
    patients: &[Patient],
    appointments: &[Appointment],
    today: NaiveDate,
) -> DashboardData {
    DashboardData {
        total_patients: patients.len(),
        active_patients: patients
            .iter()
            .filter(|p| p.status == PatientStatus::Active)
            .count(),
        today_appointments: appointments.iter().filter(|a| a.date == today).count(),
        total_treatments: patients.iter().map(|p| p.treatments).sum(),
    }
}
