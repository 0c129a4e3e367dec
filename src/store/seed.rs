//! Demo data served until a collection has been persisted for the
//! first time. Mirrors the sample records the clinic app has shipped
//! with since its first version.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use uuid::{uuid, Uuid};

use crate::models::{
    Appointment, AppointmentStatus, Gender, MedicalHistoryEntry, Patient, PatientStatus,
    SessionType,
};

pub const MARIA_ID: Uuid = uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80001");
pub const CARLOS_ID: Uuid = uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80002");
pub const ANA_ID: Uuid = uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80003");

fn ts(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or(DateTime::<Utc>::MIN_UTC)
}

fn day(year: i32, month: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, d).unwrap_or_default()
}

pub fn seed_patients() -> Vec<Patient> {
    vec![
        Patient {
            id: MARIA_ID,
            name: "María González".into(),
            cedula: "12345678".into(),
            phone: "+1234567890".into(),
            email: "maria@email.com".into(),
            address: Some("Calle Principal 123".into()),
            birth_date: Some(day(1985, 3, 15)),
            gender: Some(Gender::Female),
            treatments: 8,
            status: PatientStatus::Active,
            notes: Some("Paciente con lesión de rodilla".into()),
            medical_history: vec![MedicalHistoryEntry {
                id: uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80101"),
                date: day(2024, 1, 15),
                treatment: "Terapia manual".into(),
                notes: "Primera sesión de evaluación".into(),
                evolution: "Buena respuesta inicial".into(),
            }],
            created_at: ts(2024, 1, 1),
            updated_at: ts(2024, 1, 15),
        },
        Patient {
            id: CARLOS_ID,
            name: "Carlos Rodríguez".into(),
            cedula: "87654321".into(),
            phone: "+0987654321".into(),
            email: "carlos@email.com".into(),
            address: Some("Avenida Central 456".into()),
            birth_date: Some(day(1978, 7, 22)),
            gender: Some(Gender::Male),
            treatments: 12,
            status: PatientStatus::FollowUp,
            notes: Some("Rehabilitación post-operatoria".into()),
            medical_history: Vec::new(),
            created_at: ts(2023, 12, 15),
            updated_at: ts(2024, 1, 10),
        },
        Patient {
            id: ANA_ID,
            name: "Ana Martínez".into(),
            cedula: "11223344".into(),
            phone: "+1122334455".into(),
            email: "ana@email.com".into(),
            address: Some("Plaza Mayor 789".into()),
            birth_date: Some(day(1990, 11, 8)),
            gender: Some(Gender::Female),
            treatments: 5,
            status: PatientStatus::Discharged,
            notes: Some("Tratamiento completado exitosamente".into()),
            medical_history: Vec::new(),
            created_at: ts(2023, 11, 1),
            updated_at: ts(2024, 1, 5),
        },
    ]
}

pub fn seed_appointments() -> Vec<Appointment> {
    vec![
        Appointment {
            id: uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80201"),
            patient_id: MARIA_ID,
            patient_name: "María González".into(),
            date: day(2024, 1, 20),
            time: "10:00".into(),
            duration: 60,
            session_type: SessionType::ManualTherapy,
            notes: Some("Sesión de seguimiento".into()),
            status: AppointmentStatus::Confirmed,
            created_at: ts(2024, 1, 15),
            updated_at: ts(2024, 1, 15),
        },
        Appointment {
            id: uuid!("6f1a0c3e-9d24-4b51-8a7e-2c5d10f80202"),
            patient_id: CARLOS_ID,
            patient_name: "Carlos Rodríguez".into(),
            date: day(2024, 1, 20),
            time: "14:00".into(),
            duration: 45,
            session_type: SessionType::Rehabilitation,
            notes: Some("Control post-operatorio".into()),
            status: AppointmentStatus::Pending,
            created_at: ts(2024, 1, 15),
            updated_at: ts(2024, 1, 15),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_appointments_reference_seed_patients() {
        let patients = seed_patients();
        for appt in seed_appointments() {
            let patient = patients.iter().find(|p| p.id == appt.patient_id);
            assert!(patient.is_some());
            assert_eq!(patient.unwrap().name, appt.patient_name);
        }
    }

    #[test]
    fn seed_treatment_counters_match_shipped_data() {
        let patients = seed_patients();
        let total: u32 = patients.iter().map(|p| p.treatments).sum();
        assert_eq!(total, 25);
    }
}
