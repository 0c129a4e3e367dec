use chrono::NaiveDate;

use crate::models::Appointment;

/// First bookable hour of the day.
pub const OPENING_HOUR: u32 = 8;
/// Slots are generated up to but excluding this hour.
pub const CLOSING_HOUR: u32 = 19;

/// The canonical slot grid: half-hour labels from 08:00 through 18:30,
/// ascending. Static: the same for every date, weekday and month.
pub fn slot_grid() -> Vec<String> {
    (OPENING_HOUR..CLOSING_HOUR)
        .flat_map(|hour| [format!("{hour:02}:00"), format!("{hour:02}:30")])
        .collect()
}

/// Bookable slots for `date`, given the full appointment collection.
///
/// With no date selected yet the full grid is returned. Otherwise every
/// slot whose label matches the `time` of a same-date appointment is
/// dropped. Cancelled appointments count too: a cancelled booking still
/// blocks its slot. Matching is exact string equality; durations never
/// knock out neighbouring slots.
///
/// An empty result is a valid terminal state (fully booked day) and
/// must block submission in the consuming form.
pub fn available_slots(date: Option<NaiveDate>, appointments: &[Appointment]) -> Vec<String> {
    let Some(date) = date else {
        return slot_grid();
    };

    let taken: Vec<&str> = appointments
        .iter()
        .filter(|appt| appt.date == date)
        .map(|appt| appt.time.as_str())
        .collect();

    slot_grid()
        .into_iter()
        .filter(|slot| !taken.contains(&slot.as_str()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AppointmentStatus, SessionType};
    use chrono::Utc;
    use uuid::Uuid;

    fn appt(date: &str, time: &str, duration: u32, status: AppointmentStatus) -> Appointment {
        Appointment {
            id: Uuid::new_v4(),
            patient_id: Uuid::new_v4(),
            patient_name: "Test".into(),
            date: date.parse().unwrap(),
            time: time.into(),
            duration,
            session_type: SessionType::ManualTherapy,
            notes: None,
            status,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn grid_has_22_ascending_half_hour_slots() {
        let grid = slot_grid();
        assert_eq!(grid.len(), 22);
        assert_eq!(grid.first().map(String::as_str), Some("08:00"));
        assert_eq!(grid.last().map(String::as_str), Some("18:30"));
        for pair in grid.windows(2) {
            assert!(pair[0] < pair[1]);
        }
        assert!(!grid.contains(&"19:00".to_string()));
    }

    #[test]
    fn no_date_returns_the_full_grid() {
        let appointments = vec![appt("2024-01-20", "10:00", 60, AppointmentStatus::Confirmed)];
        assert_eq!(available_slots(None, &appointments), slot_grid());
    }

    #[test]
    fn booked_slots_are_excluded() {
        let date = "2024-01-20".parse().unwrap();
        let appointments = vec![
            appt("2024-01-20", "10:00", 60, AppointmentStatus::Confirmed),
            appt("2024-01-20", "14:00", 45, AppointmentStatus::Pending),
        ];

        let free = available_slots(Some(date), &appointments);
        assert_eq!(free.len(), 20);
        assert!(!free.contains(&"10:00".to_string()));
        assert!(!free.contains(&"14:00".to_string()));
        assert!(free.contains(&"10:30".to_string()));
    }

    #[test]
    fn cancelled_appointments_still_block_their_slot() {
        let date = "2024-01-20".parse().unwrap();
        let appointments = vec![appt("2024-01-20", "10:00", 60, AppointmentStatus::Cancelled)];

        let free = available_slots(Some(date), &appointments);
        assert!(!free.contains(&"10:00".to_string()));
        assert_eq!(free.len(), 21);
    }

    #[test]
    fn other_dates_do_not_affect_availability() {
        let date = "2024-01-21".parse().unwrap();
        let appointments = vec![
            appt("2024-01-20", "10:00", 60, AppointmentStatus::Confirmed),
            appt("2024-01-22", "10:00", 60, AppointmentStatus::Confirmed),
        ];
        assert_eq!(available_slots(Some(date), &appointments), slot_grid());
    }

    #[test]
    fn duration_does_not_block_neighbouring_slots() {
        let date = "2024-01-20".parse().unwrap();
        let appointments = vec![appt("2024-01-20", "09:00", 90, AppointmentStatus::Confirmed)];

        let free = available_slots(Some(date), &appointments);
        assert!(!free.contains(&"09:00".to_string()));
        assert!(free.contains(&"09:30".to_string()));
        assert!(free.contains(&"10:00".to_string()));
    }

    #[test]
    fn fully_booked_day_yields_an_empty_result() {
        let date: NaiveDate = "2024-01-20".parse().unwrap();
        let appointments: Vec<Appointment> = slot_grid()
            .iter()
            .map(|slot| appt("2024-01-20", slot, 30, AppointmentStatus::Confirmed))
            .collect();
        assert_eq!(appointments.len(), 22);
        assert!(available_slots(Some(date), &appointments).is_empty());
    }

    #[test]
    fn result_is_a_subset_of_the_grid_and_idempotent() {
        let date: NaiveDate = "2024-01-20".parse().unwrap();
        let appointments = vec![
            appt("2024-01-20", "08:30", 30, AppointmentStatus::Confirmed),
            appt("2024-01-20", "18:30", 30, AppointmentStatus::Cancelled),
        ];

        let grid = slot_grid();
        let first = available_slots(Some(date), &appointments);
        let second = available_slots(Some(date), &appointments);
        assert_eq!(first, second);
        assert!(first.iter().all(|slot| grid.contains(slot)));
    }

    #[test]
    fn off_grid_times_never_appear() {
        // A record written through another path may carry a time the
        // grid does not know; it must not leak into the result.
        let date: NaiveDate = "2024-01-20".parse().unwrap();
        let appointments = vec![appt("2024-01-20", "09:15", 30, AppointmentStatus::Confirmed)];

        let free = available_slots(Some(date), &appointments);
        assert_eq!(free.len(), 22);
        assert!(!free.contains(&"09:15".to_string()));
    }
}
