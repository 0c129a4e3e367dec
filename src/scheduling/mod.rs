//! Scheduling core: month-grid construction and slot availability.
//!
//! Both operations are pure transforms over values the caller supplies:
//! no I/O, no shared state. Callers fetch the appointment collection
//! once and pass it in.

pub mod calendar;
pub mod slots;

pub use calendar::month_grid;
pub use slots::{available_slots, slot_grid};
