//! Agenda endpoints.
//!
//! `GET /api/agenda/:date` — the day view: that date's appointments
//! plus the slots still bookable on it.

use axum::extract::{Path, State};
use axum::Json;
use chrono::NaiveDate;
use serde::Serialize;

use crate::agenda;
use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::models::Appointment;
use crate::scheduling::available_slots;

#[derive(Serialize)]
pub struct AgendaDayResponse {
    pub date: NaiveDate,
    pub appointments: Vec<Appointment>,
    pub available_slots: Vec<String>,
}

/// `GET /api/agenda/:date` — appointments and free slots for one day.
pub async fn day(
    State(ctx): State<ApiContext>,
    Path(date): Path<String>,
) -> Result<Json<AgendaDayResponse>, ApiError> {
    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")
        .map_err(|_| ApiError::BadRequest("Fecha inválida, se espera YYYY-MM-DD".into()))?;

    let all = ctx.appointments.load()?;
    let appointments = agenda::appointments_on(&all, date);
    let free = available_slots(Some(date), &all);

    Ok(Json(AgendaDayResponse {
        date,
        appointments,
        available_slots: free,
    }))
}
