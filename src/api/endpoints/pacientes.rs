//! Patient intake endpoint.
//!
//! `POST /api/pacientes` writes one row to the relational intake table.
//! No authentication, no validation beyond what SQLite enforces, no
//! idempotency key; resubmitting creates another row.

use axum::extract::State;
use axum::Json;
use serde::Serialize;

use crate::api::error::ApiError;
use crate::api::types::ApiContext;
use crate::db;
use crate::db::pacientes::NuevoPaciente;

#[derive(Serialize)]
pub struct PacienteResponse {
    pub mensaje: &'static str,
}

/// `POST /api/pacientes` — store a patient intake row.
pub async fn create(
    State(ctx): State<ApiContext>,
    Json(paciente): Json<NuevoPaciente>,
) -> Result<Json<PacienteResponse>, ApiError> {
    let conn = ctx
        .db
        .lock()
        .map_err(|_| ApiError::Internal("lock poisoned".into()))?;

    db::pacientes::insert_paciente(&conn, &paciente).map_err(ApiError::from)?;

    Ok(Json(PacienteResponse {
        mensaje: "Paciente guardado con éxito",
    }))
}
