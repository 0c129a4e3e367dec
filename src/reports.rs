//! Reports — practice-wide aggregation plus printable PDF exports.
//!
//! All metrics are simple reductions over the two collections; the PDF
//! builders replace the browser print sheet with `printpdf` documents.

use printpdf::*;
use serde::Serialize;
use std::io::BufWriter;
use thiserror::Error;

use crate::agenda::{agenda_stats, AgendaStats};
use crate::models::{Appointment, Patient};
use crate::patients::{patient_stats, PatientStats};

#[derive(Error, Debug)]
pub enum ReportError {
    #[error("PDF error: {0}")]
    Pdf(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct TreatmentShare {
    pub label: &'static str,
    pub count: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub patients: PatientStats,
    pub appointments: AgendaStats,
    pub total_treatments: u32,
    pub avg_treatments_per_patient: f64,
    /// Discharged patients as a percentage of the registry.
    pub recovery_rate: f64,
    /// Confirmed appointments as a percentage of all bookings.
    pub adherence_rate: f64,
    pub treatment_mix: Vec<TreatmentShare>,
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    round1(part as f64 / whole as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn report_summary(patients: &[Patient], appointments: &[Appointment]) -> ReportSummary {
    let patient_breakdown = patient_stats(patients);
    let appointment_breakdown = agenda_stats(appointments);
    let total_treatments: u32 = patients.iter().map(|p| p.treatments).sum();

    let avg = if patient_breakdown.total == 0 {
        0.0
    } else {
        round1(total_treatments as f64 / patient_breakdown.total as f64)
    };

    // The fixed 40/30/20/10 split the practice has always reported;
    // per-session type labels are not recorded on history entries.
    let share = |factor: f64| (total_treatments as f64 * factor).floor() as u32;
    let treatment_mix = vec![
        TreatmentShare { label: "Terapia manual", count: share(0.4) },
        TreatmentShare { label: "Rehabilitación", count: share(0.3) },
        TreatmentShare { label: "Evaluación", count: share(0.2) },
        TreatmentShare { label: "Ejercicios", count: share(0.1) },
    ];

    ReportSummary {
        recovery_rate: percent(patient_breakdown.discharged, patient_breakdown.total),
        adherence_rate: percent(appointment_breakdown.confirmed, appointment_breakdown.total),
        patients: patient_breakdown,
        appointments: appointment_breakdown,
        total_treatments,
        avg_treatments_per_patient: avg,
        treatment_mix,
    }
}

// ─── PDF export ───────────────────────────────────────────────────────────────

/// Renders the practice report as a one-page PDF. Returns PDF bytes.
pub fn generate_report_pdf(summary: &ReportSummary) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) =
        PdfDocument::new("Reporte de la consulta", Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font: {e}")))?;

    let mut y = Mm(280.0);

    layer.use_text("REPORTE DE LA CONSULTA", 14.0, Mm(20.0), y, &bold);
    y -= Mm(10.0);

    layer.use_text("PACIENTES:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for line in [
        format!("  Total: {}", summary.patients.total),
        format!("  Activos: {}", summary.patients.active),
        format!("  En seguimiento: {}", summary.patients.follow_up),
        format!("  De alta: {}", summary.patients.discharged),
    ] {
        layer.use_text(&line, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    layer.use_text("CITAS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    for line in [
        format!("  Total: {}", summary.appointments.total),
        format!("  Confirmadas: {}", summary.appointments.confirmed),
        format!("  Pendientes: {}", summary.appointments.pending),
        format!("  Canceladas: {}", summary.appointments.cancelled),
    ] {
        layer.use_text(&line, 9.0, Mm(25.0), y, &font);
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    layer.use_text("TRATAMIENTOS:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!(
            "  Total: {} (promedio {:.1} por paciente)",
            summary.total_treatments, summary.avg_treatments_per_patient
        ),
        9.0,
        Mm(25.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    for share in &summary.treatment_mix {
        layer.use_text(
            format!("  {}: {}", share.label, share.count),
            9.0,
            Mm(25.0),
            y,
            &font,
        );
        y -= Mm(4.5);
    }
    y -= Mm(4.0);

    layer.use_text("RENDIMIENTO:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("  Tasa de recuperación: {:.1}%", summary.recovery_rate),
        9.0,
        Mm(25.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("  Tasa de asistencia: {:.1}%", summary.adherence_rate),
        9.0,
        Mm(25.0),
        y,
        &font,
    );

    save_pdf(doc)
}

/// Renders a printable patient record sheet. Returns PDF bytes.
pub fn generate_patient_pdf(patient: &Patient) -> Result<Vec<u8>, ReportError> {
    let (doc, page1, layer1) =
        PdfDocument::new("Ficha del paciente", Mm(210.0), Mm(297.0), "Layer 1");
    let layer = doc.get_page(page1).get_layer(layer1);
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ReportError::Pdf(format!("font: {e}")))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ReportError::Pdf(format!("font: {e}")))?;

    let mut y = Mm(280.0);

    layer.use_text(&patient.name, 14.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    layer.use_text(
        format!("Cédula: {}  ·  Estado: {}", patient.cedula, patient.status.as_str()),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("Tel: {}  ·  Email: {}", patient.phone, patient.email),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(4.5);
    layer.use_text(
        format!("Tratamientos: {}", patient.treatments),
        9.0,
        Mm(20.0),
        y,
        &font,
    );
    y -= Mm(8.0);

    if let Some(notes) = &patient.notes {
        layer.use_text("NOTAS:", 11.0, Mm(20.0), y, &bold);
        y -= Mm(6.0);
        for line in wrap_text(notes, 80) {
            layer.use_text(&line, 9.0, Mm(25.0), y, &font);
            y -= Mm(4.5);
        }
        y -= Mm(4.0);
    }

    layer.use_text("HISTORIAL MÉDICO:", 11.0, Mm(20.0), y, &bold);
    y -= Mm(6.0);
    if patient.medical_history.is_empty() {
        layer.use_text("  Sin sesiones registradas.", 9.0, Mm(25.0), y, &font);
    } else {
        for entry in &patient.medical_history {
            let text = format!(
                "  {} — {} — {} ({})",
                entry.date, entry.treatment, entry.notes, entry.evolution
            );
            for line in wrap_text(&text, 80) {
                layer.use_text(&line, 9.0, Mm(25.0), y, &font);
                y -= Mm(4.5);
            }
            y -= Mm(2.0);
        }
    }

    save_pdf(doc)
}

fn save_pdf(doc: PdfDocumentReference) -> Result<Vec<u8>, ReportError> {
    let mut buf = BufWriter::new(Vec::new());
    doc.save(&mut buf)
        .map_err(|e| ReportError::Pdf(format!("save: {e}")))?;
    buf.into_inner()
        .map_err(|e| ReportError::Pdf(format!("buffer: {e}")))
}

/// Simple word-wrap helper for PDF text rendering.
fn wrap_text(text: &str, max_chars: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.len() + word.len() + 1 > max_chars && !current.is_empty() {
            lines.push(current.clone());
            current.clear();
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    lines
}
