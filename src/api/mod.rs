//! HTTP API.
//!
//! A small axum router nested under `/api/`: the patient intake
//! endpoint plus read-only agenda and health routes. No authentication
//! layer; the server binds to the practitioner's own machine.

pub mod endpoints;
pub mod error;
pub mod router;
pub mod types;

pub use router::clinic_api_router;
pub use types::ApiContext;
