use std::sync::{Arc, Mutex};

use rusqlite::Connection;

use crate::models::Appointment;
use crate::store::CollectionStore;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct ApiContext {
    /// Intake table connection. rusqlite connections are not `Sync`,
    /// so the single connection sits behind a mutex.
    pub db: Arc<Mutex<Connection>>,
    pub appointments: Arc<dyn CollectionStore<Appointment>>,
}

impl ApiContext {
    pub fn new(
        db: Connection,
        appointments: Arc<dyn CollectionStore<Appointment>>,
    ) -> Self {
        Self {
            db: Arc::new(Mutex::new(db)),
            appointments,
        }
    }
}
