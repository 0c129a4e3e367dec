use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "FisioGest";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Address the API server binds to. The app serves one practitioner on
/// their own machine, so it stays on loopback.
pub const API_ADDR: SocketAddr =
    SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8420);

/// Get the application data directory
/// ~/FisioGest/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// JSON file backing the patients collection
pub fn patients_store_path() -> PathBuf {
    app_data_dir().join("patients.json")
}

/// JSON file backing the appointments collection
pub fn appointments_store_path() -> PathBuf {
    app_data_dir().join("appointments.json")
}

/// SQLite database holding the patient intake table
pub fn database_path() -> PathBuf {
    app_data_dir().join("fisiogest.db")
}

pub fn default_log_filter() -> String {
    "fisiogest=info".to_string()
}
