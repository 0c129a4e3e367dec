use std::fs;
use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{CollectionStore, StoreError};

/// Durable JSON-file store, one file per collection.
///
/// While the file does not exist yet the store serves the seed
/// collection; the first `save` materializes it on disk.
pub struct JsonFileStore<T> {
    path: PathBuf,
    seed: Vec<T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: PathBuf, seed: Vec<T>) -> Self {
        Self { path, seed }
    }
}

impl<T> CollectionStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned + Clone + Send + Sync,
{
    fn load(&self) -> Result<Vec<T>, StoreError> {
        if !self.path.exists() {
            return Ok(self.seed.clone());
        }
        let raw = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(items)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Appointment;
    use crate::store::seed;

    #[test]
    fn missing_file_serves_the_seed() {
        let tmp = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(
            tmp.path().join("appointments.json"),
            seed::seed_appointments(),
        );
        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), seed::seed_appointments().len());
    }

    #[test]
    fn save_then_load_round_trips() {
        let tmp = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Appointment> =
            JsonFileStore::new(tmp.path().join("appointments.json"), Vec::new());

        let mut appointments = seed::seed_appointments();
        store.save(&appointments).unwrap();

        appointments.pop();
        store.save(&appointments).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), appointments.len());
        assert_eq!(loaded[0].time, "10:00");
    }

    #[test]
    fn save_creates_parent_directories() {
        let tmp = tempfile::tempdir().unwrap();
        let store: JsonFileStore<Appointment> = JsonFileStore::new(
            tmp.path().join("nested").join("dir").join("appointments.json"),
            Vec::new(),
        );
        store.save(&seed::seed_appointments()).unwrap();
        assert_eq!(store.load().unwrap().len(), 2);
    }

    #[test]
    fn corrupt_file_surfaces_a_serde_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("appointments.json");
        fs::write(&path, "not json").unwrap();

        let store: JsonFileStore<Appointment> = JsonFileStore::new(path, Vec::new());
        assert!(matches!(store.load(), Err(StoreError::Serde(_))));
    }
}
