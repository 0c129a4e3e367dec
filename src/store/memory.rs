use std::sync::Mutex;

use super::{CollectionStore, StoreError};

/// In-memory backing store, used by tests and as a scratch store.
pub struct MemoryStore<T> {
    items: Mutex<Vec<T>>,
}

impl<T> MemoryStore<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: Mutex::new(items),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<T: Clone + Send> CollectionStore<T> for MemoryStore<T> {
    fn load(&self) -> Result<Vec<T>, StoreError> {
        let items = self.items.lock().map_err(|_| StoreError::LockPoisoned)?;
        Ok(items.clone())
    }

    fn save(&self, items: &[T]) -> Result<(), StoreError> {
        let mut guard = self.items.lock().map_err(|_| StoreError::LockPoisoned)?;
        *guard = items.to_vec();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_replaces_the_whole_collection() {
        let store = MemoryStore::new(vec![1, 2, 3]);
        store.save(&[7]).unwrap();
        assert_eq!(store.load().unwrap(), vec![7]);
    }

    #[test]
    fn default_store_is_empty() {
        let store: MemoryStore<u8> = MemoryStore::default();
        assert!(store.load().unwrap().is_empty());
    }
}
