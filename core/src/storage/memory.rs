use std::cell::{Cell, RefCell};
use std::rc::Rc;

use super::{ProgressStorage, StorageError};

/// In-memory backend. Clones share one slot, which is how tests model two
/// tabs on the same origin.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    unavailable: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a raw value already stored.
    pub fn with_value(raw: impl Into<String>) -> Self {
        let storage = Self::new();
        *storage.slot.borrow_mut() = Some(raw.into());
        storage
    }

    pub fn value(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    /// Overwrite the slot directly, bypassing any store.
    pub fn set_value(&self, raw: Option<String>) {
        *self.slot.borrow_mut() = raw;
    }

    /// Make every load and save fail, like storage in a locked-down browser.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.set(unavailable);
    }

    /// Number of successful saves.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl ProgressStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Unavailable {
                reason: "memory storage disabled".to_string(),
            });
        }
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, raw: &str) -> Result<(), StorageError> {
        if self.unavailable.get() {
            return Err(StorageError::Rejected {
                reason: "memory storage disabled".to_string(),
            });
        }
        *self.slot.borrow_mut() = Some(raw.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_slot() {
        let a = MemoryStorage::new();
        let b = a.clone();
        a.save("{}").unwrap();
        assert_eq!(b.load().unwrap().as_deref(), Some("{}"));
        assert_eq!(b.write_count(), 1);
    }

    #[test]
    fn unavailable_storage_fails_both_ways() {
        let storage = MemoryStorage::with_value("{}");
        storage.set_unavailable(true);
        assert!(matches!(storage.load(), Err(StorageError::Unavailable { .. })));
        assert!(matches!(storage.save("x"), Err(StorageError::Rejected { .. })));

        storage.set_unavailable(false);
        assert_eq!(storage.value().as_deref(), Some("{}"));
    }
}
