use super::StorageBackend;
use crate::error::{Result, TallyError};
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory storage backend for testing.
///
/// Uses `RefCell` for interior mutability since tally is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    slots: RefCell<HashMap<String, String>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-seeded with `raw` under `key`.
    pub fn with_raw(key: &str, raw: &str) -> Self {
        let backend = Self::new();
        backend.put(key, raw);
        backend
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }

    /// Store `raw` directly, bypassing error simulation.
    pub fn put(&self, key: &str, raw: &str) {
        self.slots
            .borrow_mut()
            .insert(key.to_string(), raw.to_string());
    }

    /// Raw value currently stored under `key`.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.slots.borrow().get(key).cloned()
    }
}

impl StorageBackend for MemBackend {
    fn load(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn save(&self, key: &str, raw: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(TallyError::Store("Simulated write error".to_string()));
        }
        self.put(key, raw);
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::counters::CounterStore;

    pub struct StoreFixture {
        pub store: CounterStore<MemBackend>,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: CounterStore::open(MemBackend::new()),
            }
        }

        pub fn with_counter(mut self, name: &str, increment: i64) -> Self {
            self.store.add_counter(name, increment).unwrap();
            self
        }

        pub fn with_counter_at(mut self, name: &str, increment: i64, value: i64) -> Self {
            let id = self.store.add_counter(name, increment).unwrap().id;
            self.store.apply_delta(&id, value).unwrap();
            self
        }

        pub fn with_counters(mut self, count: usize) -> Self {
            for i in 0..count {
                self.store
                    .add_counter(&format!("Thing {}", i + 1), 1)
                    .unwrap();
            }
            self
        }
    }
}
