//! # Counter Store
//!
//! [`CounterStore`] owns the ordered counter list and is the only place that
//! mutates it. It enforces the list invariants:
//!
//! - names are non-empty and unique ignoring case,
//! - every `value >= 0`,
//! - every `increment > 0`.
//!
//! The list is loaded once from the [`StorageBackend`] when the store is
//! opened and written back in full after every successful mutation.
//!
//! ## Persistence Failures
//!
//! A failed write does **not** undo the mutation that triggered it. The store
//! keeps working from memory and reports the failure through
//! [`CounterStore::persistence_error`] until a later write succeeds. Only a
//! future reload would lose the data.
//!
//! ## Load Failures
//!
//! Missing, unreadable or malformed stored data (including data that parses
//! but breaks an invariant, or whose values sum past `i64::MAX`) opens an
//! empty store. The failure is logged at `debug` and otherwise swallowed.

use crate::error::{Result, TallyError, ValidationError};
use crate::model::{checked_total, Counter, CounterState};
use crate::store::{StorageBackend, STORAGE_KEY};
use std::collections::HashSet;
use tracing::{debug, warn};
use uuid::Uuid;

/// Message surfaced to the user when the list could not be written.
pub const PERSIST_FAILURE: &str = "Failed to persist data. Storage may be full.";

pub struct CounterStore<B: StorageBackend> {
    backend: B,
    counters: Vec<Counter>,
    persistence_error: Option<String>,
}

impl<B: StorageBackend> CounterStore<B> {
    /// Opens the store, restoring whatever the backend holds.
    pub fn open(backend: B) -> Self {
        let counters = load_counters(&backend);
        debug!(count = counters.len(), "counter store opened");
        Self {
            backend,
            counters,
            persistence_error: None,
        }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    pub fn len(&self) -> usize {
        self.counters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counters.is_empty()
    }

    pub fn get(&self, id: &Uuid) -> Option<&Counter> {
        self.counters.iter().find(|c| c.id == *id)
    }

    /// Sum of all values, recomputed on every call.
    ///
    /// Loading and [`Self::apply_delta`] keep the sum inside `i64`.
    pub fn total_value(&self) -> i64 {
        checked_total(&self.counters).unwrap_or(i64::MAX)
    }

    pub fn state(&self) -> CounterState {
        CounterState::from_counters(self.counters.clone())
    }

    /// The last write failure, cleared by the next successful write.
    pub fn persistence_error(&self) -> Option<&str> {
        self.persistence_error.as_deref()
    }

    /// Creates a counter at the end of the list.
    ///
    /// `name` is trimmed before validation. Rules are checked in order (blank
    /// name, duplicate name ignoring case, non-positive increment) and the
    /// first failure is returned without touching the list.
    pub fn add_counter(
        &mut self,
        name: &str,
        increment: i64,
    ) -> std::result::Result<Counter, ValidationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(ValidationError::NameRequired);
        }
        if self.counters.iter().any(|c| c.has_name(name)) {
            return Err(ValidationError::NameNotUnique);
        }
        if increment <= 0 {
            return Err(ValidationError::IncrementNotPositive);
        }

        let counter = Counter::new(name, increment);
        debug!(id = %counter.id, name = %counter.name, increment, "counter added");
        self.counters.push(counter.clone());
        self.persist();
        Ok(counter)
    }

    /// Adds a signed `delta` to the counter's value.
    ///
    /// Unknown ids are ignored: a delete may already have removed the counter
    /// a stale view is still showing. A delta that would take the value below
    /// zero, or push the value or the total past `i64::MAX`, is rejected and
    /// leaves the counter as it was.
    pub fn apply_delta(&mut self, id: &Uuid, delta: i64) -> Result<()> {
        let total = checked_total(&self.counters).and_then(|t| t.checked_add(delta));
        let Some(counter) = self.counters.iter_mut().find(|c| c.id == *id) else {
            debug!(%id, delta, "delta for missing counter ignored");
            return Ok(());
        };

        let next = match (counter.value.checked_add(delta), total) {
            (Some(next), Some(_)) if next >= 0 => next,
            (Some(_), Some(_)) => {
                return Err(TallyError::OutOfRange {
                    name: counter.name.clone(),
                    value: counter.value,
                    delta,
                })
            }
            _ => {
                return Err(TallyError::Overflow {
                    name: counter.name.clone(),
                    value: counter.value,
                    delta,
                })
            }
        };

        counter.value = next;
        debug!(%id, delta, value = next, "counter adjusted");
        self.persist();
        Ok(())
    }

    /// Applies `+increment` for the counter. No-op for unknown ids.
    pub fn increment(&mut self, id: &Uuid) -> Result<()> {
        match self.get(id).map(|c| c.increment) {
            Some(step) => self.apply_delta(id, step),
            None => Ok(()),
        }
    }

    /// Applies `-increment` for the counter. No-op for unknown ids.
    pub fn decrement(&mut self, id: &Uuid) -> Result<()> {
        match self.get(id).map(|c| c.increment) {
            Some(step) => self.apply_delta(id, -step),
            None => Ok(()),
        }
    }

    /// Sets the counter back to zero. No-op for unknown ids.
    pub fn reset_counter(&mut self, id: &Uuid) {
        let Some(counter) = self.counters.iter_mut().find(|c| c.id == *id) else {
            return;
        };
        counter.value = 0;
        debug!(%id, "counter reset");
        self.persist();
    }

    /// Removes the counter permanently. No-op for unknown ids.
    pub fn delete_counter(&mut self, id: &Uuid) {
        let before = self.counters.len();
        self.counters.retain(|c| c.id != *id);
        if self.counters.len() == before {
            return;
        }
        debug!(%id, "counter deleted");
        self.persist();
    }

    fn persist(&mut self) {
        let written = serde_json::to_string(&self.counters)
            .map_err(TallyError::Serialization)
            .and_then(|raw| self.backend.save(STORAGE_KEY, &raw));

        match written {
            Ok(()) => self.persistence_error = None,
            Err(e) => {
                warn!(error = %e, "failed to persist counters");
                self.persistence_error = Some(PERSIST_FAILURE.to_string());
            }
        }
    }
}

fn load_counters<B: StorageBackend>(backend: &B) -> Vec<Counter> {
    let raw = match backend.load(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            debug!(error = %e, "failed to read saved counters, starting empty");
            return Vec::new();
        }
    };

    let counters: Vec<Counter> = match serde_json::from_str(&raw) {
        Ok(counters) => counters,
        Err(e) => {
            debug!(error = %e, "failed to load saved counters, starting empty");
            return Vec::new();
        }
    };

    if let Err(reason) = check_invariants(&counters) {
        debug!(%reason, "saved counters are inconsistent, starting empty");
        return Vec::new();
    }

    counters
}

fn check_invariants(counters: &[Counter]) -> std::result::Result<(), String> {
    let mut names = HashSet::new();
    let mut ids = HashSet::new();
    for c in counters {
        if c.name.trim().is_empty() {
            return Err("blank name".to_string());
        }
        if !names.insert(c.name.to_lowercase()) {
            return Err(format!("duplicate name {:?}", c.name));
        }
        if !ids.insert(c.id) {
            return Err(format!("duplicate id {}", c.id));
        }
        if c.value < 0 {
            return Err(format!("negative value for {:?}", c.name));
        }
        if c.increment <= 0 {
            return Err(format!("non-positive increment for {:?}", c.name));
        }
    }
    if checked_total(counters).is_none() {
        return Err("total out of range".to_string());
    }
    Ok(())
}
