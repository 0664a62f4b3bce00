//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every UI.
//!
//! The facade:
//! - **Owns** the [`CounterStore`], built once at startup
//! - **Normalizes inputs** (selectors → counter ids)
//! - **Dispatches** to `commands/*.rs`
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no printing and holds no business rules.
//!
//! ## Generic Over StorageBackend
//!
//! `TallyApi<B: StorageBackend>`:
//! - Production: `TallyApi<FsBackend>`
//! - Testing: `TallyApi<MemBackend>`

use crate::commands::{self, adjust::Direction};
use crate::counters::CounterStore;
use crate::error::{Result, ValidationError};
use crate::index::{parse_selectors, resolve_all};
use crate::model::{Counter, CounterState};
use crate::store::StorageBackend;
use uuid::Uuid;

pub use crate::commands::{CmdMessage, CmdResult, MessageLevel};

pub struct TallyApi<B: StorageBackend> {
    store: CounterStore<B>,
}

impl<B: StorageBackend> TallyApi<B> {
    /// Opens the store on `backend`, loading whatever it holds.
    pub fn new(backend: B) -> Self {
        Self {
            store: CounterStore::open(backend),
        }
    }

    pub fn store(&self) -> &CounterStore<B> {
        &self.store
    }

    // --- Raw operations, keyed by id ---

    pub fn add_counter(
        &mut self,
        name: &str,
        increment: i64,
    ) -> std::result::Result<Counter, ValidationError> {
        self.store.add_counter(name, increment)
    }

    pub fn apply_delta(&mut self, id: &Uuid, delta: i64) -> Result<()> {
        self.store.apply_delta(id, delta)
    }

    pub fn reset_counter(&mut self, id: &Uuid) {
        self.store.reset_counter(id)
    }

    pub fn delete_counter(&mut self, id: &Uuid) {
        self.store.delete_counter(id)
    }

    pub fn state(&self) -> CounterState {
        self.store.state()
    }

    pub fn persistence_error(&self) -> Option<&str> {
        self.store.persistence_error()
    }

    // --- Selector-based commands ---

    pub fn add(&mut self, name: &str, increment: i64) -> Result<CmdResult> {
        commands::add::run(&mut self.store, name, increment)
    }

    pub fn increment<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        commands::adjust::run(&mut self.store, &ids, Direction::Up)
    }

    pub fn decrement<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        commands::adjust::run(&mut self.store, &ids, Direction::Down)
    }

    pub fn reset<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        commands::reset::run(&mut self.store, &ids)
    }

    pub fn delete<I: AsRef<str>>(&mut self, selectors: &[I]) -> Result<CmdResult> {
        let ids = self.resolve(selectors)?;
        commands::delete::run(&mut self.store, &ids)
    }

    pub fn list(&self) -> Result<CmdResult> {
        commands::list::run(&self.store)
    }

    /// All selectors are resolved before anything runs, so a typo in the
    /// last one leaves every counter untouched.
    fn resolve<I: AsRef<str>>(&self, selectors: &[I]) -> Result<Vec<Uuid>> {
        let parsed = parse_selectors(selectors)?;
        resolve_all(self.store.counters(), &parsed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TallyError;
    use crate::store::memory::MemBackend;

    fn api() -> TallyApi<MemBackend> {
        TallyApi::new(MemBackend::new())
    }

    #[test]
    fn add_dispatches_to_store() {
        let mut api = api();
        let result = api.add("Apples", 5).unwrap();
        assert_eq!(result.affected[0].increment, 5);
        assert_eq!(api.state().counters.len(), 1);
    }

    #[test]
    fn selectors_reach_the_right_counter() {
        let mut api = api();
        api.add("Apples", 5).unwrap();
        api.add("Bananas", 1).unwrap();

        api.increment(&["1", "bananas"]).unwrap();
        let state = api.state();
        assert_eq!(state.counters[0].value, 5);
        assert_eq!(state.counters[1].value, 1);
        assert_eq!(state.total, 6);

        api.decrement(&["Apples"]).unwrap();
        api.reset(&["2"]).unwrap();
        assert_eq!(api.state().total, 0);

        let badge = api.state().counters[0].badge();
        api.delete(&[format!("#{}", badge)]).unwrap();
        let state = api.state();
        assert_eq!(state.counters.len(), 1);
        assert_eq!(state.counters[0].name, "Bananas");
    }

    #[test]
    fn bad_selector_changes_nothing() {
        let mut api = api();
        api.add("Apples", 1).unwrap();

        let err = api.increment(&["1", "Pears"]).unwrap_err();
        assert!(matches!(err, TallyError::Api(_)));
        assert_eq!(api.state().total, 0);
    }

    #[test]
    fn raw_operations_follow_store_rules() {
        let mut api = api();
        let id = api.add_counter("Apples", 5).unwrap().id;
        api.apply_delta(&id, 5).unwrap();
        assert!(api.apply_delta(&id, -10).is_err());
        api.reset_counter(&id);
        assert_eq!(api.state().total, 0);
        api.delete_counter(&id);
        assert!(api.apply_delta(&id, 5).is_ok());
        assert!(api.state().counters.is_empty());
        assert_eq!(api.persistence_error(), None);
    }

    #[test]
    fn list_reports_total() {
        let mut api = api();
        api.add("Apples", 5).unwrap();
        api.increment(&["1"]).unwrap();
        let result = api.list().unwrap();
        assert_eq!(result.listed.len(), 1);
        assert_eq!(result.total, Some(5));
    }
}
