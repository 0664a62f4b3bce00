use crate::commands::{finish, CmdMessage, CmdResult};
use crate::counters::CounterStore;
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(
    store: &mut CounterStore<S>,
    name: &str,
    increment: i64,
) -> Result<CmdResult> {
    let counter = store.add_counter(name, increment)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Counter added: {} (+{})",
        counter.name, counter.increment
    )));
    Ok(finish(store, result.with_affected(vec![counter])))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::counters::PERSIST_FAILURE;
    use crate::error::{TallyError, ValidationError};
    use crate::store::memory::MemBackend;

    #[test]
    fn adds_counter_with_message() {
        let mut store = CounterStore::open(MemBackend::new());
        let result = run(&mut store, " Apples ", 5).unwrap();

        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Apples");
        assert_eq!(result.total, Some(0));
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert!(result.messages[0].content.contains("Apples"));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn validation_error_propagates() {
        let mut store = CounterStore::open(MemBackend::new());
        run(&mut store, "Apples", 1).unwrap();

        let err = run(&mut store, "APPLES", 1).unwrap_err();
        assert!(matches!(
            err,
            TallyError::Validation(ValidationError::NameNotUnique)
        ));
        assert_eq!(err.to_string(), "name not unique");
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn persistence_failure_is_a_warning() {
        let mut store = CounterStore::open(MemBackend::new());
        store.backend().set_simulate_write_error(true);

        let result = run(&mut store, "Apples", 1).unwrap();
        assert!(result.has_level(MessageLevel::Success));
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == MessageLevel::Warning && m.content == PERSIST_FAILURE));
        assert_eq!(store.len(), 1);
    }
}
