use crate::commands::{finish, CmdMessage, CmdResult};
use crate::counters::CounterStore;
use crate::error::{Result, TallyError};
use crate::store::StorageBackend;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

/// Steps each counter once by its own increment.
///
/// A counter that cannot take another step (below zero, or past `i64::MAX`)
/// is skipped with a warning; the remaining ids are still processed. Ids that vanished are skipped silently.
pub fn run<S: StorageBackend>(
    store: &mut CounterStore<S>,
    ids: &[Uuid],
    direction: Direction,
) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let outcome = match direction {
            Direction::Up => store.increment(id),
            Direction::Down => store.decrement(id),
        };
        match outcome {
            Ok(()) => {}
            Err(TallyError::OutOfRange { name, value, .. }) => {
                result.add_message(CmdMessage::warning(format!(
                    "{} is at {} and cannot go below zero",
                    name, value
                )));
                continue;
            }
            Err(TallyError::Overflow { name, value, .. }) => {
                result.add_message(CmdMessage::warning(format!(
                    "{} is at {} and cannot go any higher",
                    name, value
                )));
                continue;
            }
            Err(e) => return Err(e),
        }

        if let Some(counter) = store.get(id) {
            result.add_message(CmdMessage::success(format!(
                "{}: {}",
                counter.name, counter.value
            )));
            result.affected.push(counter.clone());
        }
    }

    Ok(finish(store, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn steps_up_and_down() {
        let mut store = StoreFixture::new()
            .with_counter("Apples", 5)
            .with_counter("Bananas", 1)
            .store;
        let ids: Vec<Uuid> = store.counters().iter().map(|c| c.id).collect();

        let result = run(&mut store, &ids, Direction::Up).unwrap();
        assert_eq!(result.affected.len(), 2);
        assert_eq!(result.total, Some(6));

        let result = run(&mut store, &ids[..1], Direction::Down).unwrap();
        assert_eq!(result.affected[0].value, 0);
        assert_eq!(result.total, Some(1));
    }

    #[test]
    fn blocked_decrement_warns_and_continues() {
        let mut store = StoreFixture::new()
            .with_counter("Apples", 5)
            .with_counter_at("Bananas", 1, 2)
            .store;
        let ids: Vec<Uuid> = store.counters().iter().map(|c| c.id).collect();

        let result = run(&mut store, &ids, Direction::Down).unwrap();
        assert!(result.has_level(MessageLevel::Warning));
        assert_eq!(result.affected.len(), 1);
        assert_eq!(result.affected[0].name, "Bananas");
        assert_eq!(store.get(&ids[0]).unwrap().value, 0);
        assert_eq!(store.get(&ids[1]).unwrap().value, 1);
    }

    #[test]
    fn overflowing_step_warns_without_below_zero_wording() {
        let mut store = StoreFixture::new()
            .with_counter_at("Apples", 10, i64::MAX - 5)
            .store;
        let ids: Vec<Uuid> = store.counters().iter().map(|c| c.id).collect();

        let result = run(&mut store, &ids, Direction::Up).unwrap();
        assert!(result.affected.is_empty());
        let text = &result.messages[0].content;
        assert!(text.contains("cannot go any higher"), "{}", text);
        assert!(!text.contains("below zero"));
        assert_eq!(store.get(&ids[0]).unwrap().value, i64::MAX - 5);
    }

    #[test]
    fn missing_ids_are_skipped() {
        let mut store = StoreFixture::new().with_counter("Apples", 1).store;
        let result = run(&mut store, &[Uuid::new_v4()], Direction::Up).unwrap();
        assert!(result.affected.is_empty());
        assert!(result.messages.is_empty());
        assert_eq!(result.total, Some(0));
    }
}
