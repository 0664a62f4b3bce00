use crate::commands::{finish, CmdMessage, CmdResult};
use crate::counters::CounterStore;
use crate::error::Result;
use crate::store::StorageBackend;
use uuid::Uuid;

pub fn run<S: StorageBackend>(store: &mut CounterStore<S>, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        store.reset_counter(id);
        if let Some(counter) = store.get(id) {
            result.add_message(CmdMessage::success(format!(
                "Counter reset: {}",
                counter.name
            )));
            result.affected.push(counter.clone());
        }
    }

    Ok(finish(store, result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn resets_only_selected() {
        let mut store = StoreFixture::new()
            .with_counter_at("Apples", 1, 3)
            .with_counter_at("Bananas", 1, 2)
            .store;
        let apples = store.counters()[0].id;

        let result = run(&mut store, &[apples]).unwrap();
        assert_eq!(result.affected[0].value, 0);
        assert_eq!(result.total, Some(2));
        assert_eq!(store.counters()[1].value, 2);
    }
}
