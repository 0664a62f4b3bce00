use crate::commands::{finish, CmdMessage, CmdResult};
use crate::counters::CounterStore;
use crate::error::Result;
use crate::store::StorageBackend;
use uuid::Uuid;

/// Removes counters for good. There is no trash and no restore.
pub fn run<S: StorageBackend>(store: &mut CounterStore<S>, ids: &[Uuid]) -> Result<CmdResult> {
    let mut result = CmdResult::default();

    for id in ids {
        let Some(counter) = store.get(id).cloned() else {
            continue;
        };
        store.delete_counter(id);
        result.add_message(CmdMessage::success(format!(
            "Counter deleted: {}",
            counter.name
        )));
        result.affected.push(counter);
    }

    Ok(finish(store, result))
}
