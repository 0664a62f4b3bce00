use crate::commands::CmdResult;
use crate::counters::CounterStore;
use crate::error::Result;
use crate::store::StorageBackend;

pub fn run<S: StorageBackend>(store: &CounterStore<S>) -> Result<CmdResult> {
    let state = store.state();
    Ok(CmdResult::default()
        .with_listed(state.counters)
        .with_total(state.total))
}
