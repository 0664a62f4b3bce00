//! # Command Layer
//!
//! One module per user-facing operation. Each `run` takes the
//! [`CounterStore`](crate::counters::CounterStore) plus already-resolved
//! counter ids and returns a [`CmdResult`]: the counters it touched, the list
//! to display, and messages for the user.
//!
//! Commands never print. Persistence failures reported by the store become a
//! warning message on the result so every UI shows them the same way.

use crate::counters::CounterStore;
use crate::model::Counter;
use crate::store::StorageBackend;

pub mod add;
pub mod adjust;
pub mod delete;
pub mod list;
pub mod reset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub affected: Vec<Counter>,
    pub listed: Vec<Counter>,
    pub total: Option<i64>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_affected(mut self, counters: Vec<Counter>) -> Self {
        self.affected = counters;
        self
    }

    pub fn with_listed(mut self, counters: Vec<Counter>) -> Self {
        self.listed = counters;
        self
    }

    pub fn with_total(mut self, total: i64) -> Self {
        self.total = Some(total);
        self
    }

    pub fn has_level(&self, level: MessageLevel) -> bool {
        self.messages.iter().any(|m| m.level == level)
    }
}

/// Appends the store's persistence warning, if any, and the fresh total.
pub(crate) fn finish<B: StorageBackend>(store: &CounterStore<B>, mut result: CmdResult) -> CmdResult {
    if let Some(err) = store.persistence_error() {
        result.add_message(CmdMessage::warning(err));
    }
    result.with_total(store.total_value())
}
