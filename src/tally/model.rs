use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Number of trailing id characters shown on a counter's badge.
pub const BADGE_LEN: usize = 6;

/// One user-created counter.
///
/// Serialized as `{ "id", "name", "value", "increment" }`; the field order and
/// names are the on-disk format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Counter {
    pub id: Uuid,
    pub name: String,
    pub value: i64,
    pub increment: i64,
}

impl Counter {
    /// Builds a fresh counter at zero. Callers are expected to have validated
    /// `name` and `increment` already.
    pub fn new(name: impl Into<String>, increment: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            value: 0,
            increment,
        }
    }

    /// Whether a decrement by the counter's own step keeps it non-negative.
    pub fn can_decrement(&self) -> bool {
        self.value - self.increment >= 0
    }

    /// Case-insensitive name comparison used for the uniqueness rule.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Short id shown to users, the last [`BADGE_LEN`] characters.
    pub fn badge(&self) -> String {
        let id = self.id.simple().to_string();
        id[id.len() - BADGE_LEN..].to_string()
    }
}

/// Snapshot handed to the view layer: the ordered counters and their total.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CounterState {
    pub counters: Vec<Counter>,
    pub total: i64,
}

impl CounterState {
    /// The store never holds a list whose sum overflows, so the saturating
    /// fallback is not reached for store-built states.
    pub fn from_counters(counters: Vec<Counter>) -> Self {
        let total = checked_total(&counters).unwrap_or(i64::MAX);
        Self { counters, total }
    }
}

/// Sum of all values, or `None` if it does not fit in an `i64`.
pub fn checked_total(counters: &[Counter]) -> Option<i64> {
    counters
        .iter()
        .try_fold(0i64, |acc, c| acc.checked_add(c.value))
}
