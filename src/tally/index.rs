//! # Selectors
//!
//! Counter ids are UUIDs, which nobody wants to type. Users point at counters
//! with a [`CounterSelector`] instead:
//!
//! - **Position**: `1`, `2`, ... the 1-based place in display order.
//! - **Name**: `apples`, matched ignoring case (names are unique that way).
//! - **Id suffix**: `#3fa9c2`, the tail of the id as shown on a counter's
//!   badge. At least [`MIN_SUFFIX_LEN`] hex characters.
//!
//! A bare word that is not a number is taken as a name. If no counter has
//! that name and the word looks like hex, it is retried as an id suffix, so
//! the badge can be typed without the `#`.
//!
//! Positions shift when counters are deleted. They are resolved against the
//! list as it is at the moment of the call, never cached.

use crate::error::{Result, TallyError};
use crate::model::Counter;
use uuid::Uuid;

pub const MIN_SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterSelector {
    Position(usize),
    Name(String),
    IdSuffix(String),
}

impl std::fmt::Display for CounterSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CounterSelector::Position(n) => write!(f, "{}", n),
            CounterSelector::Name(name) => write!(f, "\"{}\"", name),
            CounterSelector::IdSuffix(s) => write!(f, "#{}", s),
        }
    }
}

impl std::str::FromStr for CounterSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if s.is_empty() {
            return Err("Empty selector".to_string());
        }
        if let Some(rest) = s.strip_prefix('#') {
            if rest.len() < MIN_SUFFIX_LEN || !is_hex(rest) {
                return Err(format!(
                    "Invalid id suffix: {} (need at least {} hex characters)",
                    s, MIN_SUFFIX_LEN
                ));
            }
            return Ok(CounterSelector::IdSuffix(rest.to_lowercase()));
        }
        if let Ok(n) = s.parse::<usize>() {
            if n == 0 {
                return Err("Positions start at 1".to_string());
            }
            return Ok(CounterSelector::Position(n));
        }
        Ok(CounterSelector::Name(s.to_string()))
    }
}

fn is_hex(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_hexdigit())
}

fn find_by_suffix(counters: &[Counter], suffix: &str) -> Result<Option<Uuid>> {
    let matches: Vec<&Counter> = counters
        .iter()
        .filter(|c| c.id.simple().to_string().ends_with(suffix))
        .collect();
    match matches.as_slice() {
        [] => Ok(None),
        [one] => Ok(Some(one.id)),
        _ => Err(TallyError::Api(format!("Id #{} is ambiguous", suffix))),
    }
}

/// Resolves a selector against the current list.
pub fn resolve(counters: &[Counter], selector: &CounterSelector) -> Result<Uuid> {
    let not_found = || TallyError::Api(format!("Counter {} not found", selector));

    match selector {
        CounterSelector::Position(n) => counters
            .get(n.wrapping_sub(1))
            .map(|c| c.id)
            .ok_or_else(not_found),
        CounterSelector::IdSuffix(suffix) => find_by_suffix(counters, suffix)?.ok_or_else(not_found),
        CounterSelector::Name(name) => {
            if let Some(c) = counters.iter().find(|c| c.has_name(name)) {
                return Ok(c.id);
            }
            let lowered = name.to_lowercase();
            if lowered.len() >= MIN_SUFFIX_LEN && is_hex(&lowered) {
                if let Some(id) = find_by_suffix(counters, &lowered)? {
                    return Ok(id);
                }
            }
            Err(not_found())
        }
    }
}

/// Resolves several selectors, failing on the first that does not match.
/// Duplicates are kept; callers decide what acting twice means.
pub fn resolve_all(counters: &[Counter], selectors: &[CounterSelector]) -> Result<Vec<Uuid>> {
    selectors.iter().map(|s| resolve(counters, s)).collect()
}

pub fn parse_selectors<I: AsRef<str>>(inputs: &[I]) -> Result<Vec<CounterSelector>> {
    inputs
        .iter()
        .map(|s| s.as_ref().parse::<CounterSelector>().map_err(TallyError::Api))
        .collect()
}
