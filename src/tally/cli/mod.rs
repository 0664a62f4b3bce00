//! # CLI Behavior
//!
//! This is **one possible UI client** for tally, not the application itself.
//! For the overall architecture see the library docs in `lib.rs`.
//!
//! ## Naked Execution (`tally`)
//!
//! Running `tally` with no arguments lists the counters and the total.
//!
//! ## Picking Counters
//!
//! `up`, `down`, `reset` and `delete` take one or more selectors: a position
//! (`1`), a name ignoring case (`apples`) or the id badge (`#3fa9c2`).
//!
//! ## Decrement
//!
//! A counter can only step down while that keeps it at zero or above. In the
//! list the `-N` control is dimmed when it cannot; asking anyway prints a
//! warning and leaves the counter alone.
//!
//! ## Module Structure
//!
//! - `commands`: Context setup and per-command handlers
//! - `render`: Cards, totals and messages
//! - `setup`: Argument parsing via clap
//! - `shell`: Interactive session

mod commands;
mod render;
mod setup;
mod shell;

pub use commands::run;
