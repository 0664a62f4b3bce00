//! # Tally Architecture
//!
//! Tally is a **UI-agnostic counter library**: named counters, each stepped up
//! or down by its own fixed increment, with a running total and local
//! persistence. The `tally` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, renders cards and totals               │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the CounterStore                                    │
//! │  - Normalizes selectors (1, apples, #3fa9c2) → ids          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - One module per operation, returns CmdResult              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Counter Store (counters.rs)                                │
//! │  - Validation, mutation, derived total                      │
//! │  - Saves the whole list after every change                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - StorageBackend trait: load(key) / save(key, raw)         │
//! │  - FsBackend (production), MemBackend (testing)             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes Rust values and returns Rust types. It
//! never writes to stdout/stderr and never exits the process. Diagnostics go
//! through `tracing`; whether anything listens is up to the binary.
//!
//! ## Failure Model
//!
//! Nothing in the core is fatal. Bad input to `add` is a
//! [`error::ValidationError`]. A failed save keeps the change in memory and is
//! reported through [`counters::CounterStore::persistence_error`]. Corrupt
//! saved data opens an empty store.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`counters`]: The counter store and its invariants
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: `Counter` and `CounterState`
//! - [`index`]: Selector parsing and resolution
//! - [`config`]: Configuration and data directory
//! - [`logging`]: Tracing subscriber setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod counters;
pub mod error;
pub mod index;
pub mod logging;
pub mod model;
pub mod store;
