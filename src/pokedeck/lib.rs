//! # Pokedeck Architecture
//!
//! Pokedeck keeps a small personal deck of creature cards backed by an
//! external lookup API. The library holds all of the behavior; the binary is
//! one terminal client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs, print.rs, shell.rs)           │
//! │  - Parses arguments, renders cards, runs the shell          │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns session state (collection, candidate, cards)        │
//! │  - Sequences commands, notifies subscribers of changes      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - search, confirm, remove, refresh, visibility, config     │
//! │  - Returns `CmdResult` with notices, never prints           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/) and Lookup (lookup/)                      │
//! │  - KeyValueStore: FileStore, InMemoryStore                  │
//! │  - LookupService: PokeApiClient, InMemoryLookup             │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## State
//!
//! Only the ordered id list is persisted. Cards are rebuilt from it after
//! every change by looking each id up again; visibility flags and the
//! pending candidate live in memory for the length of a session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade and change notification
//! - [`commands`]: Business logic for each operation
//! - [`collection`]: The saved id list
//! - [`display`]: Card list and visibility flags
//! - [`store`]: Persistence abstraction and implementations
//! - [`lookup`]: Lookup service abstraction and implementations
//! - [`model`]: Core data types
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod collection;
pub mod commands;
pub mod config;
pub mod display;
pub mod error;
pub mod lookup;
pub mod model;
pub mod store;
