//! # Numz Architecture
//!
//! Numz hands out 4-digit numbers whose digits are all different (door
//! codes, PINs, ticket numbers) and remembers every number it has handed
//! out, so the same one never comes up twice.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses flags, prints results, owns exit codes            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns store, config and random generator                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - generate, add, blacklist, show, last                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Rules
//!
//! - A valid number renders as exactly four distinct decimal digits, so it
//!   lies in `1000..=9999` (see [`validate`]).
//! - A fixed internal blacklist ([`config::INTERNAL_BLACKLIST`]) is never
//!   generated and never accepted.
//! - Every generated, added or blacklisted number is appended to one JSON
//!   array and is unique within it.
//!
//! ## Known limitation
//!
//! Each command reads the whole file and writes it back. Two processes
//! running at the same moment against the same file can lose one of the
//! two writes.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per action
//! - [`generator`]: Rejection sampling with an attempt cap
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: The persisted [`model::Entry`]
//! - [`config`]: Configuration and the internal blacklist
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod store;
pub mod validate;
