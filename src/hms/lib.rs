//! # HMS Architecture
//!
//! HMS is a **UI-agnostic record library** for a small hospital desk:
//! patients, staff, doctors, inventory items and appointments, each kept in
//! its own uniqueness-keyed collection. The interactive console is one client
//! of the library, not the other way around.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Console (cli/, wired by main.rs)                           │
//! │  - Login gate, menu loop, prompts, colored output           │
//! │  - The ONLY place that knows about stdin/stdout/exit codes  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, owns the RecordStore          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add / delete / update / search / filter / list           │
//! │  - Returns CmdResult with records and leveled messages      │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - RecordStore: five in-memory Collections                  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Error Model
//!
//! Only two errors come out of record operations: `DuplicateKey` (add with a
//! key already present) and `NotFound` (update of a missing key). Deletes
//! never fail; deleting a missing key is a no-op. Neither error ends the
//! session.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: Business logic for each operation
//! - [`store`]: Collections and the record store
//! - [`model`]: Entity types and the [`model::Record`] key trait
//! - [`auth`]: The operator login gate
//! - [`config`]: Configuration file handling
//! - [`error`]: Error types

pub mod api;
pub mod auth;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
