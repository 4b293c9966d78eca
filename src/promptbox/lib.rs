//! # Promptbox Architecture
//!
//! Promptbox keeps a most-recently-used history of prompt texts and names each
//! entry from its own content. Like its CLI, any UI is a client of the library:
//! the core never prints, never exits and never assumes a terminal.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, asks for confirmation, prints notices  │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - PromptStore<G>: async facade over commands               │
//! │  - Persists through the gateway when a command changed state│
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs) + history.rs                 │
//! │  - Pure, synchronous mutations of the history/preferences   │
//! │  - Validation problems come back as Notices                 │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Persistence Layer (gateway/)                               │
//! │  - Abstract PersistenceGateway trait (async get/set)        │
//! │  - JsonFileGateway (production), InMemoryGateway (testing)  │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Naming
//!
//! A new entry is called `{timestamp}.txt`. As soon as its content is long
//! enough to say something (see [`naming`]), the leading words are appended:
//! `2024-05-01 10-00-00_write a haiku about rust.txt`. The `_` marks the name
//! as settled and later edits never rename it again (see [`filename`]).
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`history`]: The in-memory MRU collection
//! - [`naming`]: Content prefix extraction
//! - [`filename`]: Sanitizing, derived names and rename validation
//! - [`gateway`]: Persistence abstraction and implementations
//! - [`model`]: Entries, preferences and storage snapshots
//! - [`notice`] / [`i18n`]: User-facing notifications and their zh/en text
//! - [`confirm`]: Confirmation for destructive operations
//! - [`index`]: 1-based display indexes
//! - [`config`]: Configuration management
//! - [`editor`] / [`clipboard`]: External editor and system clipboard
//! - [`error`]: Error types

pub mod api;
pub mod clipboard;
pub mod commands;
pub mod config;
pub mod confirm;
pub mod editor;
pub mod error;
pub mod filename;
pub mod gateway;
pub mod history;
pub mod i18n;
pub mod index;
pub mod model;
pub mod naming;
pub mod notice;
