//! # Quotz Architecture
//!
//! Quotz is a **UI-agnostic quote collection library** with a CLI client on
//! top. The library owns all state management and consistency concerns; the
//! binary only parses arguments and prints.
//!
//! ## Layers
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs + args.rs)                             │
//! │  - Parses arguments, prints messages, owns exit codes      │
//! │  - Composition root for the sync watch loop                │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                        │
//! │  - QuotzApi facade; dispatches to commands                 │
//! │  - Returns structured Result<CmdResult>                    │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                             │
//! │  - Business logic; no I/O assumptions beyond its own files │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Core State (book.rs) + Sync (sync.rs, remote/)            │
//! │  - QuoteBook: collection, category index, selection state  │
//! │  - SyncEngine: fetch/compare/replace reconciliation        │
//! └────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                    │
//! │  - StorageBackend trait                                    │
//! │  - FileStore (production), InMemoryStore (testing)         │
//! └────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Consistency model
//!
//! Execution is single-threaded and event-driven: all store mutations go
//! through one `QuoteBook` on one logical thread, so the book needs no
//! locking. Every mutation persists the full collection before the
//! operation returns. The sync scheduler runs on its own timer thread but
//! only *sends ticks*; reconciliation itself always runs on the thread that
//! owns the book, one cycle at a time, because every cycle holds exclusive
//! borrows of the engine and the book for its whole duration.
//!
//! Conflict resolution is server-wins: any divergence from the remote
//! replaces the local collection wholesale. Local-only additions made
//! between cycles are discarded; an availability-over-consistency trade
//! the tool makes deliberately.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`book`]: The quote collection, category index and selection state
//! - [`sync`]: Reconciliation engine and periodic scheduler
//! - [`remote`]: Remote endpoint abstraction and schema mapping
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Quote`, the seed collection)
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod book;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod remote;
pub mod store;
pub mod sync;
