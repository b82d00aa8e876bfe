//! # AgilStore Architecture
//!
//! AgilStore is a small product inventory manager. The records live in a single JSON
//! document that is read in full at the start of every operation and written back in
//! full after every mutation. There is one process, one actor and no locking.
//!
//! The crate is a library with a CLI client on top, and the layering reflects that:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, runs the interactive menu session      │
//! │  - Renders tables and messages, owns exit codes             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - load → record operation → save                           │
//! │  - Builds CmdResult messages, never prints                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Record Operations (inventory.rs)                           │
//! │  - Pure functions over the in-memory collection             │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Abstract DataStore trait                                 │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust arguments and returns regular Rust
//! types. It never writes to stdout/stderr and never exits the process. Numeric input
//! is parsed and rejected at the boundary (see [`validation`]); the record operations
//! trust the values they are handed.
//!
//! ## Testing Strategy
//!
//! 1. **Record operations** (`inventory.rs`): unit tests of the pure logic.
//! 2. **Commands** (`commands/*.rs`): tests against `InMemoryStore`, including
//!    simulated write failures.
//! 3. **Store** (`tests/fs_store_test.rs`): the file format and atomic writes.
//! 4. **CLI** (`tests/cli_e2e.rs`): the binary, driven by arguments and stdin.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: One module per operation
//! - [`inventory`]: Record operations over the collection
//! - [`store`]: Storage abstraction and implementations
//! - [`model`]: Core data types (`Product`, `NewProduct`, `ProductPatch`, `Scope`)
//! - [`config`]: Per-scope configuration
//! - [`init`]: Context resolution (directories, config, store)
//! - [`validation`]: Boundary parsing of operator input
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod inventory;
pub mod model;
pub mod store;
pub mod validation;
