//! # Binz Architecture
//!
//! Binz is a client library for a hosted JSON-bin service that happens to
//! ship a CLI, not the other way around. The layering keeps it that way:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (args.rs, wired by main.rs)                      │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the wired capabilities and the index path           │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - The synchronization core: remote first, index second     │
//! │  - Generic over capability traits, no I/O assumptions       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Capability Layer (files/, storage.rs, remote/)             │
//! │  - FileAccess: HostFs (production), MemFs (testing)         │
//! │  - BinStore: JsonStorage over any FileAccess                │
//! │  - BinRemote: HttpBinService (production), ScriptedRemote   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## The Synchronization Discipline
//!
//! Every mutating command calls the remote service before touching local
//! state, so a network failure never dirties the index. A local index
//! save that fails after a successful remote mutation is reported as
//! drift (`IndexSync`), not hidden. Listing is served purely from the
//! local index; `get` is the one read that bypasses it.
//!
//! ## Testing Strategy
//!
//! Commands carry the lion's share of tests, run entirely against
//! in-memory capabilities. `tests/http_remote.rs` pins the wire contract
//! against a mock HTTP server; `tests/cli.rs` exercises the binary
//! end to end.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade, entry point for all operations
//! - [`commands`]: The synchronization core, one module per operation
//! - [`files`]: Raw file access capability
//! - [`storage`]: The local metadata index
//! - [`remote`]: The remote bin service client
//! - [`model`]: Core data types (`Bin`, `BinList`)
//! - [`config`]: Environment configuration
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod files;
pub mod model;
pub mod remote;
pub mod storage;
